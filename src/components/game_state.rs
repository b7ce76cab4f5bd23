// src/components/game_state.rs

use std::collections::{HashMap, VecDeque};

use itertools::Itertools;
use serde::{Serialize, Deserialize};

use crate::components::card::{Card, CardId, Suit, ALL_SUITS};
use crate::components::stack::StackType;

/// ゲーム全体の進行状態だよ！🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中
    Playing,
    /// 全部のカードが組札に揃った！🏆
    Won,
}

/// テーブルの上の全部のカードを持つ、ゲーム状態のコンテナ。
///
/// 中身はシンプルに「場所ごとの並び」の集まり:
/// - `tableau`: 場札の列。各列は index 0 が一番奥 (最初に配ったカード)、最後が一番手前。
/// - `foundations`: スートごとの組札。全スートのキーが常にある (空の Vec かも)。
/// - `stock`: 山札。先頭が次にめくられるカード。
/// - `waste`: めくられたカード置き場。最後が一番上。
///
/// どの操作のあとでも、全部の場所のカード枚数の合計は 52 枚で、ID の重複もない。
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub tableau: Vec<Vec<Card>>,
    pub foundations: HashMap<Suit, Vec<Card>>,
    pub stock: VecDeque<Card>,
    pub waste: Vec<Card>,
    pub move_count: u32,
    pub status: GameStatus,
}

impl GameState {
    /// 空っぽのテーブルを作る。列の数だけ空の場札と、4つの空の組札を用意するよ。
    pub fn empty(columns: usize) -> Self {
        Self {
            tableau: vec![Vec::new(); columns],
            foundations: ALL_SUITS.iter().map(|&suit| (suit, Vec::new())).collect(),
            stock: VecDeque::new(),
            waste: Vec::new(),
            move_count: 0,
            status: GameStatus::Playing,
        }
    }

    pub fn column(&self, index: usize) -> Option<&[Card]> {
        self.tableau.get(index).map(|column| column.as_slice())
    }

    pub fn foundation(&self, suit: Suit) -> &[Card] {
        self.foundations.get(&suit).map(|pile| pile.as_slice()).unwrap_or(&[])
    }

    /// Vec で持っている場所 (場札・組札・Waste) の並びを返す。山札と範囲外の列は None。
    pub fn pile(&self, stack: StackType) -> Option<&[Card]> {
        match stack {
            StackType::Tableau(index) => self.column(index as usize),
            StackType::Foundation(suit) => Some(self.foundation(suit)),
            StackType::Waste => Some(self.waste.as_slice()),
            StackType::Stock => None,
        }
    }

    /// `pile` の可変版。組札はキーが無ければ作る。
    pub fn pile_mut(&mut self, stack: StackType) -> Option<&mut Vec<Card>> {
        match stack {
            StackType::Tableau(index) => self.tableau.get_mut(index as usize),
            StackType::Foundation(suit) => Some(self.foundations.entry(suit).or_default()),
            StackType::Waste => Some(&mut self.waste),
            StackType::Stock => None,
        }
    }

    /// その場所の一番上のカード。山札は次にめくられるカード (先頭)。
    pub fn top_card(&self, stack: StackType) -> Option<&Card> {
        match stack {
            StackType::Stock => self.stock.front(),
            other => self.pile(other).and_then(|pile| pile.last()),
        }
    }

    pub fn stack_len(&self, stack: StackType) -> usize {
        match stack {
            StackType::Stock => self.stock.len(),
            other => self.pile(other).map_or(0, |pile| pile.len()),
        }
    }

    /// 指定した ID のカードを持っている場札の列番号を探すよ。
    pub fn find_column_of(&self, id: CardId) -> Option<usize> {
        self.tableau
            .iter()
            .position(|column| column.iter().any(|card| card.id == id))
    }

    /// 指定した ID のカードがどこにあって、その場所で何番目かを探す。
    pub fn locate(&self, id: CardId) -> Option<(StackType, usize)> {
        if let Some(column) = self.find_column_of(id) {
            let index = self.tableau[column].iter().position(|card| card.id == id)?;
            return Some((StackType::Tableau(column as u8), index));
        }
        if let Some(index) = self.waste.iter().position(|card| card.id == id) {
            return Some((StackType::Waste, index));
        }
        for &suit in ALL_SUITS.iter() {
            if let Some(index) = self.foundation(suit).iter().position(|card| card.id == id) {
                return Some((StackType::Foundation(suit), index));
            }
        }
        self.stock
            .iter()
            .position(|card| card.id == id)
            .map(|index| (StackType::Stock, index))
    }

    pub fn find_card(&self, id: CardId) -> Option<&Card> {
        self.iter_cards().find(|card| card.id == id)
    }

    /// テーブル上の全部のカードを順番に見るイテレータ。
    pub fn iter_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        let foundations = ALL_SUITS.into_iter().flat_map(move |suit| self.foundation(suit).iter());
        self.tableau
            .iter()
            .flatten()
            .chain(foundations)
            .chain(self.stock.iter())
            .chain(self.waste.iter())
    }

    pub fn total_card_count(&self) -> usize {
        self.iter_cards().count()
    }

    pub fn foundation_card_count(&self) -> usize {
        self.foundations.values().map(Vec::len).sum()
    }

    /// ID の重複がないかチェック。
    pub fn has_unique_ids(&self) -> bool {
        self.iter_cards().map(|card| card.id).all_unique()
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }
}
