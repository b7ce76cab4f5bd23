// src/systems/deal_system.rs

use anyhow::{bail, Context};
use log::info;

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::config::layout::TABLEAU_COLUMNS;
use crate::logic::deck::{build_full_deck, draw, shuffle_deck, shuffle_deck_with_seed};

// === 初期カード配置システム！ ===
// ゲーム開始時に、シャッフルしたデッキを場札の列と山札に分ける役割を担うよ。
#[derive(Debug, Clone, Copy)]
pub struct DealInitialCardsSystem {
    /// 場札の列の数。i 列目 (1 始まり) に i 枚配る。
    pub columns: usize,
    /// true なら各列の一番上だけ表向きにして、残りと山札は裏向きにする (クロンダイク式)。
    pub reveal_only_top: bool,
}

impl Default for DealInitialCardsSystem {
    fn default() -> Self {
        Self { columns: TABLEAU_COLUMNS, reveal_only_top: false }
    }
}

impl DealInitialCardsSystem {
    pub fn new(columns: usize, reveal_only_top: bool) -> Self {
        Self { columns, reveal_only_top }
    }

    /// 三角形に配るのに必要な枚数 (1 + 2 + ... + columns)。
    pub fn cards_needed(&self) -> usize {
        self.columns * (self.columns + 1) / 2
    }

    /// 新しいデッキを作ってシャッフルし、配る。シードがあれば毎回同じ配り方。
    pub fn execute(&self, seed: Option<u64>) -> anyhow::Result<GameState> {
        let mut deck = build_full_deck();
        match seed {
            Some(seed) => shuffle_deck_with_seed(&mut deck, seed),
            None => shuffle_deck(&mut deck),
        }
        self.deal(deck)
    }

    /// 渡されたデッキ (この順番のまま) を配るよ！
    ///
    /// 1. i 列目に、デッキの先頭から i 枚。
    /// 2. 残りは全部山札へ (デッキの順番のまま、先頭が次にめくられる)。
    /// 3. 組札と Waste は空、手数は 0。
    pub fn deal(&self, mut deck: Vec<Card>) -> anyhow::Result<GameState> {
        if self.columns == 0 {
            bail!("cannot deal into zero tableau columns");
        }
        let needed = self.cards_needed();
        if deck.len() < needed {
            bail!(
                "deck has {} cards but {} columns need {}",
                deck.len(),
                self.columns,
                needed
            );
        }

        let mut state = GameState::empty(self.columns);
        for (index, column) in state.tableau.iter_mut().enumerate() {
            let size = index + 1;
            let mut cards = draw(size, &mut deck)
                .with_context(|| format!("dealing {} cards into column {}", size, index))?;
            if self.reveal_only_top {
                for (position, card) in cards.iter_mut().enumerate() {
                    card.is_face_up = position + 1 == size;
                }
            }
            *column = cards;
        }

        state.stock = deck
            .into_iter()
            .map(|mut card| {
                if self.reveal_only_top {
                    card.is_face_up = false;
                }
                card
            })
            .collect();

        info!(
            "Dealt {} cards into {} columns, {} left in stock",
            needed,
            self.columns,
            state.stock.len()
        );
        Ok(state)
    }
}
