// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

use crate::components::card::CardId;
use crate::components::position::Position;
use crate::components::stack::StackType;

/// ドラッグ中のカードの情報だよ！🖱️➡️🃏
///
/// 掴んだカードの並び (一番下のカードが先頭) と、掴んだ場所、
/// それからドラッグ開始点からどれだけ動いたか (translation) を持つ。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DraggingInfo {
    pub cards: Vec<CardId>,
    pub source: StackType,
    pub start: Position,
    pub translation: Position,
}

impl DraggingInfo {
    pub fn new(cards: Vec<CardId>, source: StackType, start: Position) -> Self {
        Self { cards, source, start, translation: Position::ZERO }
    }

    /// 掴んでいる一番下のカード。
    pub fn first_card(&self) -> Option<CardId> {
        self.cards.first().copied()
    }

    /// 今の指 (マウス) の位置。
    pub fn current_point(&self) -> Position {
        self.start + self.translation
    }
}
