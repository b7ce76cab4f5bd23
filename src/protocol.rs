// src/protocol.rs

// このファイルは、ゲーム (WASM) とホスト (画面側) の間で
// やり取りするデータの形式を定義するよ！💌
// `serde` で Rust のデータ構造 <-> JSON 文字列 を行き来する。
use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId, Rank, Suit};
use crate::components::game_state::GameStatus;
pub use crate::components::stack::StackType;

/// ドラッグ＆ドロップでカードを運ぶときのデータ型の識別子。
pub const CARD_TRANSFER_TYPE: &str = "application/x-solitaire-card+json";

/// ドラッグ＆ドロップで運ぶ1枚のカード。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardTransfer {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
    pub is_face_up: bool,
}

impl CardTransfer {
    pub fn encode(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).with_context(|| format!("failed to encode card {}", self.id))
    }

    pub fn decode(payload: &str) -> anyhow::Result<CardTransfer> {
        serde_json::from_str(payload).context("failed to decode card transfer payload")
    }
}

impl From<&Card> for CardTransfer {
    fn from(card: &Card) -> Self {
        Self { id: card.id, rank: card.rank, suit: card.suit, is_face_up: card.is_face_up }
    }
}

impl From<CardTransfer> for Card {
    fn from(transfer: CardTransfer) -> Self {
        Card { id: transfer.id, rank: transfer.rank, suit: transfer.suit, is_face_up: transfer.is_face_up }
    }
}

/// ドラッグ中の全部のカード (一番下のカードが先頭)。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DragPayload {
    pub cards: Vec<CardTransfer>,
}

impl DragPayload {
    pub fn encode(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("failed to encode drag payload")
    }

    pub fn decode(payload: &str) -> anyhow::Result<DragPayload> {
        serde_json::from_str(payload).context("failed to decode drag payload")
    }

    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|card| card.id).collect()
    }
}

/// ホストが画面を描くのに必要なゲーム全体の状態。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStateData {
    /// 場札の列。各列は奥から手前の順。
    pub columns: Vec<Vec<CardData>>,
    pub foundations: Vec<FoundationData>,
    /// 山札は中身を見せない。枚数だけ。
    pub stock_count: usize,
    pub waste: Vec<CardData>,
    pub move_count: u32,
    pub status: GameStatus,
    pub card_width: f32,
    pub card_height: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FoundationData {
    pub suit: Suit,
    pub cards: Vec<CardData>,
}

/// カード1枚分の描画用データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardData {
    pub id: CardId,
    /// "King of Spades" みたいな読み上げ用の名前
    pub name: String,
    /// 表なら "<Rank>_<suit>"、裏なら "CardBack"
    pub image_name: String,
    pub is_face_up: bool,
    pub stack_type: StackType,
    pub position_in_stack: usize,
    pub position: PositionData,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PositionData {
    pub x: f32,
    pub y: f32,
}
