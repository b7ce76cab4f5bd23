// src/components/mod.rs

// テーブルの上のデータ部品たちをまとめるモジュールだよ！
pub mod card;
pub mod stack;
pub mod position;
pub mod game_state;
pub mod dragging_info;

// よく使う型はここから直接使えるように再エクスポート！
pub use card::{Card, CardId, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use dragging_info::DraggingInfo;
pub use game_state::{GameState, GameStatus};
pub use position::{Position, Rect};
pub use stack::StackType;
