// src/systems/mod.rs
//! ゲーム状態を実際に書き換えるシステムたち。

pub mod deal_system;
pub mod move_card_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::{transfer_run, MoveCardSystem, MoveOutcome, MoveRequest};
pub use win_condition_system::WinConditionSystem;
