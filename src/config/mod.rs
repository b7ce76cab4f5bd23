// src/config/mod.rs
//! レイアウト定数とゲーム設定。

pub mod game_config;
pub mod layout;

pub use game_config::{GameConfig, RuleSet};
