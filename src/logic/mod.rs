// src/logic/mod.rs
//! デッキ操作とルール判定。World (ゲーム状態) を変更しない純粋なロジックを置くよ。

pub mod auto_move;
pub mod deck;
pub mod rules;
