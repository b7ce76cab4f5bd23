// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::{GameState, GameStatus};
use crate::logic::rules::check_win_condition;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 全部のカードが組札に揃っていたら、GameState を Won にする。
#[derive(Debug, Default, Clone, Copy)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }

    /// 今回の呼び出しで Won になったときだけ true を返す。
    /// もう Won になっているゲームでは何もしない (false)。
    pub fn execute(&self, state: &mut GameState) -> bool {
        if state.status != GameStatus::Playing {
            return false;
        }
        if !check_win_condition(state.foundation_card_count()) {
            return false;
        }
        state.status = GameStatus::Won;
        info!("WinConditionSystem: 勝利条件達成！🏆 (move #{})", state.move_count);
        true
    }
}
