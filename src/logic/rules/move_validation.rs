// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::config::RuleSet;
use super::{foundation, tableau};

/// 並び `run` を `target` に動かしていいか、ルールセットに従って検証する。
///
/// `RuleSet::Free` では場札へのドロップは何でも OK。
/// 組札はどのルールセットでも「そのスートの1枚を A から順番に」。
pub fn is_move_valid(rules: RuleSet, state: &GameState, run: &[Card], target: StackType) -> bool {
    if run.is_empty() {
        return false;
    }

    match target {
        StackType::Tableau(index) => {
            let column = match state.column(index as usize) {
                Some(column) => column,
                None => {
                    debug!("[Rules Validation] Tableau column {} does not exist", index);
                    return false;
                }
            };
            match rules {
                RuleSet::Free => true,
                RuleSet::Klondike => tableau::can_move_to_tableau(run, column),
            }
        }
        // 組札は並んだ状態を保つ場所なので、ルールセットに関係なく A から順番
        StackType::Foundation(suit) => {
            foundation::can_move_to_foundation(run, suit, state.foundation(suit))
        }
        StackType::Stock | StackType::Waste => {
            // 山札と Waste へ直接置くことはできない
            debug!("[Rules Validation] Moving to {} is not allowed.", target);
            false
        }
    }
}
