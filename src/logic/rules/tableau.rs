//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use super::common::{is_movable_run, stacks_on, CardColor};

/// 動かす並び `run` (一番下のカードが先頭) を、場札の列 `target` の一番上に置けるかチェックする。
///
/// クロンダイクのルール:
/// - 並びは全部表向きで、色違い・1つずつ小さくなっていること
/// - 列が空なら King から始まる並びだけ
/// - 列にカードがあれば、並びの先頭がそのカードと色違いで1つ小さいこと
pub fn can_move_to_tableau(run: &[Card], target: &[Card]) -> bool {
    let first = match run.first() {
        Some(card) => card,
        None => return false,
    };

    if !is_movable_run(run) {
        debug!("[Tableau Rule] {} cards starting at {} are not a movable run", run.len(), first);
        return false;
    }

    match target.last() {
        Some(target_top) => {
            let valid = target_top.is_face_up && stacks_on(first, target_top);
            debug!(
                "[Tableau Rule] {}({:?}) onto {}({:?}): {}",
                first,
                CardColor::from_suit(first.suit),
                target_top,
                CardColor::from_suit(target_top.suit),
                valid
            );
            valid
        }
        None => {
            let is_king = first.rank == Rank::King;
            debug!("[Tableau Rule] {} onto empty column. Is King: {}", first, is_king);
            is_king
        }
    }
}
