// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄
//! ダブルタップされたカードを、置ける組札に自動で送る。

use log::debug;

use crate::components::card::CardId;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::logic::rules;

/// 指定したカードが自動で移動できる組札を探す。
///
/// 対象になるのは、場札の列の一番上か Waste の一番上のカードだけ。
/// 組札の並び順 (Ace から順番) はルールセットに関係なく守る。
pub fn find_automatic_foundation_move(state: &GameState, card_id: CardId) -> Option<StackType> {
    debug!("[AutoMove] Finding automatic foundation move for {}...", card_id);

    let (source, index) = state.locate(card_id)?;
    let movable_source = source.is_tableau() || source == StackType::Waste;
    let is_top = movable_source && index + 1 == state.stack_len(source);
    if !is_top {
        debug!("  {} is not a top card of a column or the waste.", card_id);
        return None;
    }

    let card = state.pile(source)?.get(index)?;
    if !card.is_face_up {
        return None;
    }

    let target = StackType::Foundation(card.suit);
    if rules::can_move_to_foundation(std::slice::from_ref(card), card.suit, state.foundation(card.suit)) {
        debug!("  Found foundation {} for {}.", target, card);
        Some(target)
    } else {
        debug!("  No automatic foundation move for {}.", card);
        None
    }
}
