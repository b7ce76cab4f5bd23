//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank, Suit};

/// 組札には1枚ずつ、そのスートのカードだけ置ける。どのルールセットでも共通！
pub fn is_single_card_of_suit(run: &[Card], suit: Suit) -> bool {
    match run {
        [card] => card.suit == suit,
        _ => false,
    }
}

/// 動かす並び `run` を、スート `suit` の組札 `foundation` に置けるかチェックする。
///
/// 1枚だけ・同じスート・空なら Ace、そうでなければ一番上の次のランク。
pub fn can_move_to_foundation(run: &[Card], suit: Suit, foundation: &[Card]) -> bool {
    if !is_single_card_of_suit(run, suit) {
        debug!("[Foundation Rule] {} cards cannot go to the {} foundation", run.len(), suit.name());
        return false;
    }
    let card = &run[0];

    let result = match foundation.last() {
        None => card.rank == Rank::Ace,
        Some(top) => Rank::from_value(top.value() + 1) == Some(card.rank),
    };
    debug!("[Foundation Rule] {} to {} foundation: {}", card, suit.name(), result);
    result
}
