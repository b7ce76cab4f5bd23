//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use itertools::Itertools;

use crate::components::card::{Card, Suit};

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// `lower` を `upper` の上に重ねられるか (色違いで、ランクがちょうど1つ小さい)。
pub(crate) fn stacks_on(lower: &Card, upper: &Card) -> bool {
    CardColor::from_suit(lower.suit) != CardColor::from_suit(upper.suit)
        && lower.value() + 1 == upper.value()
}

/// 場札で一緒に動かせる並びかチェック。全部表向きで、下から順に色違い・1つずつ小さくなっている。
pub(crate) fn is_movable_run(run: &[Card]) -> bool {
    run.iter().all(|card| card.is_face_up)
        && run.iter().tuple_windows().all(|(upper, lower)| stacks_on(lower, upper))
}
