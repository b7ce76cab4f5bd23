// src/logic/deck.rs

use anyhow::anyhow;
use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, thread_rng, SeedableRng};

use crate::components::card::{Card, Rank, ALL_SUITS};

/// 標準デッキの枚数。
pub const DECK_SIZE: usize = 52;

/// デッキを作るときのランクの並び。2 から K、最後に A。
pub const DECK_RANK_ORDER: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// ランクごとに全スートを並べる順番 (2♠, 2♥, 2♦, 2♣, 3♠, ..., A♣)。
/// 生成された時点では、すべてのカードは表向き！
pub fn build_full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &rank in DECK_RANK_ORDER.iter() {
        for &suit in ALL_SUITS.iter() {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。一様ランダムな並べ替え (Fisher–Yates)。
pub fn shuffle_deck(deck: &mut Vec<Card>) {
    let mut rng = thread_rng();
    deck.shuffle(&mut rng);
}

/// シード付きでシャッフルする。同じシードなら同じ並びになるよ。
pub fn shuffle_deck_with_seed(deck: &mut Vec<Card>, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
}

/// デッキの先頭から `count` 枚を取り出して返す。デッキ自体からは取り除かれる！
///
/// 残りの枚数より多く取ろうとしたらエラー。そのときデッキは変更しない。
pub fn draw(count: usize, deck: &mut Vec<Card>) -> anyhow::Result<Vec<Card>> {
    if count > deck.len() {
        return Err(anyhow!(
            "deck exhausted: cannot draw {} cards, only {} left",
            count,
            deck.len()
        ));
    }
    let drawn: Vec<Card> = deck.drain(..count).collect();
    debug!("Drew {} cards, {} left in deck", drawn.len(), deck.len());
    Ok(drawn)
}
