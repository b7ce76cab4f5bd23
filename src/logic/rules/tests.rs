// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use super::common::is_movable_run;
use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::config::RuleSet;

// --- テスト用ヘルパー関数 ---
fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn face_down(rank: Rank, suit: Suit) -> Card {
    Card { is_face_up: false, ..Card::new(rank, suit) }
}

#[test]
fn test_card_color() {
    assert_eq!(CardColor::from_suit(Suit::Heart), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Diamond), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Club), CardColor::Black);
    assert_eq!(CardColor::from_suit(Suit::Spade), CardColor::Black);
}

#[test]
fn test_stock_waste_rules() {
    // ストックがある場合
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_reset_stock_from_waste(false, false), "ストックがある場合はリセットできないはず");
    assert!(!can_reset_stock_from_waste(false, true), "ストックがある場合はリセットできないはず");

    // ストックが空の場合
    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");
    assert!(can_reset_stock_from_waste(true, false), "ストックが空でウェストにあればリセットできるはず");
    assert!(!can_reset_stock_from_waste(true, true), "ストックもウェストも空ならリセットできないはず");

    assert!(can_drag_from_waste(1));
    assert!(!can_drag_from_waste(2));
}

#[test]
fn test_win_condition() {
    assert!(check_win_condition(52), "カードが52枚あればクリアなはず！🏆");
    assert!(!check_win_condition(51));
    assert!(!check_win_condition(0));
}

#[test]
fn test_movable_run() {
    let run = vec![card(Rank::Nine, Suit::Spade), card(Rank::Eight, Suit::Heart), card(Rank::Seven, Suit::Club)];
    assert!(is_movable_run(&run));

    let same_color = vec![card(Rank::Nine, Suit::Spade), card(Rank::Eight, Suit::Club)];
    assert!(!is_movable_run(&same_color), "同じ色は続けられない");

    let gap = vec![card(Rank::Nine, Suit::Spade), card(Rank::Seven, Suit::Heart)];
    assert!(!is_movable_run(&gap), "ランクが飛んでる");

    let hidden = vec![face_down(Rank::Nine, Suit::Spade), card(Rank::Eight, Suit::Heart)];
    assert!(!is_movable_run(&hidden), "裏向きのカードは動かせない");

    assert!(is_movable_run(&[card(Rank::Two, Suit::Diamond)]), "1枚ならいつでも並び");
}

#[test]
fn test_can_move_to_tableau() {
    // シナリオ 1: 空の列
    assert!(can_move_to_tableau(&[card(Rank::King, Suit::Spade)], &[]), "空の列に King は置ける");
    assert!(!can_move_to_tableau(&[card(Rank::Queen, Suit::Heart)], &[]), "空の列に Queen は置けない");

    // シナリオ 2: 有効な移動 (Q❤️ の上に J♠️)
    let target = vec![card(Rank::Queen, Suit::Heart)];
    assert!(can_move_to_tableau(&[card(Rank::Jack, Suit::Spade)], &target));

    // シナリオ 3: 同色
    assert!(!can_move_to_tableau(&[card(Rank::Jack, Suit::Diamond)], &target));

    // シナリオ 4: ランク違い
    assert!(!can_move_to_tableau(&[card(Rank::Ten, Suit::Spade)], &target));

    // シナリオ 5: 並びごと
    let run = vec![card(Rank::Jack, Suit::Club), card(Rank::Ten, Suit::Diamond)];
    assert!(can_move_to_tableau(&run, &target));

    // シナリオ 6: 一番上が裏向きの列には置けない
    let hidden_target = vec![face_down(Rank::Queen, Suit::Heart)];
    assert!(!can_move_to_tableau(&[card(Rank::Jack, Suit::Spade)], &hidden_target));

    assert!(!can_move_to_tableau(&[], &target), "空の並びは動かせない");
}

#[test]
fn test_can_move_to_foundation() {
    let ace = card(Rank::Ace, Suit::Heart);
    let two = card(Rank::Two, Suit::Heart);

    assert!(can_move_to_foundation(&[ace.clone()], Suit::Heart, &[]), "空の組札には Ace");
    assert!(!can_move_to_foundation(&[two.clone()], Suit::Heart, &[]), "空の組札に 2 は置けない");
    assert!(!can_move_to_foundation(&[ace.clone()], Suit::Spade, &[]), "スート違い");

    let pile = vec![ace.clone()];
    assert!(can_move_to_foundation(&[two.clone()], Suit::Heart, &pile));
    assert!(!can_move_to_foundation(&[card(Rank::Three, Suit::Heart)], Suit::Heart, &pile));

    assert!(!can_move_to_foundation(&[ace, two], Suit::Heart, &[]), "2枚まとめては置けない");
}

#[test]
fn test_is_move_valid_per_rule_set() {
    let mut state = GameState::empty(2);
    state.tableau[0] = vec![card(Rank::Queen, Suit::Heart)];

    let three_of_clubs = vec![card(Rank::Three, Suit::Club)];
    // Free ならどこでも置ける
    assert!(is_move_valid(RuleSet::Free, &state, &three_of_clubs, StackType::Tableau(0)));
    assert!(is_move_valid(RuleSet::Free, &state, &three_of_clubs, StackType::Tableau(1)));
    // Klondike だとダメ
    assert!(!is_move_valid(RuleSet::Klondike, &state, &three_of_clubs, StackType::Tableau(0)));
    assert!(!is_move_valid(RuleSet::Klondike, &state, &three_of_clubs, StackType::Tableau(1)));

    // 組札は Free でもスートの1枚を A から順番に
    assert!(!is_move_valid(RuleSet::Free, &state, &three_of_clubs, StackType::Foundation(Suit::Club)));
    assert!(!is_move_valid(RuleSet::Free, &state, &three_of_clubs, StackType::Foundation(Suit::Heart)));
    assert!(!is_move_valid(RuleSet::Klondike, &state, &three_of_clubs, StackType::Foundation(Suit::Club)));

    let ace_of_clubs = vec![card(Rank::Ace, Suit::Club)];
    for rules in [RuleSet::Free, RuleSet::Klondike] {
        assert!(is_move_valid(rules, &state, &ace_of_clubs, StackType::Foundation(Suit::Club)));
        assert!(!is_move_valid(rules, &state, &ace_of_clubs, StackType::Foundation(Suit::Spade)));
    }
    state.foundations.insert(Suit::Club, ace_of_clubs.clone());
    let two_of_clubs = vec![card(Rank::Two, Suit::Club)];
    assert!(is_move_valid(RuleSet::Free, &state, &two_of_clubs, StackType::Foundation(Suit::Club)));
    assert!(!is_move_valid(RuleSet::Free, &state, &three_of_clubs, StackType::Foundation(Suit::Club)));

    // 存在しない列、山札、Waste へは置けない
    assert!(!is_move_valid(RuleSet::Free, &state, &three_of_clubs, StackType::Tableau(5)));
    assert!(!is_move_valid(RuleSet::Free, &state, &three_of_clubs, StackType::Stock));
    assert!(!is_move_valid(RuleSet::Free, &state, &three_of_clubs, StackType::Waste));
    assert!(!is_move_valid(RuleSet::Free, &state, &[], StackType::Tableau(1)));
}
