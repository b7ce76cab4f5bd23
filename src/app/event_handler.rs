// src/app/event_handler.rs
//! タップやドロップの座標から、どのカード・どのスタックかを特定するロジック。

use log::debug;

use crate::app::layout_calculator::TableLayout;
use crate::components::card::{CardId, ALL_SUITS};
use crate::components::game_state::GameState;
use crate::components::position::Position;
use crate::components::stack::StackType;

/// クリックされた要素の種類を表す Enum だよ！
/// カードがクリックされたのか、それともスタックの空きスペースがクリックされたのかを示すんだ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// カードがクリックされた場合。どのカードか (CardId) を保持するよ。
    Card(CardId),
    /// スタックのエリアがクリックされた場合。どの種類のスタックか (StackType) を保持するよ。
    Stack(StackType),
}

/// ドロップ地点がどのスタックの領域に入っているか調べる。
///
/// 場札の列を左から順に見て、次に組札を見る。どこにも入っていなければ None。
/// 山札と Waste はドロップ先にならない。
pub fn find_drop_target(state: &GameState, layout: &TableLayout, point: Position) -> Option<StackType> {
    let column_hit = state
        .tableau
        .iter()
        .enumerate()
        .find(|(index, column)| layout.column_frame(*index, column.len()).contains(point))
        .map(|(index, _)| StackType::Tableau(index as u8));
    if column_hit.is_some() {
        debug!("Drop point ({}, {}) is over {:?}", point.x, point.y, column_hit);
        return column_hit;
    }

    let foundation_hit = ALL_SUITS
        .iter()
        .find(|&&suit| layout.foundation_frame(suit).contains(point))
        .map(|&suit| StackType::Foundation(suit));
    debug!("Drop point ({}, {}) is over {:?}", point.x, point.y, foundation_hit);
    foundation_hit
}

/// クリックされた座標に基づいて、どのゲーム要素 (カード or スタック) が
/// クリックされたかを特定する関数だよ！
///
/// 1. まずカード。重なっている場合は一番手前 (列の中で一番後ろ) のカード。
/// 2. カードが無ければ、スタックの領域 (山札・Waste・組札・空の列)。
/// 3. どこにも当たらなければ None。
pub fn find_clicked_element(state: &GameState, layout: &TableLayout, point: Position) -> Option<ClickTarget> {
    if let Some(card) = find_topmost_clicked_card(state, layout, point) {
        return Some(card);
    }
    find_clicked_stack_area(state, layout, point)
}

fn find_topmost_clicked_card(state: &GameState, layout: &TableLayout, point: Position) -> Option<ClickTarget> {
    // 場札: 後ろのカードほど手前に描かれるので、後ろから探す
    for (column_index, column) in state.tableau.iter().enumerate() {
        let stack = StackType::Tableau(column_index as u8);
        let hit = column
            .iter()
            .enumerate()
            .rev()
            .find(|(index, _)| layout.card_frame(stack, *index).contains(point));
        if let Some((_, card)) = hit {
            debug!("  Hit card {} in {}", card, stack);
            return Some(ClickTarget::Card(card.id));
        }
    }

    // 上の段: 見えているのは一番上のカードだけ
    let top_row = ALL_SUITS
        .into_iter()
        .map(StackType::Foundation)
        .chain([StackType::Waste, StackType::Stock]);
    for stack in top_row {
        if layout.stack_frame(stack, 0).contains(point) {
            if let Some(card) = state.top_card(stack) {
                debug!("  Hit card {} on {}", card, stack);
                return Some(ClickTarget::Card(card.id));
            }
        }
    }
    None
}

fn find_clicked_stack_area(state: &GameState, layout: &TableLayout, point: Position) -> Option<ClickTarget> {
    if layout.stock_frame().contains(point) {
        return Some(ClickTarget::Stack(StackType::Stock));
    }
    if layout.waste_frame().contains(point) {
        return Some(ClickTarget::Stack(StackType::Waste));
    }
    find_drop_target(state, layout, point).map(ClickTarget::Stack)
}
