//! Turns the current game state into the data the host draws from.

use anyhow::Context;
use log::debug;

use crate::app::layout_calculator::TableLayout;
use crate::components::card::{Card, ALL_SUITS};
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::protocol::{CardData, FoundationData, GameStateData, PositionData};

fn card_data(card: &Card, layout: &TableLayout, stack_type: StackType, position_in_stack: usize) -> CardData {
    let position = layout.card_position(stack_type, position_in_stack);
    CardData {
        id: card.id,
        name: card.name(),
        image_name: card.image_name(),
        is_face_up: card.is_face_up,
        stack_type,
        position_in_stack,
        position: PositionData { x: position.x, y: position.y },
    }
}

fn pile_data(cards: &[Card], layout: &TableLayout, stack_type: StackType) -> Vec<CardData> {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| card_data(card, layout, stack_type, index))
        .collect()
}

/// 画面に描くための状態のスナップショットを作る。
pub fn build_game_state_data(state: &GameState, layout: &TableLayout) -> GameStateData {
    let columns = state
        .tableau
        .iter()
        .enumerate()
        .map(|(index, column)| pile_data(column, layout, StackType::Tableau(index as u8)))
        .collect();
    let foundations = ALL_SUITS
        .iter()
        .map(|&suit| FoundationData {
            suit,
            cards: pile_data(state.foundation(suit), layout, StackType::Foundation(suit)),
        })
        .collect();

    GameStateData {
        columns,
        foundations,
        stock_count: state.stock.len(),
        waste: pile_data(&state.waste, layout, StackType::Waste),
        move_count: state.move_count,
        status: state.status,
        card_width: layout.card_width,
        card_height: layout.card_height,
    }
}

/// ゲーム状態を JSON 文字列で返す。
pub fn get_game_state_json(state: &GameState, layout: &TableLayout) -> anyhow::Result<String> {
    let data = build_game_state_data(state, layout);
    let json = serde_json::to_string(&data).context("failed to serialize game state")?;
    debug!("Serialized game state ({} bytes).", json.len());
    Ok(json)
}
