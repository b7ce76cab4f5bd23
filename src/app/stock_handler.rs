// src/app/stock_handler.rs
//! Handles logic related to clicking the Stock pile (dealing to Waste, resetting Waste).

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::components::game_state::GameState;
use crate::config::RuleSet;
use crate::logic::rules::stock_waste;

/// What a click on the stock did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockOutcome {
    /// This many cards went from Stock to Waste.
    Dealt(usize),
    /// The Waste went back to Stock (this many cards).
    Recycled(usize),
    /// Both piles are empty, nothing to do.
    Empty,
}

/// Deals up to `draw_count` cards from the front of the Stock onto the Waste, face up.
/// Returns the number of cards dealt (0 when the stock is empty).
pub fn deal_from_stock(state: &mut GameState, draw_count: usize) -> usize {
    if !stock_waste::can_deal_from_stock(state.stock.is_empty()) {
        debug!("  Stock is empty. Cannot deal.");
        return 0;
    }

    let count = draw_count.max(1).min(state.stock.len());
    for mut card in state.stock.drain(..count) {
        card.is_face_up = true;
        state.waste.push(card);
    }
    info!("  Dealt {} cards from Stock to Waste ({} left).", count, state.stock.len());
    count
}

/// Puts the Waste back into the Stock when the Stock is empty.
///
/// The first card drawn comes out first again. Under Klondike rules the
/// cards are turned face down; the free rule set leaves them face up.
pub fn reset_waste_to_stock(state: &mut GameState, rules: RuleSet) -> usize {
    if !stock_waste::can_reset_stock_from_waste(state.stock.is_empty(), state.waste.is_empty()) {
        debug!("  Cannot reset Waste to Stock (Stock not empty or Waste empty).");
        return 0;
    }

    let count = state.waste.len();
    let face_up = rules == RuleSet::Free;
    state.stock.extend(state.waste.drain(..).map(|mut card| {
        card.is_face_up = face_up;
        card
    }));
    info!("  Waste pile reset to Stock ({} cards).", count);
    count
}

/// A click on the stock: deal if there is anything to deal, otherwise recycle the waste.
/// Any change counts as one move.
pub fn handle_stock_click(state: &mut GameState, draw_count: usize, rules: RuleSet) -> StockOutcome {
    let dealt = deal_from_stock(state, draw_count);
    let outcome = if dealt > 0 {
        StockOutcome::Dealt(dealt)
    } else {
        match reset_waste_to_stock(state, rules) {
            0 => StockOutcome::Empty,
            recycled => StockOutcome::Recycled(recycled),
        }
    };
    if outcome != StockOutcome::Empty {
        state.move_count += 1;
    }
    outcome
}
