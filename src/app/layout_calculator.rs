// src/app/layout_calculator.rs
//! Calculates where stacks and cards sit on the table.
//!
//! The card size follows the screen width: every tableau column is one card
//! wide, and a card is 6:8. The top row holds the stock, the waste and the
//! four foundations; the tableau row sits under it, fanning each column
//! downwards by half a card.

use serde::{Deserialize, Serialize};

use crate::components::card::Suit;
use crate::components::position::{Position, Rect};
use crate::components::stack::StackType;
use crate::config::layout::{
    CARD_ASPECT_HEIGHT, CARD_ASPECT_WIDTH, CONTROL_BAR_HEIGHT, CONTROL_BAR_PADDING,
    DEFAULT_SCREEN_WIDTH, FAN_OFFSET_RATIO, FOUNDATION_MIN_SLOT, ROW_SPACING, STOCK_SLOT,
    TABLEAU_COLUMNS, WASTE_SLOT,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableLayout {
    pub columns: usize,
    pub card_width: f32,
    pub card_height: f32,
    pub fan_offset: f32,
    pub top_row_y: f32,
    pub tableau_y: f32,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::for_screen_width(DEFAULT_SCREEN_WIDTH, TABLEAU_COLUMNS)
    }
}

impl TableLayout {
    pub fn for_screen_width(screen_width: f32, columns: usize) -> Self {
        let columns = columns.max(1);
        let card_width = screen_width / columns as f32;
        let card_height = card_width / CARD_ASPECT_WIDTH * CARD_ASPECT_HEIGHT;
        let top_row_y = CONTROL_BAR_HEIGHT + CONTROL_BAR_PADDING * 2.0;
        Self {
            columns,
            card_width,
            card_height,
            fan_offset: card_height * FAN_OFFSET_RATIO,
            top_row_y,
            tableau_y: top_row_y + card_height + ROW_SPACING,
        }
    }

    fn slot_x(&self, slot: usize) -> f32 {
        slot as f32 * self.card_width
    }

    fn card_rect(&self, origin: Position) -> Rect {
        Rect::new(origin.x, origin.y, self.card_width, self.card_height)
    }

    /// Region covered by a tableau column holding `len` cards. An empty
    /// column still covers one card frame so it can take a drop.
    pub fn column_frame(&self, index: usize, len: usize) -> Rect {
        let extra = len.saturating_sub(1) as f32;
        Rect::new(
            self.slot_x(index),
            self.tableau_y,
            self.card_width,
            self.card_height + self.fan_offset * extra,
        )
    }

    pub fn stock_frame(&self) -> Rect {
        self.card_rect(Position::new(self.slot_x(STOCK_SLOT), self.top_row_y))
    }

    pub fn waste_frame(&self) -> Rect {
        self.card_rect(Position::new(self.slot_x(WASTE_SLOT), self.top_row_y))
    }

    pub fn foundation_frame(&self, suit: Suit) -> Rect {
        let first_slot = self.columns.saturating_sub(4).max(FOUNDATION_MIN_SLOT);
        self.card_rect(Position::new(self.slot_x(first_slot + suit.index()), self.top_row_y))
    }

    /// Frame of a whole stack. `len` only matters for tableau columns.
    pub fn stack_frame(&self, stack: StackType, len: usize) -> Rect {
        match stack {
            StackType::Tableau(index) => self.column_frame(index as usize, len),
            StackType::Foundation(suit) => self.foundation_frame(suit),
            StackType::Stock => self.stock_frame(),
            StackType::Waste => self.waste_frame(),
        }
    }

    /// Top-left corner where the host draws the card at `index` of `stack`.
    pub fn card_position(&self, stack: StackType, index: usize) -> Position {
        match stack {
            StackType::Tableau(column) => Position::new(
                self.slot_x(column as usize),
                self.tableau_y + self.fan_offset * index as f32,
            ),
            other => self.stack_frame(other, 0).origin(),
        }
    }

    /// Drawing rectangle of a single card.
    pub fn card_frame(&self, stack: StackType, index: usize) -> Rect {
        self.card_rect(self.card_position(stack, index))
    }
}
