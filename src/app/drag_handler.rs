// src/app/drag_handler.rs
//! Handles card dragging logic (start, update, end).

use log::{debug, info};

use crate::app::event_handler::{self, ClickTarget};
use crate::app::layout_calculator::TableLayout;
use crate::components::{DraggingInfo, GameState, Position, StackType};
use crate::logic::rules::stock_waste;
use crate::systems::MoveRequest;

/// ドラッグ開始時の処理。
///
/// 指の下のカードを探して、
/// - 場札の表向きのカードなら、そのカードとその上に重なっている全部のカード
/// - Waste の一番上なら、その1枚
/// を掴む。それ以外 (裏向き・組札・山札・何もない場所) は None。
pub fn handle_drag_start(state: &GameState, layout: &TableLayout, point: Position) -> Option<DraggingInfo> {
    let card_id = match event_handler::find_clicked_element(state, layout, point)? {
        ClickTarget::Card(id) => id,
        ClickTarget::Stack(stack) => {
            debug!("Drag start on empty {}; nothing to grab.", stack);
            return None;
        }
    };

    let (source, index) = state.locate(card_id)?;
    let cards = match source {
        StackType::Tableau(column) => {
            let column = state.column(column as usize)?;
            let grabbed = &column[index..];
            if !grabbed.first().map_or(false, |card| card.is_face_up) {
                debug!("Card {} is face down; cannot drag.", card_id);
                return None;
            }
            grabbed.iter().map(|card| card.id).collect::<Vec<_>>()
        }
        StackType::Waste if stock_waste::can_drag_from_waste(state.waste.len() - index) => vec![card_id],
        other => {
            debug!("Cards on {} cannot be dragged.", other);
            return None;
        }
    };

    info!("Drag started: {} cards from {}", cards.len(), source);
    Some(DraggingInfo::new(cards, source, point))
}

/// ドラッグ中の位置更新。translation = 今の位置 - 開始位置。
pub fn update_dragged_position(info: &mut DraggingInfo, point: Position) {
    info.translation = point - info.start;
}

/// ドラッグ終了。落とした位置で移動リクエストを作る (実際の移動は MoveCardSystem の仕事)。
pub fn handle_drag_end(info: &DraggingInfo, point: Position) -> MoveRequest {
    if let Some(first) = info.first_card() {
        debug!("Drag of {} cards from {} (first {}) ended at ({}, {})", info.cards.len(), info.source, first, point.x, point.y);
    }
    MoveRequest { dragged: info.cards.clone(), drop_point: point }
}

/// ドラッグのキャンセル。カードは元の場所に戻る (translation をゼロに)。
pub fn cancel_drag(info: &mut DraggingInfo) {
    info.translation = Position::ZERO;
}
