// src/systems/move_card_system.rs

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::app::event_handler::find_drop_target;
use crate::app::layout_calculator::TableLayout;
use crate::components::card::{Card, CardId};
use crate::components::game_state::GameState;
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::config::RuleSet;
use crate::logic::rules::{self, stock_waste};

/// ドラッグが終わったときに「どのカードを」「どこに落としたか」。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// 掴んだカードの ID。一番下のカードが先頭。
    pub dragged: Vec<CardId>,
    pub drop_point: Position,
}

/// 移動の結果。失敗してもプレイヤーには何も見せないけど、理由はここに残す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// 移動成功！
    Moved { from: StackType, to: StackType, count: usize },
    /// 何も掴んでいない
    EmptyDrag,
    /// ドロップ地点がどのスタックの領域にも入っていない
    NoTarget,
    /// 掴んだカードを持っている場所が見つからない
    SourceNotFound,
    /// 元の場所と同じところに落とした
    SameStack,
    /// 掴んだ枚数と、元の場所の末尾の並びが合わない
    RunMismatch,
    /// ルール違反
    Rejected,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// ドラッグ＆ドロップでカードを動かすシステムだよ！
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    /// ドロップ地点からスタックを探して、カードを移動する。
    ///
    /// 1. ドロップ地点を含むスタックの領域を探す (無ければ何もしない)
    /// 2. 掴んだ一番下のカードの ID から、元の列を探す (無ければ何もしない)
    /// 3. 元の列の末尾から掴んだ枚数だけ取り外して、移動先の末尾にそのまま付ける
    pub fn resolve_move(
        &self,
        state: &mut GameState,
        layout: &TableLayout,
        rules: RuleSet,
        request: &MoveRequest,
    ) -> MoveOutcome {
        if request.dragged.is_empty() {
            return MoveOutcome::EmptyDrag;
        }
        let target = match find_drop_target(state, layout, request.drop_point) {
            Some(target) => target,
            None => {
                debug!(
                    "No stack at drop point ({}, {}); cards snap back.",
                    request.drop_point.x, request.drop_point.y
                );
                return MoveOutcome::NoTarget;
            }
        };
        self.move_cards(state, rules, &request.dragged, target)
    }

    /// 掴んだカードを `target` に動かす。ドロップ地点の判定が済んだあとの本体。
    pub fn move_cards(
        &self,
        state: &mut GameState,
        rules: RuleSet,
        dragged: &[CardId],
        target: StackType,
    ) -> MoveOutcome {
        let first_id = match dragged.first() {
            Some(id) => *id,
            None => return MoveOutcome::EmptyDrag,
        };
        let count = dragged.len();

        let source = match find_source(state, first_id, count) {
            Some(source) => source,
            None => {
                debug!("Dragged card {} is not in any column; nothing moves.", first_id);
                return MoveOutcome::SourceNotFound;
            }
        };
        if source == target {
            return MoveOutcome::SameStack;
        }

        let run = match trailing_run(state, source, count) {
            Some(run) => run,
            None => return MoveOutcome::RunMismatch,
        };
        let matches_drag = run.iter().map(|card| card.id).eq(dragged.iter().copied());
        if !matches_drag {
            debug!("Trailing {} cards of {} are not the dragged cards.", count, source);
            return MoveOutcome::RunMismatch;
        }

        if !rules::is_move_valid(rules, state, run, target) {
            debug!("Move of {} cards from {} to {} rejected by {:?} rules.", count, source, target, rules);
            return MoveOutcome::Rejected;
        }

        if !transfer_run(state, source, target, count) {
            return MoveOutcome::RunMismatch;
        }
        reveal_underlying_card_if_needed(state, source);
        state.move_count += 1;

        info!("Moved {} cards from {} to {} (move #{})", count, source, target, state.move_count);
        MoveOutcome::Moved { from: source, to: target, count }
    }
}

/// 掴んだカードの持ち主を探す。まず場札の列、なければ Waste の一番上 (1枚のときだけ)。
fn find_source(state: &GameState, first_id: CardId, count: usize) -> Option<StackType> {
    if let Some(column) = state.find_column_of(first_id) {
        return Some(StackType::Tableau(column as u8));
    }
    let on_waste_top = state.waste.last().map_or(false, |card| card.id == first_id);
    if on_waste_top && stock_waste::can_drag_from_waste(count) {
        return Some(StackType::Waste);
    }
    None
}

fn trailing_run(state: &GameState, stack: StackType, count: usize) -> Option<&[Card]> {
    let pile = state.pile(stack)?;
    if count == 0 || count > pile.len() {
        return None;
    }
    Some(&pile[pile.len() - count..])
}

/// `from` の末尾 `count` 枚を取り外して、順番そのままで `to` の末尾に付ける。
///
/// 山札は対象外。どちらかの場所が無い・枚数が足りないときは何もしないで false。
pub fn transfer_run(state: &mut GameState, from: StackType, to: StackType, count: usize) -> bool {
    if from == to || state.pile(to).is_none() {
        return false;
    }
    let moved = match state.pile_mut(from) {
        Some(pile) if count > 0 && count <= pile.len() => {
            let split_at = pile.len() - count;
            pile.split_off(split_at)
        }
        _ => return false,
    };
    match state.pile_mut(to) {
        Some(pile) => {
            pile.extend(moved);
            true
        }
        None => false,
    }
}

/// 場札から動かしたあと、その列の新しい一番上が裏向きなら表にする。
fn reveal_underlying_card_if_needed(state: &mut GameState, source: StackType) {
    if let Some(index) = source.tableau_index() {
        if let Some(card) = state.tableau.get_mut(index).and_then(|column| column.last_mut()) {
            if !card.is_face_up {
                debug!("Revealing {} on tableau[{}]", card, index);
                card.is_face_up = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn layout() -> TableLayout {
        TableLayout::for_screen_width(420.0, 7)
    }

    /// 列 A = [2♠, 5♦, K♣]、列 B = [3♥] のテーブル
    fn example_state() -> GameState {
        let mut state = GameState::empty(7);
        state.tableau[0] = vec![
            Card::new(Rank::Two, Suit::Spade),
            Card::new(Rank::Five, Suit::Diamond),
            Card::new(Rank::King, Suit::Club),
        ];
        state.tableau[1] = vec![Card::new(Rank::Three, Suit::Heart)];
        state
    }

    fn point_in_column(layout: &TableLayout, column: usize) -> Position {
        Position::new(column as f32 * layout.card_width + 5.0, layout.tableau_y + 5.0)
    }

    fn ranks(column: &[Card]) -> Vec<Rank> {
        column.iter().map(|c| c.rank).collect()
    }

    #[test]
    fn moving_king_onto_three() {
        let layout = layout();
        let mut state = example_state();
        let king_id = state.tableau[0][2].id;
        let request = MoveRequest { dragged: vec![king_id], drop_point: point_in_column(&layout, 1) };

        let outcome = MoveCardSystem.resolve_move(&mut state, &layout, RuleSet::Free, &request);

        assert_eq!(
            outcome,
            MoveOutcome::Moved { from: StackType::Tableau(0), to: StackType::Tableau(1), count: 1 }
        );
        assert_eq!(ranks(&state.tableau[0]), vec![Rank::Two, Rank::Five]);
        assert_eq!(ranks(&state.tableau[1]), vec![Rank::Three, Rank::King]);
        assert_eq!(state.tableau[1][1].id, king_id);
        assert_eq!(state.move_count, 1);
    }

    #[test]
    fn moving_a_run_keeps_order_and_count() {
        let layout = layout();
        let mut state = example_state();
        let before_total = state.total_card_count();
        let dragged: Vec<_> = state.tableau[0][1..].iter().map(|c| c.id).collect();
        let request = MoveRequest { dragged: dragged.clone(), drop_point: point_in_column(&layout, 4) };

        let outcome = MoveCardSystem.resolve_move(&mut state, &layout, RuleSet::Free, &request);

        assert!(outcome.is_moved());
        assert_eq!(ranks(&state.tableau[0]), vec![Rank::Two]);
        let moved: Vec<_> = state.tableau[4].iter().map(|c| c.id).collect();
        assert_eq!(moved, dragged, "順番はそのまま");
        assert_eq!(state.total_card_count(), before_total);
        assert!(state.has_unique_ids());
    }

    #[test]
    fn drop_outside_every_region_is_a_no_op() {
        let layout = layout();
        let mut state = example_state();
        let before = state.clone();
        let king_id = state.tableau[0][2].id;
        let request = MoveRequest { dragged: vec![king_id], drop_point: Position::new(-50.0, -50.0) };

        let outcome = MoveCardSystem.resolve_move(&mut state, &layout, RuleSet::Free, &request);

        assert_eq!(outcome, MoveOutcome::NoTarget);
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_card_id_is_a_no_op() {
        let layout = layout();
        let mut state = example_state();
        let before = state.clone();
        let request = MoveRequest { dragged: vec![CardId::new()], drop_point: point_in_column(&layout, 1) };

        let outcome = MoveCardSystem.resolve_move(&mut state, &layout, RuleSet::Free, &request);

        assert_eq!(outcome, MoveOutcome::SourceNotFound);
        assert_eq!(state, before);
    }

    #[test]
    fn guards_leave_state_untouched() {
        let layout = layout();
        let mut state = example_state();
        let before = state.clone();
        let system = MoveCardSystem;

        let empty = MoveRequest { dragged: vec![], drop_point: point_in_column(&layout, 1) };
        assert_eq!(system.resolve_move(&mut state, &layout, RuleSet::Free, &empty), MoveOutcome::EmptyDrag);

        // 自分の列に落とす
        let king_id = state.tableau[0][2].id;
        let same = MoveRequest { dragged: vec![king_id], drop_point: point_in_column(&layout, 0) };
        assert_eq!(system.resolve_move(&mut state, &layout, RuleSet::Free, &same), MoveOutcome::SameStack);

        // 途中のカードだけ掴んだことにする (末尾と合わない)
        let five_id = state.tableau[0][1].id;
        let middle = MoveRequest { dragged: vec![five_id], drop_point: point_in_column(&layout, 1) };
        assert_eq!(system.resolve_move(&mut state, &layout, RuleSet::Free, &middle), MoveOutcome::RunMismatch);

        // 列より多い枚数
        let two_id = state.tableau[1][0].id;
        let too_many = MoveRequest { dragged: vec![two_id, CardId::new()], drop_point: point_in_column(&layout, 0) };
        assert_eq!(system.resolve_move(&mut state, &layout, RuleSet::Free, &too_many), MoveOutcome::RunMismatch);

        assert_eq!(state, before);
    }

    #[test]
    fn klondike_rules_reject_and_reveal() {
        let mut state = GameState::empty(3);
        let hidden = Card { is_face_up: false, ..Card::new(Rank::Four, Suit::Club) };
        let jack = Card::new(Rank::Jack, Suit::Spade);
        let jack_id = jack.id;
        state.tableau[0] = vec![hidden, jack];
        state.tableau[1] = vec![Card::new(Rank::Queen, Suit::Heart)];
        state.tableau[2] = vec![Card::new(Rank::Queen, Suit::Spade)];

        let system = MoveCardSystem;
        assert_eq!(
            system.move_cards(&mut state, RuleSet::Klondike, &[jack_id], StackType::Tableau(2)),
            MoveOutcome::Rejected,
            "J♠ は Q♠ には置けない"
        );
        assert!(system.move_cards(&mut state, RuleSet::Klondike, &[jack_id], StackType::Tableau(1)).is_moved());
        assert!(state.tableau[0][0].is_face_up, "下のカードがめくれるはず");
    }

    #[test]
    fn waste_top_and_foundation_moves() {
        let mut state = GameState::empty(2);
        let ace = Card::new(Rank::Ace, Suit::Heart);
        let ace_id = ace.id;
        let buried = Card::new(Rank::Nine, Suit::Heart);
        let buried_id = buried.id;
        state.waste = vec![buried, ace];

        let system = MoveCardSystem;
        assert_eq!(
            system.move_cards(&mut state, RuleSet::Free, &[buried_id], StackType::Tableau(0)),
            MoveOutcome::SourceNotFound,
            "Waste は一番上だけ"
        );
        assert_eq!(
            system.move_cards(&mut state, RuleSet::Free, &[ace_id], StackType::Foundation(Suit::Spade)),
            MoveOutcome::Rejected,
            "スートが違う組札には置けない"
        );
        assert_eq!(
            system.move_cards(&mut state, RuleSet::Free, &[ace_id], StackType::Foundation(Suit::Heart)),
            MoveOutcome::Moved { from: StackType::Waste, to: StackType::Foundation(Suit::Heart), count: 1 }
        );
        assert_eq!(state.foundation(Suit::Heart).len(), 1);
        assert_eq!(state.waste.len(), 1);
    }

    #[test]
    fn transfer_run_rejects_stock_and_missing_stacks() {
        let mut state = example_state();
        let before = state.clone();
        assert!(!transfer_run(&mut state, StackType::Tableau(0), StackType::Stock, 1));
        assert!(!transfer_run(&mut state, StackType::Tableau(0), StackType::Tableau(20), 1));
        assert!(!transfer_run(&mut state, StackType::Tableau(0), StackType::Tableau(1), 4));
        assert!(!transfer_run(&mut state, StackType::Tableau(0), StackType::Tableau(1), 0));
        assert_eq!(state, before);

        assert!(transfer_run(&mut state, StackType::Tableau(0), StackType::Tableau(1), 3));
        assert!(state.tableau[0].is_empty());
        assert_eq!(state.tableau[1].len(), 4);
    }

    #[test]
    fn foundations_stay_sorted_under_free_rules() {
        let mut state = GameState::empty(3);
        let king = Card::new(Rank::King, Suit::Heart);
        let king_id = king.id;
        let ace = Card::new(Rank::Ace, Suit::Heart);
        let ace_id = ace.id;
        let three = Card::new(Rank::Three, Suit::Heart);
        let three_id = three.id;
        state.tableau[0] = vec![king];
        state.tableau[1] = vec![ace];
        state.tableau[2] = vec![three];
        let system = MoveCardSystem;
        let hearts = StackType::Foundation(Suit::Heart);

        assert_eq!(system.move_cards(&mut state, RuleSet::Free, &[king_id], hearts), MoveOutcome::Rejected);
        assert!(state.foundation(Suit::Heart).is_empty(), "空の組札には A から");

        assert!(system.move_cards(&mut state, RuleSet::Free, &[ace_id], hearts).is_moved());
        assert_eq!(
            system.move_cards(&mut state, RuleSet::Free, &[three_id], hearts),
            MoveOutcome::Rejected,
            "A の上に 3 は飛ばしすぎ"
        );
        assert_eq!(ranks(state.foundation(Suit::Heart)), vec![Rank::Ace]);
        assert_eq!(state.move_count, 1);
    }

    #[test]
    fn unknown_id_is_a_no_op_but_waste_top_moves() {
        let layout = layout();
        let mut state = GameState::empty(7);
        let waste_card = Card::new(Rank::Seven, Suit::Spade);
        let waste_id = waste_card.id;
        state.waste.push(waste_card);
        let system = MoveCardSystem;
        let before = state.clone();

        // どこにも無い ID: 列は全部そのまま
        let unknown = MoveRequest { dragged: vec![CardId::new()], drop_point: point_in_column(&layout, 1) };
        assert_eq!(system.resolve_move(&mut state, &layout, RuleSet::Free, &unknown), MoveOutcome::SourceNotFound);
        assert_eq!(state, before);

        // Waste の一番上は列に動かせる
        let from_waste = MoveRequest { dragged: vec![waste_id], drop_point: point_in_column(&layout, 1) };
        assert_eq!(
            system.resolve_move(&mut state, &layout, RuleSet::Free, &from_waste),
            MoveOutcome::Moved { from: StackType::Waste, to: StackType::Tableau(1), count: 1 }
        );
        assert!(state.waste.is_empty());
        assert_eq!(state.tableau[1].iter().map(|c| c.id).collect::<Vec<_>>(), vec![waste_id]);
        let lengths: Vec<_> = state.tableau.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![0, 1, 0, 0, 0, 0, 0]);
    }
}
