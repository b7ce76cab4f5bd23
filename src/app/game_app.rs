// src/app/game_app.rs

use std::collections::VecDeque;

use anyhow::Context;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::app::drag_handler;
use crate::app::layout_calculator::TableLayout;
use crate::app::state_getter;
use crate::app::stock_handler::{self, StockOutcome};
use crate::components::{CardId, DraggingInfo, GameState, Position, StackType};
use crate::config::{GameConfig, RuleSet};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::protocol::{CardTransfer, DragPayload, GameStateData};
use crate::systems::{DealInitialCardsSystem, MoveCardSystem, MoveOutcome, WinConditionSystem};

/// ゲームの状態が変わるたびに observer に届くイベントだよ！📣
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// 新しく配り直した
    NewGame,
    CardsMoved { from: StackType, to: StackType, count: usize },
    StockDrawn { count: usize },
    StockRecycled { count: usize },
    /// 1手戻した
    Undone,
    /// 全部組札に揃った！🏆
    Won,
}

/// 状態の変化を受け取る側 (画面の再描画とか)。
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent, state: &GameState);
}

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
// 状態を変える操作はどれも「まず GameState を書き換えて、そのあと observer に知らせる」の順番。
pub struct GameApp {
    config: GameConfig,
    layout: TableLayout,
    state: GameState,
    /// ドラッグ中のカード (ドラッグしていなければ None)
    dragging: Option<DraggingInfo>,
    /// undo 用。古いものが先頭。
    history: VecDeque<GameState>,
    observers: Vec<Box<dyn GameObserver>>,
    deal_system: DealInitialCardsSystem,
    move_system: MoveCardSystem,
    win_system: WinConditionSystem,
}

impl GameApp {
    pub fn new(config: GameConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid game config")?;
        let columns = config.columns();
        let deal_system = DealInitialCardsSystem::new(columns, config.rule_set == RuleSet::Klondike);
        let state = deal_system.execute(config.seed)?;
        let layout = TableLayout::for_screen_width(config.screen_width, columns);
        info!("GameApp: initialized with {:?} rules, {} columns", config.rule_set, columns);

        Ok(Self {
            config,
            layout,
            state,
            dragging: None,
            history: VecDeque::new(),
            observers: Vec::new(),
            deal_system,
            move_system: MoveCardSystem,
            win_system: WinConditionSystem::new(),
        })
    }

    /// 新しいデッキで配り直す。手数は 0 に戻って、undo の履歴も消える。
    /// シードが設定されていれば同じ配り方になる。
    pub fn new_game(&mut self) -> anyhow::Result<()> {
        self.state = self.deal_system.execute(self.config.seed)?;
        self.dragging = None;
        self.history.clear();
        info!("GameApp: new game dealt");
        self.notify(GameEvent::NewGame);
        Ok(())
    }

    /// 画面の「リロード」ボタン。中身は new_game と同じ。
    pub fn reload(&mut self) -> anyhow::Result<()> {
        self.new_game()
    }

    pub fn set_screen_width(&mut self, screen_width: f32) {
        if screen_width.is_finite() && screen_width > 0.0 {
            self.config.screen_width = screen_width;
            self.layout = TableLayout::for_screen_width(screen_width, self.config.columns());
        } else {
            debug!("Ignoring screen width {}", screen_width);
        }
    }

    // --- ドラッグ ---

    /// 指の下のカードを掴む。掴めたら true。
    pub fn drag_start(&mut self, point: Position) -> bool {
        self.dragging = drag_handler::handle_drag_start(&self.state, &self.layout, point);
        self.dragging.is_some()
    }

    pub fn drag_update(&mut self, point: Position) {
        if let Some(info) = self.dragging.as_mut() {
            drag_handler::update_dragged_position(info, point);
        }
    }

    /// 指を離した。そこにあるスタックへ移動を試みる。
    pub fn drag_end(&mut self, point: Position) -> MoveOutcome {
        let info = match self.dragging.take() {
            Some(info) => info,
            None => return MoveOutcome::EmptyDrag,
        };
        let request = drag_handler::handle_drag_end(&info, point);
        let before = self.state.clone();
        let outcome = self.move_system.resolve_move(&mut self.state, &self.layout, self.config.rule_set, &request);
        self.finish_move(before, outcome);
        outcome
    }

    pub fn drag_cancel(&mut self) {
        if let Some(mut info) = self.dragging.take() {
            drag_handler::cancel_drag(&mut info);
            debug!("Drag of {} cards cancelled", info.cards.len());
        }
    }

    /// ドロップ先が座標ではなくスタックで分かっているとき (ホスト側のドロップ処理から)。
    pub fn drop_cards(&mut self, dragged: &[CardId], target: StackType) -> MoveOutcome {
        self.dragging = None;
        let before = self.state.clone();
        let outcome = self.move_system.move_cards(&mut self.state, self.config.rule_set, dragged, target);
        self.finish_move(before, outcome);
        outcome
    }

    /// ダブルタップ: 置ける組札があればそこへ送る。
    pub fn auto_move(&mut self, card_id: CardId) -> MoveOutcome {
        match find_automatic_foundation_move(&self.state, card_id) {
            Some(target) => self.drop_cards(&[card_id], target),
            None => {
                debug!("No automatic foundation move for {}", card_id);
                MoveOutcome::Rejected
            }
        }
    }

    // --- 山札 ---

    pub fn draw_from_stock(&mut self) -> StockOutcome {
        let before = self.state.clone();
        let outcome = stock_handler::handle_stock_click(
            &mut self.state,
            self.config.draw_count as usize,
            self.config.rule_set,
        );
        match outcome {
            StockOutcome::Dealt(count) => {
                self.push_history(before);
                self.notify(GameEvent::StockDrawn { count });
            }
            StockOutcome::Recycled(count) => {
                self.push_history(before);
                self.notify(GameEvent::StockRecycled { count });
            }
            StockOutcome::Empty => {}
        }
        outcome
    }

    // --- undo ---

    /// 1手戻す。戻せたら true。
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.state = previous;
                self.dragging = None;
                info!("GameApp: undo ({} left in history)", self.history.len());
                self.notify(GameEvent::Undone);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    // --- 状態の取得 ---

    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dragging(&self) -> Option<&DraggingInfo> {
        self.dragging.as_ref()
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn state_data(&self) -> GameStateData {
        state_getter::build_game_state_data(&self.state, &self.layout)
    }

    pub fn state_json(&self) -> anyhow::Result<String> {
        state_getter::get_game_state_json(&self.state, &self.layout)
    }

    /// ドラッグ中のカードを転送用のデータにする。
    pub fn drag_payload(&self) -> Option<DragPayload> {
        let info = self.dragging.as_ref()?;
        let cards = info
            .cards
            .iter()
            .filter_map(|id| self.state.find_card(*id))
            .map(CardTransfer::from)
            .collect();
        Some(DragPayload { cards })
    }

    // --- 内部ヘルパー ---

    fn finish_move(&mut self, before: GameState, outcome: MoveOutcome) {
        if let MoveOutcome::Moved { from, to, count } = outcome {
            self.push_history(before);
            self.notify(GameEvent::CardsMoved { from, to, count });
            if self.win_system.execute(&mut self.state) {
                self.notify(GameEvent::Won);
            }
        }
    }

    fn push_history(&mut self, snapshot: GameState) {
        let limit = self.config.history_limit;
        if limit == 0 {
            return;
        }
        while self.history.len() >= limit {
            self.history.pop_front();
        }
        self.history.push_back(snapshot);
    }

    fn notify(&mut self, event: GameEvent) {
        debug!("GameApp: {:?}", event);
        for observer in self.observers.iter_mut() {
            observer.on_event(&event, &self.state);
        }
    }
}
