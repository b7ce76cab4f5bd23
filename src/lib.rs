// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod logic;
pub mod protocol;
pub mod systems;

use crate::app::GameApp;
use crate::components::{CardId, Position, StackType};
use crate::config::GameConfig;

pub use crate::app::{GameEvent, GameObserver};
pub use crate::components::{Card, GameState, Rank, Suit};
pub use crate::systems::MoveOutcome;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// ドラッグ＆ドロップの DataTransfer に使うデータ型の識別子。
#[wasm_bindgen]
pub fn card_transfer_type() -> String {
    protocol::CARD_TRANSFER_TYPE.to_string()
}

/// テーブルの背景画像のアセット名。
#[wasm_bindgen]
pub fn table_background_image() -> String {
    components::card::TABLE_BACKGROUND_IMAGE.to_string()
}

/// 裏向きのカードの画像のアセット名。
#[wasm_bindgen]
pub fn card_back_image() -> String {
    components::card::CARD_BACK_IMAGE.to_string()
}

/// anyhow のエラーを JS に渡せる形にする (原因のチェーンも全部つなげる)。
fn to_js_error(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", err))
}

fn outcome_json(outcome: &impl serde::Serialize) -> Result<String, JsValue> {
    serde_json::to_string(outcome).map_err(|e| JsValue::from_str(&e.to_string()))
}

// --- JavaScript から使うソリティアの本体 ---
// 受け渡しは全部 JSON 文字列か数値。状態が変わったら state_json() を読み直してね。
#[wasm_bindgen]
pub struct SolitaireApp {
    inner: GameApp,
}

#[wasm_bindgen]
impl SolitaireApp {
    /// 設定の JSON (空文字なら全部既定値) からゲームを作って、最初の配りまでやる。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<SolitaireApp, JsValue> {
        let config = if config_json.trim().is_empty() {
            GameConfig::default()
        } else {
            GameConfig::from_json(config_json).map_err(to_js_error)?
        };
        logging::init_logging(config.log_level_filter());
        let inner = GameApp::new(config).map_err(to_js_error)?;
        Ok(SolitaireApp { inner })
    }

    pub fn new_game(&mut self) -> Result<(), JsValue> {
        self.inner.new_game().map_err(to_js_error)
    }

    pub fn reload(&mut self) -> Result<(), JsValue> {
        self.inner.reload().map_err(to_js_error)
    }

    pub fn set_screen_width(&mut self, screen_width: f32) {
        self.inner.set_screen_width(screen_width);
    }

    pub fn drag_start(&mut self, x: f32, y: f32) -> bool {
        self.inner.drag_start(Position::new(x, y))
    }

    pub fn drag_update(&mut self, x: f32, y: f32) {
        self.inner.drag_update(Position::new(x, y));
    }

    /// 移動の結果 (MoveOutcome) を JSON で返す。
    pub fn drag_end(&mut self, x: f32, y: f32) -> Result<String, JsValue> {
        let outcome = self.inner.drag_end(Position::new(x, y));
        outcome_json(&outcome)
    }

    pub fn drag_cancel(&mut self) {
        self.inner.drag_cancel();
    }

    /// ドラッグ中のカードの転送データ (JSON)。ドラッグしていなければ None。
    pub fn drag_payload(&self) -> Result<Option<String>, JsValue> {
        self.inner
            .drag_payload()
            .map(|payload| payload.encode().map_err(to_js_error))
            .transpose()
    }

    /// `payload` は drag_payload() の JSON、`target_json` は StackType の JSON (例: {"Tableau":3})。
    pub fn drop_payload(&mut self, payload: &str, target_json: &str) -> Result<String, JsValue> {
        let payload = protocol::DragPayload::decode(payload).map_err(to_js_error)?;
        let target: StackType = serde_json::from_str(target_json)
            .map_err(|e| JsValue::from_str(&format!("invalid target stack {:?}: {}", target_json, e)))?;
        let outcome = self.inner.drop_cards(&payload.card_ids(), target);
        outcome_json(&outcome)
    }

    pub fn draw_from_stock(&mut self) -> Result<String, JsValue> {
        let outcome = self.inner.draw_from_stock();
        outcome_json(&outcome)
    }

    pub fn auto_move(&mut self, card_id: &str) -> Result<String, JsValue> {
        let id = CardId::parse(card_id).map_err(to_js_error)?;
        let outcome = self.inner.auto_move(id);
        outcome_json(&outcome)
    }

    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }

    pub fn move_count(&self) -> u32 {
        self.inner.move_count()
    }

    pub fn is_won(&self) -> bool {
        self.inner.is_won()
    }

    pub fn state_json(&self) -> Result<String, JsValue> {
        self.inner.state_json().map_err(to_js_error)
    }
}
