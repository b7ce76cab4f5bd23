//! ブラウザ (wasm32) の上で SolitaireApp を動かしてみるテスト。
//! `wasm-pack test --headless --chrome` で実行する。

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use solitaire_wasm_game::SolitaireApp;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn app_deals_and_reports_state() {
    let mut app = SolitaireApp::new(r#"{"seed": 42, "log_level": "warn"}"#).unwrap();
    assert_eq!(app.move_count(), 0);

    let json = app.state_json().unwrap();
    assert!(json.contains("\"stock_count\":24"), "{}", json);

    let outcome = app.draw_from_stock().unwrap();
    assert_eq!(outcome, r#"{"Dealt":1}"#);
    assert_eq!(app.move_count(), 1);
    assert!(app.undo());
    assert_eq!(app.move_count(), 0);
}

#[wasm_bindgen_test]
fn bad_config_is_an_error() {
    assert!(SolitaireApp::new(r#"{"draw_count": 9}"#).is_err());
}

#[wasm_bindgen_test]
fn asset_and_transfer_names_are_exported() {
    assert_eq!(solitaire_wasm_game::card_transfer_type(), "application/x-solitaire-card+json");
    assert_eq!(solitaire_wasm_game::table_background_image(), "TableBackground");
}
