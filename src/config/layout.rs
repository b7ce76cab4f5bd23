// src/config/layout.rs
//! テーブルのレイアウトに関する定数を定義するよ！
//! カードの縦横比や、上のコントロールバーの大きさなど。
//! 実際の座標計算は `app::layout_calculator::TableLayout` がやる。

/// 標準の場札の列数。
pub const TABLEAU_COLUMNS: usize = 7;
/// 場札の列数の上限。1..=9 列なら三角形に配っても 52 枚に収まる (9 列で 45 枚)。
pub const MAX_TABLEAU_COLUMNS: usize = 9;

/// カードの縦横比 (幅 6 : 高さ 8)。
pub const CARD_ASPECT_WIDTH: f32 = 6.0;
pub const CARD_ASPECT_HEIGHT: f32 = 8.0;

/// 列の中でカードを重ねるときのずらし量 (カードの高さに対する割合)。
pub const FAN_OFFSET_RATIO: f32 = 0.5;

/// 画面上部のコントロールバー (リロードボタンと手数表示)。
pub const CONTROL_BAR_HEIGHT: f32 = 64.0;
pub const CONTROL_BAR_PADDING: f32 = 16.0;

/// 上の段 (山札・Waste・組札) と場札の段の間の隙間。
pub const ROW_SPACING: f32 = 5.0;

/// 画面幅が分からないときの既定値。
pub const DEFAULT_SCREEN_WIDTH: f32 = 390.0;

/// 上の段で山札と Waste が使うスロット番号。
pub const STOCK_SLOT: usize = 0;
pub const WASTE_SLOT: usize = 1;
/// 組札は右詰めで4つ並ぶ。列が少ないときでも Waste の右から始める。
pub const FOUNDATION_MIN_SLOT: usize = 2;
