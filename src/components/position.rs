// src/components/position.rs

use serde::{Serialize, Deserialize};
use std::ops::{Add, Sub};

/// 2D空間での位置 (x, y) だよ！📍
///
/// ドラッグの開始点・現在地・ドロップ地点、それからカードの描画位置に使う。
/// 座標はホスト画面のグローバル座標 (左上原点、下向きに y が増える)。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, other: Position) -> Position {
        Position { x: self.x - other.x, y: self.y - other.y }
    }
}

/// 矩形領域。スタックのドロップ判定とカードのクリック判定に使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn origin(&self) -> Position {
        Position { x: self.x, y: self.y }
    }

    /// 点が矩形の中にあるか。左・上の辺は含んで、右・下の辺は含まない。
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}
