// src/config/game_config.rs
//! ゲームの設定だよ。ホストから JSON で渡してもらう想定！
//! 書かれていない項目は既定値になる。

use anyhow::{ensure, Context};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::config::layout::{DEFAULT_SCREEN_WIDTH, MAX_TABLEAU_COLUMNS, TABLEAU_COLUMNS};

/// カード移動のルールセット。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// どの列にどのカードを置いてもいい。組札だけは同じスートを A から順番に1枚ずつ。
    #[default]
    Free,
    /// 普通のクロンダイクのルール (色違いで1つ小さいランク、空き列には King、組札は A から順番)。
    Klondike,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rule_set: RuleSet,
    /// 山札を1回クリックしたときに Waste へ送る枚数 (1..=3)。
    pub draw_count: u8,
    pub tableau_columns: u8,
    /// 指定すると毎回同じ配り方になる。
    pub seed: Option<u64>,
    pub screen_width: f32,
    /// "off" | "error" | "warn" | "info" | "debug" | "trace"
    pub log_level: String,
    /// undo 用に覚えておく状態の数。
    pub history_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rule_set: RuleSet::Free,
            draw_count: 1,
            tableau_columns: TABLEAU_COLUMNS as u8,
            seed: None,
            screen_width: DEFAULT_SCREEN_WIDTH,
            log_level: "info".to_string(),
            history_limit: 200,
        }
    }
}

impl GameConfig {
    /// JSON 文字列から設定を読み込んで、中身もチェックする。
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: GameConfig =
            serde_json::from_str(json).context("failed to parse game config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            (1..=3).contains(&self.draw_count),
            "draw_count must be between 1 and 3, got {}",
            self.draw_count
        );
        ensure!(
            (1..=MAX_TABLEAU_COLUMNS).contains(&(self.tableau_columns as usize)),
            "tableau_columns must be between 1 and {}, got {}",
            MAX_TABLEAU_COLUMNS,
            self.tableau_columns
        );
        ensure!(
            self.screen_width.is_finite() && self.screen_width > 0.0,
            "screen_width must be a positive number, got {}",
            self.screen_width
        );
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow::anyhow!("unknown log_level {:?}", self.log_level))?;
        Ok(())
    }

    pub fn columns(&self) -> usize {
        self.tableau_columns as usize
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
