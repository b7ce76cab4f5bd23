// src/logging.rs
//! `log` クレートのマクロ (info! とか debug!) の出力先。
//! ブラウザでは console.log、ネイティブ (テストとか) では標準エラーに出すよ。

use log::{LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_line(&format!("[{}] {}: {}", record.level(), record.target(), record.args()));
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(line: &str) {
    web_sys::console::log_1(&line.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(line: &str) {
    eprintln!("{}", line);
}

/// ロガーを登録して、出力するレベルを設定する。
/// 2回目以降の呼び出しではレベルだけ変わる。
pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("Logger already installed; updating level to {}", level);
    }
    log::set_max_level(level);
}
