#![cfg(feature = "std")]

//! Stderr logger for the binaries, so log lines never land in the board
//! output or the simulation JSON on stdout.

use std::env;
use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error` .. `trace`, `off`).
pub const LOG_ENV: &str = "NAVAL_BATTLE_LOG";

struct GameLogger;

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("naval_battle")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let module = record.target().rsplit("::").next().unwrap_or("");
            eprintln!("[{:<5} {}] {}", record.level(), module, record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: GameLogger = GameLogger;

/// Level named by `value`, falling back to `info` when unset or unparseable.
pub fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger at the level given by [`LOG_ENV`]. Calling it again
/// only adjusts the level.
pub fn init_logging() {
    let level = log_level(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
