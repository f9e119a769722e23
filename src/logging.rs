#![cfg(feature = "std")]

//! Stderr logger for the binary. Stdout belongs to the game and to the
//! `sim` JSON summary, so records never go there.

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::LOG_ENV_VAR;

struct StderrLogger;

/// One log line: level, module path, message.
fn format_record(record: &Record) -> String {
    format!("{:<5} [{}] {}", record.level(), record.target(), record.args())
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(io::stderr().lock(), "{}", format_record(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `warn` so game output stays readable.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Initialize logging with a level taken from the `BATTLESHIPS_LOG` environment variable.
/// Defaults to `warn` if the variable is not set or invalid. Calling it twice is harmless.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
