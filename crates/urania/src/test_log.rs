//! Process-wide logger that records warnings so tests can assert on them.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());
static INIT: Once = Once::new();

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut lines) = CAPTURED.lock() {
                lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

pub(crate) fn init() {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Warn);
        }
    });
}

/// True if any warning recorded so far contains `needle`.
pub(crate) fn warned(needle: &str) -> bool {
    CAPTURED
        .lock()
        .map(|lines| lines.iter().any(|line| line.contains(needle)))
        .unwrap_or(false)
}
