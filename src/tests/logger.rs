use log::{Level, LevelFilter, Log, Metadata, Record};
use std::format;
use std::string::String;
use std::sync::{Mutex, Once};
use std::vec::Vec;

/// Keeps every log line so tests can check diagnostics.
///
/// The logger is process wide and tests run in parallel, so assertions
/// should look for lines unique to the test.
struct CaptureLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), format!("{}", record.args())));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

/// True if a line at `level` containing `needle` was logged.
pub fn logged(level: Level, needle: &str) -> bool {
    LOGGER
        .lines
        .lock()
        .unwrap()
        .iter()
        .any(|(line_level, line)| *line_level == level && line.contains(needle))
}
