//! Stderr logger for the launcher.
//!
//! Stdout belongs to the program we exec into, so every diagnostic goes
//! to stderr. The format is advisory only; nothing downstream parses it.

use log::{Metadata, Record};

pub struct StderrLogger;

impl StderrLogger {
    pub fn setup() {
        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        log::set_max_level(level);
        log::set_boxed_logger(Box::new(StderrLogger)).unwrap();
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[jailrun][{}]: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}
