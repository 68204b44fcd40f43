//! Leveled diagnostics sink.
//!
//! Pipeline stages report what they computed and what they had to skip through
//! a [`Diagnostics`] handle instead of writing to the console. Production code
//! uses [`LogDiagnostics`], which forwards to the `log` facade; tests swap in a
//! [`RecordingDiagnostics`] and assert on the captured events.

use serde::Serialize;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<Level> for log::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error => log::Level::Error,
        }
    }
}

pub trait Diagnostics: Send + Sync {
    fn emit(&self, level: Level, target: &'static str, message: &str);

    fn debug(&self, target: &'static str, message: &str) {
        self.emit(Level::Debug, target, message);
    }

    fn info(&self, target: &'static str, message: &str) {
        self.emit(Level::Info, target, message);
    }

    fn warn(&self, target: &'static str, message: &str) {
        self.emit(Level::Warn, target, message);
    }

    fn error(&self, target: &'static str, message: &str) {
        self.emit(Level::Error, target, message);
    }
}

/// Forwards every event to the `log` crate under its component target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn emit(&self, level: Level, target: &'static str, message: &str) {
        log::log!(target: target, level.into(), "{}", message);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn emit(&self, _level: Level, _target: &'static str, _message: &str) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticEvent {
    pub level: Level,
    pub target: &'static str,
    pub message: String,
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DiagnosticEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn at_level(&self, level: Level) -> Vec<DiagnosticEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }

    /// True if any event at `level` contains `needle`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.events()
            .iter()
            .any(|e| e.level == level && e.message.contains(needle))
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn emit(&self, level: Level, target: &'static str, message: &str) {
        let event = DiagnosticEvent {
            level,
            target,
            message: message.to_string(),
        };
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
