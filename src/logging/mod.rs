//! Observability seams: structured facts emission and audit logging.
//!
//! The resolver takes a `FactsEmitter` and an `AuditSink` at construction;
//! both are traits so embedders can plug a JSONL file, a collector, or
//! nothing at all.

pub mod audit;

use log::Level;
use serde_json::Value;

pub use audit::{now_iso, Decision, EventBuilder, Stage, StageLogger, TS_ZERO};

/// Sink for structured per-stage facts.
pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// Sink for human-oriented audit lines, keyed by `log` levels.
pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

/// No-op sink for dev/test wiring.
#[derive(Default)]
pub struct JsonlSink;

impl FactsEmitter for JsonlSink {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, _fields: Value) {}
}

impl AuditSink for JsonlSink {
    fn log(&self, _level: Level, _msg: &str) {}
}

/// Audit sink that forwards lines to the `log` facade.
#[derive(Default)]
pub struct LogSink;

impl AuditSink for LogSink {
    fn log(&self, level: Level, msg: &str) {
        log::log!(level, "{msg}");
    }
}
