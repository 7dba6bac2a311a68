//! Audit helpers that emit structured facts across resolution stages.
//
// Side-effects:
// - Emits JSON facts via `FactsEmitter` for the stages `preflight`,
//   `strategy`, `config.merge`, `plan` (per-resource rows), and
//   `resolve.result`.
// - Ensures a minimal envelope is present on every fact: `schema_version`,
//   `ts`, `plan_id`, `decision`.
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::FactsEmitter;

pub(crate) const SCHEMA_VERSION: i64 = 1;

/// Constant timestamp used on deterministic stage facts so identical inputs
/// emit identical facts.
pub const TS_ZERO: &str = "1970-01-01T00:00:00Z";

/// Wall-clock RFC3339 timestamp for result facts.
#[must_use]
pub fn now_iso() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| TS_ZERO.to_string())
}

pub(crate) struct AuditCtx<'a> {
    pub facts: &'a dyn FactsEmitter,
    pub plan_id: String,
    pub ts: String,
}

impl<'a> AuditCtx<'a> {
    pub(crate) fn new(facts: &'a dyn FactsEmitter, plan_id: String, ts: String) -> Self {
        Self { facts, plan_id, ts }
    }
}

/// Stage for typed audit emission.
#[derive(Clone, Copy, Debug)]
pub enum Stage {
    Preflight,
    Strategy,
    ConfigMerge,
    Plan,
    ResolveResult,
}

impl Stage {
    fn as_event(self) -> &'static str {
        match self {
            Self::Preflight => "preflight",
            Self::Strategy => "strategy",
            Self::ConfigMerge => "config.merge",
            Self::Plan => "plan",
            Self::ResolveResult => "resolve.result",
        }
    }
}

/// Decision severity for audit events.
#[derive(Clone, Copy, Debug)]
pub enum Decision {
    Success,
    Failure,
    Warn,
}

impl Decision {
    fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Warn => "warn",
        }
    }
}

/// Builder facade over audit emission with a centralized envelope.
pub struct StageLogger<'a> {
    ctx: &'a AuditCtx<'a>,
}

impl<'a> StageLogger<'a> {
    pub(crate) fn new(ctx: &'a AuditCtx<'a>) -> Self {
        Self { ctx }
    }

    pub fn preflight(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::Preflight)
    }
    pub fn strategy(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::Strategy)
    }
    pub fn config_merge(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::ConfigMerge)
    }
    pub fn plan(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::Plan)
    }
    pub fn resolve_result(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::ResolveResult)
    }
}

pub struct EventBuilder<'a> {
    ctx: &'a AuditCtx<'a>,
    stage: Stage,
    fields: serde_json::Map<String, Value>,
}

impl<'a> EventBuilder<'a> {
    fn new(ctx: &'a AuditCtx<'a>, stage: Stage) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("stage".to_string(), json!(stage.as_event()));
        Self { ctx, stage, fields }
    }

    /// Attach the deterministic spec ID of the resource this fact describes.
    #[must_use]
    pub fn spec(mut self, spec_id: impl Into<String>) -> Self {
        self.fields.insert("spec_id".into(), json!(spec_id.into()));
        self
    }

    /// Merge the fields of a JSON object into the event. Non-objects are
    /// ignored.
    #[must_use]
    pub fn merge(mut self, v: Value) -> Self {
        if let Value::Object(m) = v {
            self.fields.extend(m);
        }
        self
    }

    fn emit(mut self, decision: Decision) {
        self.fields
            .insert("schema_version".into(), json!(SCHEMA_VERSION));
        self.fields.insert("ts".into(), json!(self.ctx.ts));
        self.fields.insert("plan_id".into(), json!(self.ctx.plan_id));
        self.fields
            .insert("decision".into(), json!(decision.as_str()));
        self.ctx.facts.emit(
            "certplan",
            self.stage.as_event(),
            decision.as_str(),
            Value::Object(self.fields),
        );
    }

    pub fn emit_success(self) {
        self.emit(Decision::Success);
    }
    pub fn emit_failure(self) {
        self.emit(Decision::Failure);
    }
    pub fn emit_warn(self) {
        self.emit(Decision::Warn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collect(Mutex<Vec<Value>>);

    impl FactsEmitter for Collect {
        fn emit(&self, _s: &str, _e: &str, _d: &str, fields: Value) {
            self.0.lock().unwrap().push(fields);
        }
    }

    #[test]
    fn every_fact_carries_the_minimal_envelope() {
        let sink = Collect::default();
        let ctx = AuditCtx::new(&sink, "pid-1".into(), TS_ZERO.into());
        StageLogger::new(&ctx)
            .strategy()
            .merge(json!({"method": "package"}))
            .emit_success();

        let events = sink.0.lock().unwrap();
        let e = &events[0];
        assert_eq!(e.get("schema_version"), Some(&json!(SCHEMA_VERSION)));
        assert_eq!(e.get("ts"), Some(&json!(TS_ZERO)));
        assert_eq!(e.get("plan_id"), Some(&json!("pid-1")));
        assert_eq!(e.get("stage"), Some(&json!("strategy")));
        assert_eq!(e.get("decision"), Some(&json!("success")));
        assert_eq!(e.get("method"), Some(&json!("package")));
    }
}
