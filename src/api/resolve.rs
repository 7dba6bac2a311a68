//! Resolution orchestrator: preflight → normalize → strategy → merge → plan.
//!
//! Side-effects:
//! - Emits one fact per stage plus a `resolve.result` summary.
//! - Failure facts carry `error_id` and `exit_code`; stage facts use the
//!   deterministic `TS_ZERO` timestamp, the result fact a real one.

use log::Level;
use serde_json::json;

use crate::logging::audit::AuditCtx;
use crate::logging::{now_iso, FactsEmitter, StageLogger, TS_ZERO};
use crate::types::ids::{plan_id, spec_id};
use crate::types::{Facts, Plan};
use crate::{merge, preflight, strategy};

use super::errors::{exit_code_for, id_for_kind, id_str, ApiError};

pub(super) fn run<E: FactsEmitter, A: crate::logging::AuditSink>(
    api: &super::Certplan<E, A>,
    facts: &Facts,
) -> Result<Plan, ApiError> {
    // Preflight gates run before any other stage; no partial plan escapes a
    // failure here.
    if let Err(e) = preflight::validate(&api.params) {
        let ctx = AuditCtx::new(&api.facts_sink as &dyn FactsEmitter, String::new(), now_iso());
        let id = id_for_kind(e.kind);
        StageLogger::new(&ctx)
            .preflight()
            .merge(json!({
                "error_id": id_str(id),
                "exit_code": exit_code_for(id),
                "message": e.msg,
            }))
            .emit_failure();
        api.audit.log(Level::Error, &e.to_string());
        return Err(e.into());
    }

    let normalized = facts.normalize();
    let resolved = strategy::resolve(
        &normalized,
        api.params.install_method,
        api.params.install_path.as_deref(),
    );
    let settings = merge::merge(&api.params);
    let settings_fields = serde_json::to_value(&settings).unwrap_or_default();
    let plan = super::plan::build(&normalized, &resolved, settings, &api.params);

    let pid_uuid = plan_id(&plan);
    let pid = pid_uuid.to_string();
    let ctx = AuditCtx::new(
        &api.facts_sink as &dyn FactsEmitter,
        pid.clone(),
        TS_ZERO.to_string(),
    );
    let slog = StageLogger::new(&ctx);
    slog.preflight().merge(json!({"ok": true})).emit_success();
    slog.strategy()
        .merge(json!({
            "facts": serde_json::to_value(&normalized).unwrap_or_default(),
            "method": resolved.method.to_string(),
            "path": resolved.path.display().to_string(),
            "explicit": api.params.install_method.is_some(),
        }))
        .emit_success();
    slog.config_merge()
        .merge(json!({
            "file": api.params.config_file.display().to_string(),
            "settings": settings_fields,
            "managed": api.params.manage_config,
        }))
        .emit_success();
    for (idx, node) in plan.nodes().into_iter().enumerate() {
        let sid = spec_id(&pid_uuid, node, idx).to_string();
        slog.plan()
            .spec(sid)
            .merge(json!({"node": node.label()}))
            .emit_success();
    }

    let rctx = AuditCtx::new(&api.facts_sink as &dyn FactsEmitter, pid.clone(), now_iso());
    StageLogger::new(&rctx)
        .resolve_result()
        .merge(json!({
            "edges": plan.edges.len(),
            "install": plan.install.is_some(),
            "config": plan.config.is_some(),
            "command": plan.init.command,
        }))
        .emit_success();
    api.audit.log(
        Level::Info,
        &format!("resolved plan {pid} with {} edges", plan.edges.len()),
    );

    Ok(plan)
}
