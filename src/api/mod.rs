// Facade for API module; delegates to submodules under src/api/

use crate::logging::{AuditSink, FactsEmitter};
use crate::types::{Facts, Parameters, Plan};

pub mod errors;
mod plan;
mod resolve;

/// Resolution engine: holds the observability sinks and the declared
/// parameters. `resolve` is pure over the supplied facts; concurrent
/// resolutions need no coordination.
pub struct Certplan<E: FactsEmitter, A: AuditSink> {
    facts_sink: E,
    audit: A,
    params: Parameters,
}

impl<E: FactsEmitter, A: AuditSink> Certplan<E, A> {
    pub fn new(facts_sink: E, audit: A, params: Parameters) -> Self {
        Self {
            facts_sink,
            audit,
            params,
        }
    }

    /// The parameters this engine resolves against.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Resolve a provisioning plan for the given OS facts.
    ///
    /// Validation runs first and is the only failure source; identical
    /// facts and parameters always produce a structurally identical plan.
    pub fn resolve(&self, facts: &Facts) -> Result<Plan, errors::ApiError> {
        resolve::run(self, facts)
    }
}
