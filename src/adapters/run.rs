use crate::types::errors::Result;
use crate::types::plan::InitSpec;

/// Executor for the one-shot initialization command, invoked whenever a
/// `Notifies` edge fires. The command is an idempotent help invocation, so
/// redundant runs are safe; the executor is responsible for running it at
/// most once per distinct install state.
pub trait ActionRunner: Send + Sync {
    fn run(&self, spec: &InitSpec) -> Result<()>;
}
