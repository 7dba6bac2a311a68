//! Executor interfaces the resolver's output is applied through.
//!
//! The engine performs no I/O itself; these traits are the contract an
//! external executor implements. Edge semantics: `Before` edges order
//! executor invocations, `Notifies` edges re-trigger the downstream
//! resource when the upstream one changed.

pub mod config;
pub mod install;
pub mod run;

pub use config::*;
pub use install::*;
pub use run::*;
