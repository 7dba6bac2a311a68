//! Error types used across certplan.
use thiserror::Error;

/// High-level error categories for resolution and executor adapters.
///
/// The resolver itself only ever raises `TermsNotAccepted` and
/// `MissingContact`; `Io` and `Exec` exist for executor implementations of
/// the `adapters` traits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("terms of service not accepted")]
    TermsNotAccepted,
    #[error("no contact address")]
    MissingContact,
    #[error("io error")]
    Io,
    #[error("command failed")]
    Exec,
}

/// Structured error with a kind and human message.
#[derive(Debug, Error)]
#[error("{kind:?}: {msg}")]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
}

impl Error {
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self { kind, msg: msg.into() }
    }
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
