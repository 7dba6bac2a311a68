use thiserror::Error;

use crate::types::errors::ErrorKind;

/// Terminal failures surfaced by the public API. The two validation
/// variants are precondition failures, not transient faults; retrying with
/// the same parameters cannot succeed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("terms of service not accepted: {0}")]
    TermsNotAccepted(String),
    #[error("missing contact: {0}")]
    MissingContact(String),
    #[error("executor failure: {0}")]
    Executor(String),
}

impl From<crate::types::errors::Error> for ApiError {
    fn from(e: crate::types::errors::Error) -> Self {
        match e.kind {
            ErrorKind::TermsNotAccepted => ApiError::TermsNotAccepted(e.msg),
            ErrorKind::MissingContact => ApiError::MissingContact(e.msg),
            ErrorKind::Io | ErrorKind::Exec => ApiError::Executor(e.msg),
        }
    }
}

// Stable identifiers attached to failure facts. SCREAMING_SNAKE_CASE
// matches the emitted IDs.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorId {
    E_TOS,
    E_CONTACT,
    E_GENERIC,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_TOS => "E_TOS",
        ErrorId::E_CONTACT => "E_CONTACT",
        ErrorId::E_GENERIC => "E_GENERIC",
    }
}

/// Stable exit codes for embedding tools that map failures to process exits.
#[must_use]
pub const fn exit_code_for(id: ErrorId) -> i32 {
    match id {
        ErrorId::E_TOS => 10,
        ErrorId::E_CONTACT => 20,
        ErrorId::E_GENERIC => 1,
    }
}

pub(crate) const fn id_for_kind(kind: ErrorKind) -> ErrorId {
    match kind {
        ErrorKind::TermsNotAccepted => ErrorId::E_TOS,
        ErrorKind::MissingContact => ErrorId::E_CONTACT,
        ErrorKind::Io | ErrorKind::Exec => ErrorId::E_GENERIC,
    }
}
