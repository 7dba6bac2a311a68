//! Preflight stage: parameter validation before any other stage runs.
//!
//! Two policy gates, evaluated in order; the first failure aborts the whole
//! resolution with no partial plan. These are the only hard failures in the
//! resolver; every later stage is total over its inputs.

use crate::types::{Error, ErrorKind, Parameters, Result};

/// Validate parameters. First failing rule wins.
///
/// Rule order is part of the contract: a missing TOS agreement is reported
/// even when the contact address is also missing.
pub fn validate(params: &Parameters) -> Result<()> {
    if !params.agree_tos {
        return Err(Error::new(
            ErrorKind::TermsNotAccepted,
            "You must agree to the Let's Encrypt Terms of Service to continue; set agree_tos",
        ));
    }
    if params.contact_email().is_none() && !params.unsafe_registration {
        return Err(Error::new(
            ErrorKind::MissingContact,
            "Please specify an email address to register with Let's Encrypt, \
             or set unsafe_registration to register without one",
        ));
    }
    Ok(())
}
