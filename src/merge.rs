//! Config merge stage: three layers, later layers win on key collision.
//!
//! Layer order is load-bearing and must stay defaults → derived → user
//! config: a user `config["email"]` overrides the derived registration keys,
//! never the other way around.

use crate::constants::{DEFAULT_RSA_KEY_SIZE, DEFAULT_SERVER};
use crate::types::{Parameters, SettingsSet};

/// Merge built-in defaults, parameter-derived registration keys, and the
/// user config map into one deterministic settings set.
#[must_use]
pub fn merge(params: &Parameters) -> SettingsSet {
    let mut settings = SettingsSet::new();

    // Layer 1: built-in defaults.
    settings.set("server", DEFAULT_SERVER);
    settings.set("rsa-key-size", DEFAULT_RSA_KEY_SIZE.to_string());

    // Layer 2: derived registration keys, mutually exclusive.
    if let Some(email) = params.email.as_deref() {
        settings.set("email", email);
    } else if params.unsafe_registration {
        settings.set("register-unsafely-without-email", "true");
    }

    // Layer 3: user config is authoritative, including over layer 2.
    for (k, v) in &params.config {
        settings.set(k.clone(), v.clone());
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_config_overrides_defaults() {
        let mut params = Parameters {
            email: Some("foo@example.com".into()),
            ..Parameters::default()
        };
        params.config.insert("rsa-key-size".into(), "2048".into());

        let s = merge(&params);
        assert_eq!(s.get("server"), Some(DEFAULT_SERVER));
        assert_eq!(s.get("rsa-key-size"), Some("2048"));
        assert_eq!(s.get("email"), Some("foo@example.com"));
    }

    #[test]
    fn unsafe_registration_replaces_the_email_key() {
        let params = Parameters {
            unsafe_registration: true,
            ..Parameters::default()
        };
        let s = merge(&params);
        assert_eq!(s.get("register-unsafely-without-email"), Some("true"));
        assert!(!s.contains("email"));
    }

    #[test]
    fn email_parameter_suppresses_unsafe_registration_key() {
        let params = Parameters {
            email: Some("foo@example.com".into()),
            unsafe_registration: true,
            ..Parameters::default()
        };
        let s = merge(&params);
        assert_eq!(s.get("email"), Some("foo@example.com"));
        assert!(!s.contains("register-unsafely-without-email"));
    }

    #[test]
    fn user_config_overrides_derived_email() {
        let mut params = Parameters {
            email: Some("foo@example.com".into()),
            ..Parameters::default()
        };
        params.config.insert("email".into(), "ops@example.com".into());
        assert_eq!(merge(&params).get("email"), Some("ops@example.com"));
    }

    #[test]
    fn merge_is_deterministic() {
        let mut params = Parameters {
            email: Some("foo@example.com".into()),
            ..Parameters::default()
        };
        params.config.insert("foo".into(), "bar".into());
        params.config.insert("baz".into(), "qux".into());
        assert_eq!(merge(&params), merge(&params));
    }
}
