//! OS facts: the raw environment snapshot and its normalized form.

use std::path::PathBuf;

use serde::Serialize;

/// Raw environment snapshot as observed by the caller. Fields may be absent;
/// normalization is total and never fails.
#[derive(Clone, Debug, Default)]
pub struct Facts {
    pub family: Option<String>,
    pub distribution: Option<String>,
    pub release: Option<String>,
    pub shell_path: Option<PathBuf>,
}

/// Operating-system family recognized by the strategy table. Anything the
/// resolver does not know degrades to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OsFamily {
    Debian,
    RedHat,
    Other,
}

/// Numeric release version. Comparison is numeric, not lexical:
/// `16.04 < 16.10`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ReleaseVersion {
    pub major: u32,
    pub minor: u32,
}

impl ReleaseVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse the leading `major.minor` of a release string. Unparseable
    /// components degrade to zero rather than erroring.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let mut parts = s.trim().split('.');
        let major = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        let minor = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        Self { major, minor }
    }
}

/// Canonical facts tuple consumed by the strategy table and plan builder.
#[derive(Clone, Debug, Serialize)]
pub struct NormalizedFacts {
    pub family: OsFamily,
    pub distribution: String,
    pub release: ReleaseVersion,
    pub shell_path: Option<PathBuf>,
}

impl Facts {
    /// Canonicalize raw facts. Unknown families map to `Other`, absent
    /// versions to `0.0`, so downstream logic is total over all inputs.
    #[must_use]
    pub fn normalize(&self) -> NormalizedFacts {
        let family = match self.family.as_deref() {
            Some(f) if f.eq_ignore_ascii_case("debian") => OsFamily::Debian,
            Some(f) if f.eq_ignore_ascii_case("redhat") => OsFamily::RedHat,
            _ => OsFamily::Other,
        };
        NormalizedFacts {
            family,
            distribution: self.distribution.clone().unwrap_or_default(),
            release: self
                .release
                .as_deref()
                .map(ReleaseVersion::parse)
                .unwrap_or_default(),
            shell_path: self.shell_path.clone(),
        }
    }
}
