//! Install-strategy table: maps normalized facts to an install method.
//!
//! The compatibility table is ordered data evaluated top to bottom, first
//! match wins; supporting a new OS release is a row change, not a
//! control-flow change. An explicit `install_method` parameter bypasses the
//! table entirely.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_VCS_PATH;
use crate::types::{InstallMethod, NormalizedFacts, OsFamily, ReleaseVersion, ResolvedStrategy};

/// One row of the compatibility table. A row matches when the family is
/// equal, the distribution (if constrained) is equal, and the release is at
/// least `min_release` (if constrained).
struct Rule {
    family: OsFamily,
    distribution: Option<&'static str>,
    min_release: Option<ReleaseVersion>,
    method: InstallMethod,
}

impl Rule {
    fn matches(&self, facts: &NormalizedFacts) -> bool {
        if facts.family != self.family {
            return false;
        }
        if let Some(d) = self.distribution {
            if !facts.distribution.eq_ignore_ascii_case(d) {
                return false;
            }
        }
        if let Some(min) = self.min_release {
            if facts.release < min {
                return false;
            }
        }
        true
    }
}

/// Compatibility table. Releases older than a row's minimum fall through to
/// `DEFAULT_METHOD` below, which also covers unrecognized families.
const TABLE: &[Rule] = &[
    Rule {
        family: OsFamily::RedHat,
        distribution: None,
        min_release: None,
        method: InstallMethod::Package,
    },
    Rule {
        family: OsFamily::Debian,
        distribution: Some("Debian"),
        min_release: Some(ReleaseVersion::new(9, 0)),
        method: InstallMethod::Package,
    },
    Rule {
        family: OsFamily::Debian,
        distribution: Some("Ubuntu"),
        min_release: Some(ReleaseVersion::new(16, 4)),
        method: InstallMethod::Package,
    },
];

const DEFAULT_METHOD: InstallMethod = InstallMethod::Vcs;

/// Resolve the install strategy. Explicit choices always override the table;
/// the default path is used unless an explicit one is given.
#[must_use]
pub fn resolve(
    facts: &NormalizedFacts,
    explicit_method: Option<InstallMethod>,
    explicit_path: Option<&Path>,
) -> ResolvedStrategy {
    let method = explicit_method.unwrap_or_else(|| {
        TABLE
            .iter()
            .find(|r| r.matches(facts))
            .map_or(DEFAULT_METHOD, |r| r.method)
    });
    let path = explicit_path.map_or_else(|| PathBuf::from(DEFAULT_VCS_PATH), Path::to_path_buf);
    ResolvedStrategy { method, path }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Facts;

    fn facts(family: &str, distribution: &str, release: &str) -> NormalizedFacts {
        Facts {
            family: Some(family.into()),
            distribution: Some(distribution.into()),
            release: Some(release.into()),
            shell_path: None,
        }
        .normalize()
    }

    #[test]
    fn redhat_always_installs_from_package() {
        for release in ["6.0", "7.2", "9.3"] {
            let s = resolve(&facts("RedHat", "RedHat", release), None, None);
            assert_eq!(s.method, InstallMethod::Package, "release {release}");
        }
    }

    #[test]
    fn debian_and_ubuntu_split_on_release_threshold() {
        assert_eq!(resolve(&facts("Debian", "Debian", "9.0"), None, None).method, InstallMethod::Package);
        assert_eq!(resolve(&facts("Debian", "Debian", "8.0"), None, None).method, InstallMethod::Vcs);
        assert_eq!(resolve(&facts("Debian", "Ubuntu", "16.04"), None, None).method, InstallMethod::Package);
        assert_eq!(resolve(&facts("Debian", "Ubuntu", "16.10"), None, None).method, InstallMethod::Package);
        assert_eq!(resolve(&facts("Debian", "Ubuntu", "14.04"), None, None).method, InstallMethod::Vcs);
    }

    #[test]
    fn unrecognized_family_falls_through_to_source_checkout() {
        assert_eq!(resolve(&facts("Darwin", "Darwin", "15.0"), None, None).method, InstallMethod::Vcs);
        assert_eq!(resolve(&Facts::default().normalize(), None, None).method, InstallMethod::Vcs);
    }

    #[test]
    fn explicit_method_and_path_always_win() {
        let f = facts("Debian", "Debian", "9.0");
        let s = resolve(&f, Some(InstallMethod::Vcs), Some(Path::new("/usr/lib/letsencrypt")));
        assert_eq!(s.method, InstallMethod::Vcs);
        assert_eq!(s.path, PathBuf::from("/usr/lib/letsencrypt"));

        let s = resolve(&facts("Darwin", "Darwin", "15.0"), Some(InstallMethod::Package), None);
        assert_eq!(s.method, InstallMethod::Package);
        assert_eq!(s.path, PathBuf::from(DEFAULT_VCS_PATH));
    }
}
