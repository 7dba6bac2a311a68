//! User-declared desired state, mirroring the original module parameters.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::constants::{DEFAULT_CONFIG_FILE, DEFAULT_REPO, DEFAULT_VCS_VERSION};

/// How the client gets installed: an OS package, or a source checkout
/// driven through version control (the original's `vcs` method).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallMethod {
    Package,
    Vcs,
}

impl fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Package => "package",
            Self::Vcs => "vcs",
        })
    }
}

#[derive(Debug, Error)]
#[error("unknown install method: {0}")]
pub struct UnknownInstallMethod(pub String);

impl FromStr for InstallMethod {
    type Err = UnknownInstallMethod;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "package" => Ok(Self::Package),
            "vcs" | "source-checkout" => Ok(Self::Vcs),
            other => Err(UnknownInstallMethod(other.to_string())),
        }
    }
}

/// Desired configuration declared by the operator. `Default` carries the
/// upstream module's defaults; resolution never mutates a `Parameters`.
#[derive(Clone, Debug)]
pub struct Parameters {
    /// Contact address registered with the CA.
    pub email: Option<String>,
    /// Agreement to the Let's Encrypt Terms of Service. Resolution refuses
    /// to proceed while this is false.
    pub agree_tos: bool,
    /// Opt-in to registering without any contact address.
    pub unsafe_registration: bool,
    /// Explicit install method; overrides the strategy table when set.
    pub install_method: Option<InstallMethod>,
    /// Explicit checkout destination; overrides the default path when set.
    pub install_path: Option<PathBuf>,
    /// Pinned package version for the package method.
    pub package_ensure: Option<String>,
    /// Repository cloned by the source-checkout method.
    pub repo: String,
    /// Ref checked out by the source-checkout method.
    pub version: String,
    pub manage_install: bool,
    pub manage_config: bool,
    /// Whether the installer should also manage checkout dependencies.
    pub manage_dependencies: bool,
    /// Whether to set up the EPEL repository ahead of the package install.
    /// Only takes effect on RedHat-family facts.
    pub configure_epel: bool,
    /// Target file for all merged settings.
    pub config_file: PathBuf,
    /// Free-form settings map; keys are passed through opaquely and win
    /// over every derived value on collision.
    pub config: BTreeMap<String, String>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            email: None,
            agree_tos: true,
            unsafe_registration: false,
            install_method: None,
            install_path: None,
            package_ensure: None,
            repo: DEFAULT_REPO.to_string(),
            version: DEFAULT_VCS_VERSION.to_string(),
            manage_install: true,
            manage_config: true,
            manage_dependencies: true,
            configure_epel: true,
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            config: BTreeMap::new(),
        }
    }
}

impl Parameters {
    /// Contact address available for registration, from the dedicated
    /// parameter or an `email` key in the config map.
    #[must_use]
    pub fn contact_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .or_else(|| self.config.get("email").map(String::as_str))
    }
}
