//! Shared crate-wide constants for certplan.
//!
//! Centralizes magic values and default labels used across modules.
//! Adjusting these here will propagate through the crate.

/// Default ACME directory endpoint written into the client config.
pub const DEFAULT_SERVER: &str = "https://acme-v01.api.letsencrypt.org/directory";

/// Default RSA key size requested from the ACME client.
pub const DEFAULT_RSA_KEY_SIZE: u32 = 4096;

/// Default client configuration file targeted by merged settings.
pub const DEFAULT_CONFIG_FILE: &str = "/etc/letsencrypt/cli.ini";

/// Default checkout destination for the source-checkout install method.
pub const DEFAULT_VCS_PATH: &str = "/opt/letsencrypt";

/// Upstream repository cloned by the source-checkout install method.
pub const DEFAULT_REPO: &str = "git://github.com/letsencrypt/letsencrypt.git";

/// Pinned ref checked out by default for source-checkout installs.
pub const DEFAULT_VCS_VERSION: &str = "v0.4.0";

/// OS package name installed for the package method.
pub const PACKAGE_NAME: &str = "letsencrypt";

/// Command used to invoke the packaged client binary.
pub const PACKAGE_COMMAND: &str = "letsencrypt";

/// Wrapper script invoked when the client was installed from source.
pub const VCS_COMMAND: &str = "letsencrypt-auto";

/// UUIDv5 namespace tag for deterministic plan/spec IDs.
pub const NS_TAG: &str = "https://certplan/resolver";
