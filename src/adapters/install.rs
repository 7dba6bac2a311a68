use crate::types::errors::Result;
use crate::types::plan::InstallSpec;

/// Executor that materializes an install spec: a package transaction for
/// `Package` (honoring `package_ensure` when pinned), a repository checkout
/// of `repo` at `version` into `path` for `Vcs`.
pub trait Installer: Send + Sync {
    fn install(&self, spec: &InstallSpec) -> Result<()>;

    /// Whether the last `install` changed anything. Drives `Notifies`
    /// edges; a no-op apply must return false so downstream resources are
    /// not re-triggered.
    fn changed(&self) -> bool;
}
