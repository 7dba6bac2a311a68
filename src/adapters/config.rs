use crate::types::errors::Result;
use crate::types::plan::ConfigFileSpec;

/// Executor that durably persists merged settings as an ini-style file,
/// creating the file and any parent directory when absent. Rendering comes
/// from `SettingsSet::to_ini` so every writer agrees on the line format.
pub trait ConfigWriter: Send + Sync {
    fn write(&self, spec: &ConfigFileSpec) -> Result<()>;
}
