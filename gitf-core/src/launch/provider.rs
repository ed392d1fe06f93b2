use anyhow::Result;
use std::path::Path;

/// Starts external programs without waiting for them. An `Ok` only means the
/// process was spawned.
pub trait Launcher: Send + Sync {
    fn open_file_manager(&self, dir: &Path) -> Result<()>;
    fn open_terminal(&self, dir: &Path) -> Result<()>;
    fn open_url(&self, url: &str) -> Result<()>;
}
