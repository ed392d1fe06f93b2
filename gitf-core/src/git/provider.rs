use super::{repo::Repo, status::StatusRecord};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Everything gitf asks of git. Implementations must be callable from
/// several background threads at once.
pub trait GitProvider: Send + Sync {
    /// Walk `(dir, depth)` pairs and return the repositories found,
    /// deduplicated by path and sorted by name
    fn discover_repos(&self, dirs: &[(PathBuf, u16)]) -> Vec<Repo>;
    fn status(&self, repo_path: &Path) -> Result<StatusRecord>;
    /// URL of the `origin` remote
    fn remote_url(&self, repo_path: &Path) -> Result<String>;
}
