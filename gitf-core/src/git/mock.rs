use super::{provider::GitProvider, repo::Repo, status::StatusRecord};
use anyhow::{Result, anyhow};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Mutex,
};

/// Canned git answers for tests. Paths missing from `statuses` fail the way
/// a non-repository would.
#[derive(Default)]
pub struct MockGitProvider {
    pub repos: Vec<Repo>,
    pub statuses: HashMap<PathBuf, StatusRecord>,
    pub remote_urls: HashMap<PathBuf, String>,
    pub status_calls: Mutex<Vec<PathBuf>>,
}

impl MockGitProvider {
    pub fn status_calls(&self) -> Vec<PathBuf> {
        self.status_calls.lock().unwrap().clone()
    }
}

impl GitProvider for MockGitProvider {
    fn discover_repos(&self, _dirs: &[(PathBuf, u16)]) -> Vec<Repo> {
        self.repos.clone()
    }

    fn status(&self, repo_path: &Path) -> Result<StatusRecord> {
        self.status_calls
            .lock()
            .unwrap()
            .push(repo_path.to_path_buf());
        self.statuses
            .get(repo_path)
            .cloned()
            .ok_or_else(|| anyhow!("not a git repository: {}", repo_path.display()))
    }

    fn remote_url(&self, repo_path: &Path) -> Result<String> {
        self.remote_urls
            .get(repo_path)
            .cloned()
            .ok_or_else(|| anyhow!("no remote configured"))
    }
}
