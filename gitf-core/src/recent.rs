use crate::{
    constants::{APP_NAME, MAX_RECENT},
    git::Repo,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

const RECENT_FILE_NAME: &str = "recent.toml";
const RECENT_STATE_VERSION: u32 = 1;

/// Most-recently opened repositories, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentRepos {
    paths: Vec<PathBuf>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecentFile {
    version: u32,
    paths: Vec<PathBuf>,
}

pub fn state_dir() -> PathBuf {
    #[cfg(unix)]
    {
        if let Ok(xdg_state_home) = std::env::var("XDG_STATE_HOME")
            && !xdg_state_home.is_empty()
        {
            return PathBuf::from(xdg_state_home).join(APP_NAME);
        }
        dirs::home_dir()
            .expect("Unable to find home directory")
            .join(".local")
            .join("state")
            .join(APP_NAME)
    }
    #[cfg(windows)]
    {
        if let Some(local_data) = dirs::data_local_dir() {
            local_data.join(APP_NAME)
        } else {
            std::env::temp_dir().join(APP_NAME)
        }
    }
}

pub fn recent_file() -> PathBuf {
    state_dir().join(RECENT_FILE_NAME)
}

impl RecentRepos {
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Move `path` to the front, dropping the oldest entries past the limit
    pub fn add(&mut self, path: &Path) {
        self.paths.retain(|p| p != path);
        self.paths.insert(0, path.to_path_buf());
        self.paths.truncate(MAX_RECENT);
    }

    /// Recent repositories first in recency order, the rest in their
    /// existing (name) order
    pub fn reorder(&self, repos: Vec<Repo>) -> Vec<Repo> {
        let rank: HashMap<&Path, usize> = self
            .paths
            .iter()
            .enumerate()
            .map(|(i, p)| (p.as_path(), i))
            .collect();

        let (mut recent, rest): (Vec<Repo>, Vec<Repo>) = repos
            .into_iter()
            .partition(|repo| rank.contains_key(repo.path.as_path()));
        recent.sort_by_key(|repo| rank.get(repo.path.as_path()).copied());
        recent.extend(rest);
        recent
    }

    /// Missing, unreadable or outdated files load as empty history
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        let Ok(parsed) = toml::from_str::<RecentFile>(&contents) else {
            log::warn!("ignoring unreadable recent file {}", path.display());
            return Self::default();
        };
        if parsed.version != RECENT_STATE_VERSION {
            return Self::default();
        }
        let mut paths = parsed.paths;
        paths.truncate(MAX_RECENT);
        Self { paths }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let state = RecentFile {
            version: RECENT_STATE_VERSION,
            paths: self.paths.clone(),
        };
        fs::write(path, toml::to_string(&state)?)?;
        Ok(())
    }
}

pub fn load_recent() -> RecentRepos {
    RecentRepos::load_from(&recent_file())
}
