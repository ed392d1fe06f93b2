use super::provider::Launcher;
use anyhow::{Result, bail};
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchCall {
    FileManager(PathBuf),
    Terminal(PathBuf),
    Url(String),
}

#[derive(Default)]
pub struct MockLauncher {
    pub calls: Mutex<Vec<LaunchCall>>,
    pub fail: bool,
}

impl MockLauncher {
    pub fn calls(&self) -> Vec<LaunchCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: LaunchCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            bail!("launch failed");
        }
        Ok(())
    }
}

impl Launcher for MockLauncher {
    fn open_file_manager(&self, dir: &Path) -> Result<()> {
        self.record(LaunchCall::FileManager(dir.to_path_buf()))
    }

    fn open_terminal(&self, dir: &Path) -> Result<()> {
        self.record(LaunchCall::Terminal(dir.to_path_buf()))
    }

    fn open_url(&self, url: &str) -> Result<()> {
        self.record(LaunchCall::Url(url.to_string()))
    }
}
