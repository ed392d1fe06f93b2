use gitf_core::{
    config::{self, Config},
    git::{ChangeSummary, FileEntry, GitProvider, StatusRecord},
};
use serde::Serialize;
use std::{
    fmt::Write,
    path::{Path, PathBuf},
};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Clone)]
pub struct CliError {
    message: String,
    code: u8,
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 1,
        }
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 2,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> u8 {
        self.code
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(value: anyhow::Error) -> Self {
        Self::system(format!("{value:#}"))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
struct RepoOutput {
    name: String,
    path: PathBuf,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
struct StatusOutput {
    path: PathBuf,
    #[serde(flatten)]
    status: StatusRecord,
    summary: ChangeSummary,
}

pub fn cmd_list(config: &Config, git: &dyn GitProvider, json: bool) -> CliResult<()> {
    let output: Vec<RepoOutput> = git
        .discover_repos(&config.resolved_search_dirs())
        .into_iter()
        .map(|repo| RepoOutput {
            name: repo.name,
            path: repo.path,
        })
        .collect();

    if json {
        print_json(&output)?;
    } else {
        print!("{}", format_repo_table(&output));
    }
    Ok(())
}

pub fn cmd_status(git: &dyn GitProvider, path: &Path, json: bool) -> CliResult<()> {
    let path = dunce::canonicalize(path)
        .map_err(|_| CliError::user(format!("path not found: {}", path.display())))?;
    let status = git
        .status(&path)
        .map_err(|e| CliError::user(format!("{e:#}")))?;
    let output = StatusOutput {
        summary: status.summary(),
        path,
        status,
    };

    if json {
        print_json(&output)?;
    } else {
        print!("{}", format_status(&output.status));
    }
    Ok(())
}

pub fn cmd_init(config_path: &Path, force: bool) -> CliResult<()> {
    if config_path.exists() && !force {
        return Err(CliError::user(format!(
            "config already exists at {} (use --force to overwrite)",
            config_path.display()
        )));
    }
    config::save_config(&Config::default(), config_path)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn format_repo_table(repos: &[RepoOutput]) -> String {
    let name_header = "repo";
    let path_header = "path";
    let name_width = repos
        .iter()
        .map(|repo| repo.name.len())
        .max()
        .unwrap_or(name_header.len())
        .max(name_header.len());

    let mut out = String::new();
    let _ = writeln!(out, "{name_header:<name_width$}  {path_header}");
    for repo in repos {
        let _ = writeln!(out, "{:<name_width$}  {}", repo.name, repo.path.display());
    }
    out
}

fn format_status(status: &StatusRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "branch:   {}", status.branch);
    let _ = writeln!(
        out,
        "tracking: {}",
        status.tracking.as_deref().unwrap_or("(no upstream)")
    );
    let _ = writeln!(
        out,
        "ahead {}, behind {}, {} stashed",
        status.ahead, status.behind, status.stashes
    );

    let summary = status.summary();
    if summary.total() == 0 {
        let _ = writeln!(out, "working tree clean");
    } else {
        let _ = writeln!(out, "{} changed: {}", summary.total(), summary.describe());
        for FileEntry { code, path, .. } in &status.files {
            let _ = writeln!(out, "{code} {path}");
        }
    }
    out
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!(
        "{}",
        serde_json::to_string(value).map_err(|e| CliError::system(e.to_string()))?
    );
    Ok(())
}

pub fn print_error(error: &CliError, json: bool) {
    if json {
        let payload = serde_json::json!({ "error": error.message() });
        eprintln!("{payload}");
    } else {
        eprintln!("{}", error.message());
    }
}
