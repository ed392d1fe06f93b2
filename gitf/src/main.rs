mod cli;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gitf_core::{
    config::{self, Config},
    git::{CliGitProvider, GitProvider},
    launch::{CliLauncher, Launcher, open_in_editor},
    recent::{self, RecentRepos},
    setup::SetupState,
    state::AppState,
};
use gitf_tui::{OpenAction, Theme};
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

#[derive(Parser)]
#[command(version, about = "Fuzzy-find a git repository, check its status, open it")]
struct Cli {
    /// Override path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level written to the log file (error, warn, info, debug, trace)
    #[arg(long, default_value = logging::DEFAULT_LOG_LEVEL)]
    log_level: log::LevelFilter,

    /// Run the configuration wizard, then exit
    #[arg(short, long)]
    setup: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List discovered repositories
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show git status for a repository
    Status {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Write the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_errors = command_wants_json(cli.command.as_ref());

    if let Err(error) = logging::setup_logging(cli.log_level) {
        // Logging is best effort; the tool still works without it
        eprintln!("warning: could not set up logging: {error:#}");
    }

    let config_path = cli.config.clone().unwrap_or_else(config::config_file);
    let explicit_config = cli.config.is_some();
    log::debug!("config path {}", config_path.display());
    let git: Arc<dyn GitProvider> = Arc::new(CliGitProvider);

    let result = match cli.command {
        Some(_) if cli.setup => Err(cli::CliError::user(
            "--setup cannot be combined with a subcommand",
        )),
        Some(Commands::Init { force }) => cli::cmd_init(&config_path, force),
        Some(Commands::Status { path, json }) => cli::cmd_status(git.as_ref(), &path, json),
        Some(Commands::List { json }) => load_existing(&config_path, explicit_config)
            .map_err(cli::CliError::from)
            .and_then(|config| cli::cmd_list(&config.unwrap_or_default(), git.as_ref(), json)),
        None if cli.setup => rerun_setup(&config_path),
        None => first_run_config(&config_path, explicit_config)
            .and_then(|config| run_tui(&config, &git)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{}", error.message());
            cli::print_error(&error, json_errors);
            ExitCode::from(error.code())
        }
    }
}

/// An explicit `--config` must exist. At the default location a missing
/// file is `None`, so callers pick between built-in settings and setup.
fn load_existing(path: &Path, explicit: bool) -> Result<Option<Config>> {
    if explicit || path.exists() {
        return config::load_config(Some(path)).map(Some);
    }
    Ok(None)
}

fn first_run_config(path: &Path, explicit: bool) -> cli::CliResult<Config> {
    if let Some(config) = load_existing(path, explicit)? {
        return Ok(config);
    }
    log::info!("no config at {}, starting setup", path.display());
    run_setup(Config::default(), path)?
        .ok_or_else(|| cli::CliError::user("setup cancelled, no config written"))
}

/// Start from the current file when there is one, so unchanged answers are kept
fn rerun_setup(path: &Path) -> cli::CliResult<()> {
    let base = load_existing(path, false)?.unwrap_or_default();
    match run_setup(base, path)? {
        Some(_) => {
            println!("Configuration saved to {}", path.display());
            Ok(())
        }
        None => Err(cli::CliError::user("setup cancelled, config unchanged")),
    }
}

/// Run the wizard in the alternate screen and save what it produces
fn run_setup(base: Config, path: &Path) -> cli::CliResult<Option<Config>> {
    let theme = Theme::from_config(&base.theme);
    let mut terminal = ratatui::init();
    let result = gitf_tui::run_setup(&mut terminal, SetupState::new(base), &theme);
    ratatui::restore();

    let Some(config) = result? else {
        return Ok(None);
    };
    config::save_config(&config, path)?;
    log::info!(
        "saved config to {} ({} search dirs, editor {})",
        path.display(),
        config.search_dirs.len(),
        config.editor
    );
    Ok(Some(config))
}

fn run_tui(config: &Config, git: &Arc<dyn GitProvider>) -> cli::CliResult<()> {
    let repos = git.discover_repos(&config.resolved_search_dirs());
    if repos.is_empty() {
        return Err(cli::CliError::user("no repositories found in search paths"));
    }
    log::info!(
        "discovered {} repositories, status debounce {} ms",
        repos.len(),
        config.status.debounce_ms
    );

    let mut history = recent::load_recent();
    let mut state = AppState::new(history.reorder(repos));
    let launcher: Arc<dyn Launcher> = Arc::new(CliLauncher::from_config(config));
    let theme = Theme::from_config(&config.theme);
    let home = dirs::home_dir();

    let mut terminal = ratatui::init();
    let result = gitf_tui::run(
        &mut terminal,
        &mut state,
        git,
        &launcher,
        &theme,
        config.status.debounce(),
        home.as_deref(),
    );
    ratatui::restore();

    match result? {
        OpenAction::Open(repo) => {
            log::info!("opening {} with {}", repo.path.display(), config.editor);
            open_and_record(&config.editor, &repo.path, &mut history, &recent::recent_file())?;
        }
        OpenAction::Quit => log::info!("quit without selection"),
    }
    Ok(())
}

/// A repository only moves up the recent list once the editor exits cleanly
fn open_and_record(
    editor: &str,
    repo: &Path,
    history: &mut RecentRepos,
    history_file: &Path,
) -> Result<()> {
    open_in_editor(editor, repo)?;
    history.add(repo);
    if let Err(e) = history.save_to(history_file) {
        log::warn!("could not save recent repositories: {e:#}");
    }
    Ok(())
}

fn command_wants_json(command: Option<&Commands>) -> bool {
    match command {
        Some(Commands::List { json } | Commands::Status { json, .. }) => *json,
        Some(Commands::Init { .. }) | None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_existing_rejects_missing_explicit_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing.toml");
        let err = load_existing(&path, true).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn load_existing_reports_missing_default_without_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("gitf").join("config.toml");

        assert!(load_existing(&path, false).unwrap().is_none());
        assert!(!path.exists());

        config::save_config(&Config::default(), &path).unwrap();
        assert!(load_existing(&path, false).unwrap().is_some());
    }

    #[cfg(unix)]
    #[test]
    fn failed_editor_leaves_recent_history_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let history_file = tmp.path().join("recent.toml");
        let mut history = RecentRepos::default();

        assert!(open_and_record("false", tmp.path(), &mut history, &history_file).is_err());
        assert!(history.paths().is_empty());
        assert!(!history_file.exists());

        open_and_record("true", tmp.path(), &mut history, &history_file).unwrap();
        assert_eq!(history.paths(), [tmp.path().to_path_buf()]);
        assert_eq!(RecentRepos::load_from(&history_file), history);
    }

    #[test]
    fn json_flag_controls_error_format() {
        assert!(command_wants_json(Some(&Commands::List { json: true })));
        assert!(!command_wants_json(Some(&Commands::Status {
            path: PathBuf::from("."),
            json: false,
        })));
        assert!(!command_wants_json(Some(&Commands::Init { force: true })));
        assert!(!command_wants_json(None));
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["gitf", "--log-level", "debug", "status", "/tmp", "--json"])
            .unwrap();
        assert_eq!(cli.log_level, log::LevelFilter::Debug);
        assert!(matches!(
            cli.command,
            Some(Commands::Status { json: true, .. })
        ));
        assert!(!cli.setup);
    }

    #[test]
    fn cli_parses_setup_flag() {
        let cli = Cli::try_parse_from(["gitf", "-s"]).unwrap();
        assert!(cli.setup);
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["gitf", "--setup", "--config", "/tmp/gitf.toml"]).unwrap();
        assert!(cli.setup);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/gitf.toml")));
    }
}
