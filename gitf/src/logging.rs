use gitf_core::constants::APP_NAME;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// `$XDG_CACHE_HOME/gitf`, else `~/.cache/gitf`. Windows uses the platform
/// cache dir. Falls back to the temp dir when no home is known.
fn log_dir_from(xdg_cache_home: Option<&str>, home: Option<&Path>) -> PathBuf {
    if cfg!(unix)
        && let Some(xdg) = xdg_cache_home.filter(|dir| !dir.is_empty())
    {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    let base = if cfg!(windows) {
        dirs::cache_dir()
    } else {
        home.map(|h| h.join(".cache"))
    };
    base.unwrap_or_else(std::env::temp_dir).join(APP_NAME)
}

pub fn log_file() -> PathBuf {
    let xdg = std::env::var("XDG_CACHE_HOME").ok();
    log_dir_from(xdg.as_deref(), dirs::home_dir().as_deref()).join(format!("{APP_NAME}.log"))
}

/// Send `log` records to a rotating file; the terminal belongs to the UI.
/// Returns the file the records go to.
pub fn setup_logging(level: log::LevelFilter) -> anyhow::Result<PathBuf> {
    let path = log_file();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    // Rotate at 10 MB, keep 5 old files
    simple_log::file(path.to_string_lossy().into_owned(), level, 10, 5)
        .map_err(|e| anyhow::anyhow!("cannot log to {}: {e}", path.display()))?;
    log::info!(
        "{APP_NAME} {} logging to {} at {level}",
        env!("CARGO_PKG_VERSION"),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn log_dir_prefers_xdg_cache_home() {
        let dir = log_dir_from(Some("/tmp/xdg-cache"), Some(Path::new("/home/me")));
        assert_eq!(dir, PathBuf::from("/tmp/xdg-cache/gitf"));
    }

    #[cfg(unix)]
    #[test]
    fn empty_xdg_cache_home_uses_home_cache() {
        let dir = log_dir_from(Some(""), Some(Path::new("/home/me")));
        assert_eq!(dir, PathBuf::from("/home/me/.cache/gitf"));
        assert_eq!(
            log_dir_from(None, Some(Path::new("/home/me"))),
            PathBuf::from("/home/me/.cache/gitf")
        );
    }

    #[cfg(unix)]
    #[test]
    fn missing_home_falls_back_to_temp_dir() {
        assert_eq!(
            log_dir_from(None, None),
            std::env::temp_dir().join(APP_NAME)
        );
    }

    #[test]
    fn log_file_is_named_after_the_app() {
        let path = log_file();
        assert_eq!(path.file_name().unwrap(), "gitf.log");
        assert!(path.parent().unwrap().ends_with(APP_NAME));
    }
}
