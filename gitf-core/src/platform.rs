//! Platform-specific defaults for the external programs gitf starts.

#[cfg(all(unix, not(target_os = "macos")))]
const LINUX_FILE_MANAGERS: &[&str] = &["nautilus", "dolphin", "thunar", "nemo", "caja"];

#[cfg(all(unix, not(target_os = "macos")))]
const LINUX_TERMINALS: &[&str] = &["xdg-terminal-exec", "x-terminal-emulator"];

#[cfg(windows)]
const WINDOWS_TERMINALS: &[&str] = &["powershell", "wsl", "cmd"];

/// First candidate present on `PATH`
pub fn first_available<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|bin| which::which(bin).is_ok())
}

pub fn detect_file_manager() -> Option<String> {
    #[cfg(target_os = "macos")]
    {
        Some("open".to_string())
    }
    #[cfg(windows)]
    {
        Some("explorer".to_string())
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        first_available(LINUX_FILE_MANAGERS)
            .or_else(|| first_available(&["xdg-open"]))
            .map(str::to_string)
    }
}

pub fn detect_terminal() -> Option<String> {
    #[cfg(target_os = "macos")]
    {
        Some("open -a Terminal".to_string())
    }
    #[cfg(windows)]
    {
        first_available(WINDOWS_TERMINALS).map(str::to_string)
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        first_available(LINUX_TERMINALS).map(str::to_string)
    }
}

/// Program and leading arguments that open a URL in the default browser
pub fn browser_opener() -> Vec<String> {
    #[cfg(target_os = "macos")]
    let parts: &[&str] = &["open"];
    #[cfg(windows)]
    let parts: &[&str] = &["cmd", "/c", "start", ""];
    #[cfg(all(unix, not(target_os = "macos")))]
    let parts: &[&str] = &["xdg-open"];

    parts.iter().map(|p| (*p).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_available_skips_missing() {
        assert_eq!(
            first_available(&["gitf-definitely-not-installed", "git"]),
            Some("git")
        );
        assert_eq!(first_available(&["gitf-definitely-not-installed"]), None);
    }

    #[test]
    fn test_browser_opener_not_empty() {
        let opener = browser_opener();
        assert!(!opener.is_empty());
        assert!(!opener[0].is_empty());
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_macos_defaults() {
        assert_eq!(detect_file_manager().as_deref(), Some("open"));
        assert_eq!(detect_terminal().as_deref(), Some("open -a Terminal"));
    }
}
