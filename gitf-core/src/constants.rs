pub const APP_NAME: &str = "gitf";
pub const GIT_DIR_ENTRY: &str = ".git";

/// Directory names the scanner never descends into
pub const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    "vendor",
    ".git",
    ".idea",
    ".config",
    ".cache",
    ".vscode",
    "venv",
    "venv3",
    ".venv",
    ".venv3",
    "target",
];

pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
pub const MAX_RECENT: usize = 10;
