use crate::git::StatusRecord;
use std::path::PathBuf;

/// Events that arrive asynchronously from background threads.
/// These get merged into the main event loop alongside keyboard input.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The debounce delay started for `path` has elapsed
    StatusDebounceElapsed { path: PathBuf },

    /// A status fetch finished. Errors are already formatted for display.
    StatusLoaded {
        path: PathBuf,
        result: Result<StatusRecord, String>,
    },
}
