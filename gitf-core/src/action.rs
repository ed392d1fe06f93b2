/// Every user interaction produces an Action. The UI never calls git or
/// spawns programs directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave without choosing a repository
    Quit,
    /// Leave with the highlighted repository
    OpenRepo,
    MoveSelection(i32),
    ScrollStatus(i32),
    SearchPush(char),
    SearchPop,
    RefreshStatus,
    OpenFileManager,
    OpenTerminal,
    OpenInBrowser,
}

/// Keys in the first-run setup wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupAction {
    Cancel,
    /// Confirm the current step
    Submit,
    Back,
    Push(char),
    Pop,
    ClearInput,
}
