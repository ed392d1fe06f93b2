//! First-run wizard: pick an editor, then the directories to scan.
//!
//! The wizard edits a copy of a base [`Config`], so running it again with
//! `--setup` keeps the theme, launcher commands and per-directory depths of
//! the existing file.

use crate::{
    action::SetupAction,
    config::{Config, SearchDirEntry},
};

pub const SETUP_STEPS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    Editor,
    SearchPaths,
}

impl SetupStep {
    /// 1-based position shown as "Step N of 2"
    pub fn number(self) -> usize {
        match self {
            Self::Editor => 1,
            Self::SearchPaths => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SetupOutcome {
    Continue,
    Cancelled,
    Finished(Config),
}

#[derive(Debug, Clone)]
pub struct SetupState {
    pub step: SetupStep,
    pub editor: String,
    /// Comma-separated, as typed
    pub search_paths: String,
    /// Validation message, cleared by the next edit
    pub error: Option<String>,
    base: Config,
}

impl SetupState {
    pub fn new(base: Config) -> Self {
        let search_paths = base
            .search_dirs
            .iter()
            .map(SearchDirEntry::path)
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            step: SetupStep::Editor,
            editor: base.editor.clone(),
            search_paths,
            error: None,
            base,
        }
    }

    /// Text of the field the current step edits
    pub fn input(&self) -> &str {
        match self.step {
            SetupStep::Editor => &self.editor,
            SetupStep::SearchPaths => &self.search_paths,
        }
    }

    fn input_mut(&mut self) -> &mut String {
        match self.step {
            SetupStep::Editor => &mut self.editor,
            SetupStep::SearchPaths => &mut self.search_paths,
        }
    }

    pub fn apply(&mut self, action: SetupAction) -> SetupOutcome {
        match action {
            SetupAction::Cancel => return SetupOutcome::Cancelled,
            SetupAction::Submit => return self.submit(),
            SetupAction::Back => {
                if self.step == SetupStep::SearchPaths {
                    self.step = SetupStep::Editor;
                }
            }
            SetupAction::Push(c) => self.input_mut().push(c),
            SetupAction::Pop => {
                self.input_mut().pop();
            }
            SetupAction::ClearInput => self.input_mut().clear(),
        }
        self.error = None;
        SetupOutcome::Continue
    }

    fn submit(&mut self) -> SetupOutcome {
        match self.step {
            SetupStep::Editor => {
                if self.editor.trim().is_empty() {
                    self.error = Some("editor cannot be empty".to_string());
                } else {
                    self.step = SetupStep::SearchPaths;
                    self.error = None;
                }
                SetupOutcome::Continue
            }
            SetupStep::SearchPaths => {
                let paths = parse_search_paths(&self.search_paths);
                if paths.is_empty() {
                    self.error = Some("add at least one search path".to_string());
                    return SetupOutcome::Continue;
                }
                let search_dirs = paths
                    .into_iter()
                    .map(|path| {
                        self.base
                            .search_dirs
                            .iter()
                            .find(|entry| entry.path() == path)
                            .cloned()
                            .unwrap_or_else(|| SearchDirEntry::Simple(path.to_string()))
                    })
                    .collect();
                SetupOutcome::Finished(Config {
                    editor: self.editor.trim().to_string(),
                    search_dirs,
                    ..self.base.clone()
                })
            }
        }
    }
}

/// Split a comma-separated list, dropping blanks and repeats
pub fn parse_search_paths(input: &str) -> Vec<&str> {
    let mut paths = Vec::new();
    for path in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_str;

    fn base() -> Config {
        load_config_from_str(
            r#"
editor = "hx"
search_dirs = ["~/dev", { path = "~/work", depth = 1 }]
terminal = "kitty"
"#,
        )
        .unwrap()
    }

    fn type_text(state: &mut SetupState, text: &str) {
        for c in text.chars() {
            let _ = state.apply(SetupAction::Push(c));
        }
    }

    fn finish(state: &mut SetupState) -> Config {
        match state.apply(SetupAction::Submit) {
            SetupOutcome::Finished(config) => config,
            other => panic!("expected finished setup, got {other:?}"),
        }
    }

    #[test]
    fn test_new_prefills_from_base() {
        let state = SetupState::new(base());
        assert_eq!(state.step, SetupStep::Editor);
        assert_eq!(state.input(), "hx");
        assert_eq!(state.search_paths, "~/dev, ~/work");
        assert!(state.error.is_none());
    }

    #[test]
    fn test_editor_step_advances_to_search_paths() {
        let mut state = SetupState::new(base());
        assert!(matches!(
            state.apply(SetupAction::Submit),
            SetupOutcome::Continue
        ));
        assert_eq!(state.step, SetupStep::SearchPaths);
        assert_eq!(state.step.number(), SETUP_STEPS);
        assert_eq!(state.input(), "~/dev, ~/work");
    }

    #[test]
    fn test_empty_editor_stays_on_step_with_error() {
        let mut state = SetupState::new(base());
        let _ = state.apply(SetupAction::ClearInput);
        type_text(&mut state, "   ");
        let _ = state.apply(SetupAction::Submit);
        assert_eq!(state.step, SetupStep::Editor);
        assert_eq!(state.error.as_deref(), Some("editor cannot be empty"));

        let _ = state.apply(SetupAction::Pop);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_back_returns_to_editor_keeping_input() {
        let mut state = SetupState::new(base());
        let _ = state.apply(SetupAction::Push('x'));
        let _ = state.apply(SetupAction::Submit);
        let _ = state.apply(SetupAction::Pop);
        let _ = state.apply(SetupAction::Back);
        assert_eq!(state.step, SetupStep::Editor);
        assert_eq!(state.editor, "hxx");
        assert_eq!(state.search_paths, "~/dev, ~/wor");

        // Already on the first step
        let _ = state.apply(SetupAction::Back);
        assert_eq!(state.step, SetupStep::Editor);
    }

    #[test]
    fn test_empty_search_paths_rejected() {
        let mut state = SetupState::new(base());
        let _ = state.apply(SetupAction::Submit);
        let _ = state.apply(SetupAction::ClearInput);
        type_text(&mut state, " , ");
        assert!(matches!(
            state.apply(SetupAction::Submit),
            SetupOutcome::Continue
        ));
        assert_eq!(state.step, SetupStep::SearchPaths);
        assert_eq!(state.error.as_deref(), Some("add at least one search path"));
    }

    #[test]
    fn test_finish_keeps_depth_and_other_settings() {
        let mut state = SetupState::new(base());
        let _ = state.apply(SetupAction::ClearInput);
        type_text(&mut state, "code -n ");
        let _ = state.apply(SetupAction::Submit);
        type_text(&mut state, ", ~/oss");

        let config = finish(&mut state);
        assert_eq!(config.editor, "code -n");
        let paths: Vec<&str> = config.search_dirs.iter().map(SearchDirEntry::path).collect();
        assert_eq!(paths, vec!["~/dev", "~/work", "~/oss"]);
        assert!(matches!(
            &config.search_dirs[1],
            SearchDirEntry::Rich { depth: Some(1), .. }
        ));
        assert!(matches!(&config.search_dirs[2], SearchDirEntry::Simple(_)));
        assert_eq!(config.terminal.as_deref(), Some("kitty"));
    }

    #[test]
    fn test_cancel_from_any_step() {
        let mut state = SetupState::new(base());
        assert!(matches!(
            state.apply(SetupAction::Cancel),
            SetupOutcome::Cancelled
        ));
        let _ = state.apply(SetupAction::Submit);
        assert!(matches!(
            state.apply(SetupAction::Cancel),
            SetupOutcome::Cancelled
        ));
    }

    #[test]
    fn test_parse_search_paths_trims_and_dedupes() {
        assert_eq!(
            parse_search_paths(" ~/dev ,, ~/work,~/dev, "),
            vec!["~/dev", "~/work"]
        );
        assert!(parse_search_paths("").is_empty());
    }
}
