use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gitf_core::action::{Action, SetupAction};

/// Resolve a key event into an Action. Unbound keys resolve to `None`.
pub fn resolve_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('o') => Some(Action::OpenFileManager),
            KeyCode::Char('t') => Some(Action::OpenTerminal),
            KeyCode::Char('b') => Some(Action::OpenInBrowser),
            KeyCode::Char('g') => Some(Action::RefreshStatus),
            _ => None,
        };
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::OpenRepo),
        KeyCode::Up if shift => Some(Action::ScrollStatus(-1)),
        KeyCode::Down if shift => Some(Action::ScrollStatus(1)),
        KeyCode::Up | KeyCode::BackTab => Some(Action::MoveSelection(-1)),
        KeyCode::Down | KeyCode::Tab => Some(Action::MoveSelection(1)),
        KeyCode::Backspace => Some(Action::SearchPop),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Action::SearchPush(c))
        }
        _ => None,
    }
}

/// Keys for the setup wizard, where every printable character is text
pub fn resolve_setup_action(key: KeyEvent) -> Option<SetupAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(SetupAction::Cancel),
            KeyCode::Char('u') => Some(SetupAction::ClearInput),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(SetupAction::Cancel),
        KeyCode::Enter => Some(SetupAction::Submit),
        KeyCode::BackTab => Some(SetupAction::Back),
        KeyCode::Backspace => Some(SetupAction::Pop),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(SetupAction::Push(c))
        }
        _ => None,
    }
}
