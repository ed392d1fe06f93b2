mod setup;
mod spawn;

use crate::{SkimRanker, components, keymap, theme::Theme};
use crossterm::event::{self, Event, KeyEventKind};
use gitf_core::{
    action::Action,
    event::AppEvent,
    filter::Ranker,
    git::{GitProvider, Repo},
    launch::Launcher,
    state::{AppState, StatusRequest},
    view::{self, FOOTER_ROWS, Viewport},
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use spawn::{
    spawn_file_manager, spawn_open_remote, spawn_status_debounce, spawn_status_fetch,
    spawn_terminal,
};
use std::{
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
    time::{Duration, Instant},
};

pub use setup::run_setup;

/// What to do after the TUI exits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenAction {
    Open(Repo),
    Quit,
}

/// Handle for dispatching background work
#[derive(Clone)]
pub struct EventSender {
    tx: mpsc::Sender<AppEvent>,
    cancel: Arc<AtomicBool>,
    debounce: Duration,
}

impl EventSender {
    /// Send an event from a background thread to the main loop
    pub fn send(&self, event: AppEvent) {
        let _ = self.tx.send(event);
    }
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const POLL_INTERVAL: Duration = Duration::from_millis(80);

pub fn run(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    git: &Arc<dyn GitProvider>,
    launcher: &Arc<dyn Launcher>,
    theme: &Theme,
    debounce: Duration,
    home: Option<&Path>,
) -> anyhow::Result<OpenAction> {
    let ranker = SkimRanker::default();
    let (tx, rx) = mpsc::channel::<AppEvent>();
    let cancel = Arc::new(AtomicBool::new(false));
    let event_sender = EventSender {
        tx,
        cancel: Arc::clone(&cancel),
        debounce,
    };
    let spinner_start = Instant::now();

    if let Some(request) = state.initial_status_request() {
        dispatch_status_request(request, git, &event_sender);
    }

    let outcome = loop {
        terminal.draw(|f| draw(f, state, theme, home, &spinner_start))?;

        // Check background channel (non-blocking)
        if let Ok(app_event) = rx.try_recv() {
            process_app_event(app_event, state, git, &event_sender);
            continue;
        }

        // Poll with a timeout so the spinner animates and the channel is checked
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = keymap::resolve_action(key)
                    && let Some(result) =
                        process_action(action, state, git, launcher, &ranker, &event_sender)
                {
                    break result;
                }
            }
            Event::Resize(width, height) => state.resize(width, height),
            _ => {}
        }
    };

    // Background threads check this before reporting back
    cancel.store(true, Ordering::Relaxed);
    Ok(outcome)
}

fn draw(
    f: &mut Frame,
    state: &mut AppState,
    theme: &Theme,
    home: Option<&Path>,
    spinner_start: &Instant,
) {
    let area = f.area();
    let viewport = Viewport {
        width: area.width,
        height: area.height,
    };
    if state.viewport != viewport {
        state.resize(area.width, area.height);
    }

    let frame = view::project(state, area.width, area.height, home);
    let [main_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(FOOTER_ROWS)]).areas(area);
    let [list_area, status_area] = Layout::horizontal([
        Constraint::Length(frame.layout.list_outer_width),
        Constraint::Min(0),
    ])
    .areas(main_area);

    let elapsed = usize::try_from(spinner_start.elapsed().as_millis()).unwrap_or(0);
    let spinner = SPINNER_FRAMES[(elapsed / 80) % SPINNER_FRAMES.len()];

    components::repo_list::draw(f, list_area, &frame, theme);
    components::status_panel::draw(f, status_area, &frame.status, theme, spinner);
    components::footer::draw(f, footer_area, frame.footer, theme);
}

fn dispatch_status_request(
    request: StatusRequest,
    git: &Arc<dyn GitProvider>,
    sender: &EventSender,
) {
    match request {
        StatusRequest::Debounce(path) => spawn_status_debounce(sender, path),
        StatusRequest::FetchNow(path) => spawn_status_fetch(git, sender, path),
    }
}

fn process_app_event(
    event: AppEvent,
    state: &mut AppState,
    git: &Arc<dyn GitProvider>,
    sender: &EventSender,
) {
    match event {
        AppEvent::StatusDebounceElapsed { path } => {
            if let Some(request) = state.debounce_elapsed(&path) {
                dispatch_status_request(request, git, sender);
            }
        }
        AppEvent::StatusLoaded { path, result } => {
            state.status_loaded(&path, result);
        }
    }
}

/// Launch an external program for the highlighted repository, if any
fn handle_launch(
    action: &Action,
    state: &AppState,
    git: &Arc<dyn GitProvider>,
    launcher: &Arc<dyn Launcher>,
) {
    let Some(repo) = state.selected_repo() else {
        return;
    };
    let path = repo.path.clone();
    match action {
        Action::OpenFileManager => spawn_file_manager(launcher, path),
        Action::OpenTerminal => spawn_terminal(launcher, path),
        Action::OpenInBrowser => spawn_open_remote(git, launcher, path),
        _ => {}
    }
}

fn process_action(
    action: Action,
    state: &mut AppState,
    git: &Arc<dyn GitProvider>,
    launcher: &Arc<dyn Launcher>,
    ranker: &dyn Ranker,
    sender: &EventSender,
) -> Option<OpenAction> {
    let request = match action {
        Action::Quit => return Some(OpenAction::Quit),
        Action::OpenRepo => return state.selected_repo().cloned().map(OpenAction::Open),
        Action::MoveSelection(delta) => state.move_selection(delta),
        Action::ScrollStatus(delta) => {
            state.scroll_status(delta);
            None
        }
        Action::SearchPush(c) => state.push_search(c, ranker),
        Action::SearchPop => state.pop_search(ranker),
        Action::RefreshStatus => state.refresh_status(),
        Action::OpenFileManager | Action::OpenTerminal | Action::OpenInBrowser => {
            handle_launch(&action, state, git, launcher);
            None
        }
    };

    if let Some(request) = request {
        dispatch_status_request(request, git, sender);
    }
    None
}
