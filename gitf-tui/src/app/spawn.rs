use super::EventSender;
use gitf_core::{
    event::AppEvent,
    git::{GitProvider, to_browsable},
    launch::Launcher,
};
use std::{
    path::PathBuf,
    sync::{Arc, atomic::Ordering},
    thread,
};

/// Sleep for the debounce delay, then report back. The state machine decides
/// whether the path is still worth fetching.
pub(super) fn spawn_status_debounce(sender: &EventSender, path: PathBuf) {
    let sender = sender.clone();
    thread::spawn(move || {
        thread::sleep(sender.debounce);
        if sender.cancel.load(Ordering::Relaxed) {
            return;
        }
        sender.send(AppEvent::StatusDebounceElapsed { path });
    });
}

pub(super) fn spawn_status_fetch(git: &Arc<dyn GitProvider>, sender: &EventSender, path: PathBuf) {
    let git = Arc::clone(git);
    let sender = sender.clone();
    thread::spawn(move || {
        if sender.cancel.load(Ordering::Relaxed) {
            return;
        }
        let result = git.status(&path).map_err(|e| format!("{e:#}"));
        if let Err(e) = &result {
            log::debug!("status for {} failed: {e}", path.display());
        }
        sender.send(AppEvent::StatusLoaded { path, result });
    });
}

pub(super) fn spawn_file_manager(launcher: &Arc<dyn Launcher>, path: PathBuf) {
    let launcher = Arc::clone(launcher);
    thread::spawn(move || {
        if let Err(e) = launcher.open_file_manager(&path) {
            log::warn!("could not open file manager for {}: {e:#}", path.display());
        }
    });
}

pub(super) fn spawn_terminal(launcher: &Arc<dyn Launcher>, path: PathBuf) {
    let launcher = Arc::clone(launcher);
    thread::spawn(move || {
        if let Err(e) = launcher.open_terminal(&path) {
            log::warn!("could not open terminal in {}: {e:#}", path.display());
        }
    });
}

pub(super) fn spawn_open_remote(
    git: &Arc<dyn GitProvider>,
    launcher: &Arc<dyn Launcher>,
    path: PathBuf,
) {
    let git = Arc::clone(git);
    let launcher = Arc::clone(launcher);
    thread::spawn(move || {
        let opened = git
            .remote_url(&path)
            .and_then(|url| to_browsable(&url))
            .and_then(|url| launcher.open_url(&url));
        if let Err(e) = opened {
            log::warn!("could not open remote for {}: {e:#}", path.display());
        }
    });
}
