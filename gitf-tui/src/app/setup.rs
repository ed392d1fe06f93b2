use super::POLL_INTERVAL;
use crate::{components, keymap, theme::Theme};
use crossterm::event::{self, Event, KeyEventKind};
use gitf_core::{
    config::Config,
    setup::{SetupOutcome, SetupState},
};
use ratatui::DefaultTerminal;

/// Run the setup wizard until it finishes (`Some`) or is cancelled (`None`).
/// Writing the result to disk is left to the caller.
pub fn run_setup(
    terminal: &mut DefaultTerminal,
    mut state: SetupState,
    theme: &Theme,
) -> anyhow::Result<Option<Config>> {
    loop {
        terminal.draw(|f| components::setup::draw(f, &state, theme))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = keymap::resolve_setup_action(key)
        {
            match state.apply(action) {
                SetupOutcome::Continue => {}
                SetupOutcome::Cancelled => {
                    log::info!("setup cancelled");
                    return Ok(None);
                }
                SetupOutcome::Finished(config) => return Ok(Some(config)),
            }
        }
    }
}
