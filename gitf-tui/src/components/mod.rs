use ratatui::layout::{Constraint, Layout, Rect};

pub mod footer;
pub mod repo_list;
pub mod search_bar;
pub mod setup;
pub mod status_panel;

/// Center a rect of the given percentages inside `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Percentage(percent_y.min(100)),
        Constraint::Fill(1),
    ])
    .areas(r);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Percentage(percent_x.min(100)),
        Constraint::Fill(1),
    ])
    .areas(middle);
    center
}
