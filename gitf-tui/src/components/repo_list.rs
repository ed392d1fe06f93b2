use super::search_bar::{self, SearchBarStyle};
use crate::theme::Theme;
use gitf_core::view::FrameView;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

pub fn draw(f: &mut Frame, area: Rect, frame: &FrameView<'_>, theme: &Theme) {
    let [search_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

    search_bar::draw(
        f,
        search_area,
        &SearchBarStyle {
            title: "gitf",
            placeholder: "Type to filter repositories...",
            border_color: theme.accent,
            muted_color: theme.muted,
        },
        frame.query,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Repositories ")
        .title_bottom(Line::from(format!(" {} ", frame.list.pagination)).right_aligned())
        .border_style(Style::default().fg(theme.border))
        .padding(Padding::horizontal(1));

    if frame.list.rows.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No matching repositories",
            Style::default().fg(theme.muted),
        ))
        .block(block);
        f.render_widget(empty, list_area);
        return;
    }

    // The projector already sliced the visible window
    let items: Vec<ListItem> = frame
        .list
        .rows
        .iter()
        .map(|row| {
            let separator = if row.location.is_empty() { "" } else { " " };
            if row.highlighted {
                let style = Style::default()
                    .fg(theme.highlight_fg)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD);
                ListItem::new(Line::from(vec![
                    Span::raw("▶ "),
                    Span::raw(row.name.as_ref()),
                    Span::raw(separator),
                    Span::raw(row.location.as_str()),
                ]))
                .style(style)
            } else {
                ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::raw(row.name.as_ref()),
                    Span::raw(separator),
                    Span::styled(row.location.as_str(), Style::default().fg(theme.muted)),
                ]))
            }
        })
        .collect();

    f.render_widget(List::new(items).block(block), list_area);
}
