use crate::theme::Theme;
use gitf_core::view::{StatusPanel, StatusView};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, area: Rect, status: &StatusView<'_>, theme: &Theme, spinner: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Git Status ")
        .border_style(Style::default().fg(theme.border))
        .padding(Padding::horizontal(1));
    let muted = Style::default().fg(theme.muted);

    let paragraph = match status {
        StatusView::NoSelection => {
            Paragraph::new(Line::styled("No repository selected", muted))
        }
        StatusView::Idle => {
            Paragraph::new(Line::styled("Select a repository to view its status", muted))
        }
        StatusView::Loading => Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{spinner} "),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Loading git status...", muted),
        ])),
        StatusView::Error(message) => {
            let error = Style::default().fg(theme.error);
            let mut lines = vec![
                Line::styled("⚠ Error", error.add_modifier(Modifier::BOLD)),
                Line::raw(""),
            ];
            lines.extend(message.lines().map(|l| Line::styled(l.to_string(), error)));
            Paragraph::new(lines).wrap(Wrap { trim: true })
        }
        StatusView::Ready(panel) => Paragraph::new(panel_lines(panel, theme)),
    };

    f.render_widget(paragraph.block(block), area);
}

fn count_span(label: String, count: usize, active: Color, theme: &Theme) -> Span<'static> {
    let color = if count > 0 { active } else { theme.muted };
    Span::styled(label, Style::default().fg(color))
}

fn panel_lines<'a>(panel: &'a StatusPanel<'a>, theme: &Theme) -> Vec<Line<'a>> {
    let muted = Style::default().fg(theme.muted);
    let mut lines = Vec::with_capacity(panel.files.len() + 8);

    lines.push(Line::from(vec![
        Span::styled("Branch: ", muted),
        Span::styled(
            panel.branch,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Tracking: ", muted),
        match panel.tracking {
            Some(upstream) => Span::raw(upstream),
            None => Span::styled("(no upstream)", muted),
        },
    ]));
    lines.push(Line::from(vec![
        count_span(format!("↑ {}", panel.ahead), panel.ahead, theme.success, theme),
        Span::raw("  "),
        count_span(format!("↓ {}", panel.behind), panel.behind, theme.error, theme),
        Span::raw("  "),
        count_span(
            format!("≡ {} stashed", panel.stashes),
            panel.stashes,
            theme.warning,
            theme,
        ),
    ]));
    lines.push(Line::raw(""));

    if panel.summary.total() == 0 {
        lines.push(Line::styled(
            "✓ Working tree clean",
            Style::default().fg(theme.success),
        ));
    } else {
        lines.push(Line::styled(
            format!(
                "{} changed: {}",
                panel.summary.total(),
                panel.summary.describe()
            ),
            Style::default().fg(theme.warning),
        ));
    }
    lines.push(Line::raw(""));

    for file in &panel.files {
        lines.push(Line::from(vec![
            Span::styled(
                file.code.as_str(),
                Style::default().fg(theme.change_color(file.kind)),
            ),
            Span::raw("  "),
            Span::raw(file.path.as_str()),
        ]));
    }

    if let Some(hint) = &panel.scroll_hint {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            hint.as_str(),
            muted.add_modifier(Modifier::ITALIC),
        ));
    }
    lines
}
