use super::{
    centered_rect,
    search_bar::{self, SearchBarStyle},
};
use crate::theme::Theme;
use gitf_core::{
    paths::expand_tilde,
    setup::{SETUP_STEPS, SetupState, SetupStep, parse_search_paths},
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
};

fn hint_line<'a>(pairs: &[(&'a str, &'a str)], theme: &Theme) -> Line<'a> {
    let key_style = Style::default().fg(theme.hint).add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    for (key, label) in pairs {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(format!(" {label}  ")));
    }
    Line::from(spans)
}

fn path_item<'a>(path: &'a str, theme: &Theme) -> ListItem<'a> {
    if expand_tilde(path).is_some_and(|p| p.is_dir()) {
        ListItem::new(Line::styled(
            format!("  ✓ {path}"),
            Style::default().fg(theme.success),
        ))
    } else {
        ListItem::new(Line::styled(
            format!("  ⚠ {path} (doesn't exist yet)"),
            Style::default().fg(theme.warning),
        ))
    }
}

pub fn draw(f: &mut Frame, state: &SetupState, theme: &Theme) {
    let area = centered_rect(80, 70, f.area());
    f.render_widget(Clear, area);

    let (title, question, placeholder) = match state.step {
        SetupStep::Editor => (
            "Editor",
            "Which command should open a repository?",
            "e.g. nvim, code, zed",
        ),
        SetupStep::SearchPaths => (
            "Search paths",
            "Which directories should be scanned? Separate them with commas.",
            "e.g. ~/dev, ~/projects",
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " gitf setup: step {} of {SETUP_STEPS} ",
            state.step.number()
        ))
        .border_style(Style::default().fg(theme.accent))
        .padding(Padding::uniform(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [question_area, input_area, error_area, preview_area, hints_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(question).style(Style::default().fg(theme.muted)),
        question_area,
    );

    search_bar::draw(
        f,
        input_area,
        &SearchBarStyle {
            title,
            placeholder,
            border_color: theme.accent,
            muted_color: theme.muted,
        },
        state.input(),
    );

    if let Some(error) = &state.error {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("⚠ {error}"),
                Style::default().fg(theme.error),
            )),
            error_area,
        );
    }

    if state.step == SetupStep::SearchPaths {
        let items: Vec<ListItem> = parse_search_paths(&state.search_paths)
            .into_iter()
            .map(|path| path_item(path, theme))
            .collect();
        f.render_widget(List::new(items), preview_area);
    }

    let hints = match state.step {
        SetupStep::Editor => hint_line(
            &[("[Enter]", "next"), ("[Ctrl+U]", "clear"), ("[Esc]", "cancel")],
            theme,
        ),
        SetupStep::SearchPaths => hint_line(
            &[
                ("[Enter]", "save"),
                ("[Shift+Tab]", "back"),
                ("[Ctrl+U]", "clear"),
                ("[Esc]", "cancel"),
            ],
            theme,
        ),
    };
    f.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        hints_area,
    );
}
