use crate::theme::Theme;
use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

pub fn draw(f: &mut Frame, area: Rect, hint: &str, theme: &Theme) {
    f.render_widget(
        Paragraph::new(hint).style(Style::default().fg(theme.muted)),
        area,
    );
}
