use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub struct SearchBarStyle<'a> {
    pub title: &'a str,
    pub placeholder: &'a str,
    pub border_color: Color,
    pub muted_color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct VisibleTail {
    start: usize,
    cursor_col: u16,
}

/// Typing only ever appends, so the cursor sits at the end of the query.
/// Keep as many trailing graphemes as fit while leaving one column for it.
fn visible_tail(text: &str, max_width: u16) -> VisibleTail {
    if max_width == 0 || text.is_empty() {
        return VisibleTail {
            start: text.len(),
            cursor_col: 0,
        };
    }

    let budget = usize::from(max_width).saturating_sub(1);
    let mut start = text.len();
    let mut used = 0;
    for (idx, grapheme) in text.grapheme_indices(true).rev() {
        let width = grapheme.width();
        if used + width > budget {
            break;
        }
        used += width;
        start = idx;
    }

    VisibleTail {
        start,
        cursor_col: u16::try_from(used).unwrap_or(u16::MAX),
    }
}

/// Render the query box with the terminal cursor after the last character
pub fn draw(f: &mut Frame, area: Rect, style: &SearchBarStyle<'_>, query: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", style.title))
        .border_style(Style::default().fg(style.border_color));
    let inner = block.inner(area);

    let (content, cursor_col) = if query.is_empty() {
        let placeholder = Line::from(Span::styled(
            style.placeholder,
            Style::default().fg(style.muted_color),
        ));
        (placeholder, 0)
    } else {
        let tail = visible_tail(query, inner.width);
        (Line::from(&query[tail.start..]), tail.cursor_col)
    };
    f.render_widget(Paragraph::new(content).block(block), area);

    if inner.width > 0 && inner.height > 0 {
        f.set_cursor_position((inner.x.saturating_add(cursor_col), inner.y));
    }
}
