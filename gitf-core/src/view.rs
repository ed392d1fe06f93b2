//! Pure projection of [`AppState`] into what a frame should show.
//!
//! Nothing here touches the terminal; the TUI crate turns a [`FrameView`]
//! into widgets. All window sizes come from [`PaneLayout`], which the state
//! machine also uses for its scroll math.

use crate::{
    git::{ChangeKind, ChangeSummary},
    paths::display_path,
    state::AppState,
};
use std::{borrow::Cow, path::Path};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Share of the terminal width given to the repository list
pub const LIST_PANE_PERCENT: u16 = 55;
/// Border plus one column of padding on each side of a pane
pub const PANE_CHROME_COLS: u16 = 4;
pub const MIN_CONTENT_WIDTH: u16 = 20;

pub const FOOTER_ROWS: u16 = 1;
/// Search box (3) and list borders (2)
pub const LIST_CHROME_ROWS: u16 = FOOTER_ROWS + 5;
/// Borders (2), branch/tracking/counts/summary header with spacing (6), scroll hint (2)
pub const STATUS_CHROME_ROWS: u16 = FOOTER_ROWS + 10;

/// Columns before a file name: `XY` code plus two spaces
const FILE_ROW_PREFIX_COLS: usize = 4;
/// Columns before a repo name: highlight marker plus space
const LIST_ROW_PREFIX_COLS: usize = 2;

pub const FOOTER_HINT: &str = "↑/↓: nav repos | Shift+↑/↓: scroll status | Enter: open | ^O: files | ^T: term | ^B: remote | ^G: refresh | Esc: exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub list_outer_width: u16,
    pub status_outer_width: u16,
    /// Content widths inside each pane, floored to `MIN_CONTENT_WIDTH`
    pub list_width: u16,
    pub status_width: u16,
    /// Visible repository rows (`W`)
    pub list_rows: usize,
    /// Visible file rows in the status pane (`H`)
    pub status_rows: usize,
}

impl PaneLayout {
    pub fn compute(viewport: Viewport) -> Self {
        let Viewport { width, height } = viewport;
        let list_outer_width =
            u16::try_from(u32::from(width) * u32::from(LIST_PANE_PERCENT) / 100).unwrap_or(width);
        let status_outer_width = width.saturating_sub(list_outer_width);

        Self {
            list_outer_width,
            status_outer_width,
            list_width: list_outer_width
                .saturating_sub(PANE_CHROME_COLS)
                .max(MIN_CONTENT_WIDTH),
            status_width: status_outer_width
                .saturating_sub(PANE_CHROME_COLS)
                .max(MIN_CONTENT_WIDTH),
            list_rows: usize::from(height.saturating_sub(LIST_CHROME_ROWS)).max(1),
            status_rows: usize::from(height.saturating_sub(STATUS_CHROME_ROWS)).max(1),
        }
    }

    /// Columns the list pane can actually draw, without the minimum-width floor
    pub fn list_drawable_cols(&self) -> usize {
        usize::from(self.list_outer_width.saturating_sub(PANE_CHROME_COLS))
    }

    pub fn status_drawable_cols(&self) -> usize {
        usize::from(self.status_outer_width.saturating_sub(PANE_CHROME_COLS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView<'a> {
    pub layout: PaneLayout,
    pub query: &'a str,
    pub list: ListView<'a>,
    pub status: StatusView<'a>,
    pub footer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    pub rows: Vec<ListRow<'a>>,
    pub total: usize,
    pub pagination: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow<'a> {
    /// Repository name, cut on the right when the pane is too narrow for it
    pub name: Cow<'a, str>,
    /// Path with `~` for home, left-truncated to fit
    pub location: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView<'a> {
    /// Nothing is highlighted (empty list or no matches)
    NoSelection,
    /// Highlighted, but no fetch has been scheduled yet
    Idle,
    Loading,
    Error(&'a str),
    Ready(StatusPanel<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPanel<'a> {
    pub branch: &'a str,
    pub tracking: Option<&'a str>,
    pub ahead: usize,
    pub behind: usize,
    pub stashes: usize,
    pub summary: ChangeSummary,
    pub files: Vec<FileRow>,
    pub scroll_hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub kind: ChangeKind,
    pub code: String,
    pub path: String,
}

pub fn pagination_text(total: usize, visible: usize) -> String {
    if total > visible {
        format!("Showing {visible} of {total}")
    } else if total == 1 {
        "1 result".to_string()
    } else {
        format!("{total} results")
    }
}

/// Shorten `path` from the left so it fits `max_width` columns, keeping the
/// trailing segment whole where possible: `…/components/status_panel.rs`.
pub fn truncate_path_left(path: &str, max_width: usize) -> String {
    if path.width() <= max_width {
        return path.to_string();
    }
    if max_width < 5 {
        return take_prefix(path, max_width).to_string();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut start = path.len();
    for (idx, ch) in path.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }

    let mut tail = &path[start..];
    if let Some(slash) = tail.find('/')
        && slash + 1 < tail.len()
    {
        tail = &tail[slash..];
    }
    format!("…{tail}")
}

/// Cut `s` on the right with a trailing `…` so it fits `max_width` columns
pub fn truncate_right(s: &str, max_width: usize) -> Cow<'_, str> {
    if s.width() <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }
    Cow::Owned(format!("{}…", take_prefix(s, max_width - 1)))
}

fn take_prefix(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            return &s[..idx];
        }
        used += w;
    }
    s
}

/// Window start that keeps `selected` visible in `rows` rows
fn window_start(offset: usize, selected: usize, rows: usize) -> usize {
    if selected < offset {
        selected
    } else if selected >= offset + rows {
        selected + 1 - rows
    } else {
        offset
    }
}

pub fn project<'a>(
    state: &'a AppState,
    width: u16,
    height: u16,
    home: Option<&Path>,
) -> FrameView<'a> {
    let layout = PaneLayout::compute(Viewport { width, height });
    FrameView {
        layout,
        query: &state.repo_list.search,
        list: project_list(state, &layout, home),
        status: project_status(state, &layout),
        footer: FOOTER_HINT,
    }
}

fn project_list<'a>(state: &'a AppState, layout: &PaneLayout, home: Option<&Path>) -> ListView<'a> {
    let list = &state.repo_list;
    let total = list.filtered.len();
    let rows = layout.list_rows;
    let selected = list.selected.unwrap_or(0);
    let start = window_start(list.scroll_offset, selected, rows).min(total.saturating_sub(1));
    let end = (start + rows).min(total);
    let name_room = layout.list_drawable_cols().saturating_sub(LIST_ROW_PREFIX_COLS);

    let rows: Vec<ListRow<'a>> = list.filtered[start.min(end)..end]
        .iter()
        .enumerate()
        .map(|(i, &(repo_idx, _))| {
            let repo = &state.repos[repo_idx];
            let name = truncate_right(&repo.name, name_room);
            // One separating space between name and location
            let location_budget = name_room.saturating_sub(name.width() + 1);
            ListRow {
                name,
                location: truncate_path_left(&display_path(&repo.path, home), location_budget),
                highlighted: list.selected == Some(start + i),
            }
        })
        .collect();

    ListView {
        pagination: pagination_text(total, rows.len()),
        rows,
        total,
    }
}

fn project_status<'a>(state: &'a AppState, layout: &PaneLayout) -> StatusView<'a> {
    if state.selected_repo().is_none() {
        return StatusView::NoSelection;
    }
    if state.is_loading() {
        return StatusView::Loading;
    }
    if let Some(error) = &state.status_error {
        return StatusView::Error(error);
    }
    if let Some(record) = &state.status {
        let total = record.files.len();
        let rows = layout.status_rows;
        let start = state.status_scroll.min(total.saturating_sub(rows));
        let end = (start + rows).min(total);
        let name_width = layout.status_drawable_cols().saturating_sub(FILE_ROW_PREFIX_COLS);

        let files = record.files[start..end]
            .iter()
            .map(|file| FileRow {
                kind: file.kind,
                code: file.code.clone(),
                path: truncate_path_left(&file.path, name_width),
            })
            .collect();

        let scroll_hint = (total > rows)
            .then(|| format!("(Shift+↑/↓ to scroll: {}-{end} of {total})", start + 1));

        return StatusView::Ready(StatusPanel {
            branch: &record.branch,
            tracking: record.tracking.as_deref(),
            ahead: record.ahead,
            behind: record.behind,
            stashes: record.stashes,
            summary: record.summary(),
            files,
            scroll_hint,
        });
    }
    if state.is_scheduled() {
        return StatusView::Loading;
    }
    StatusView::Idle
}
