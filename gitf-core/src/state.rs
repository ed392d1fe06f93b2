use crate::{
    filter::{Ranker, filter_view},
    git::{Repo, StatusRecord},
    view::{PaneLayout, Viewport},
};
use std::path::{Path, PathBuf};
use unicode_segmentation::UnicodeSegmentation;

/// Query, filtered view, highlight and scroll window for a searchable list
#[derive(Debug, Clone)]
pub struct SearchableList {
    pub search: String,
    /// Index-score pairs, best match first
    pub filtered: Vec<(usize, i64)>,
    /// Position in `filtered`, `None` only when `filtered` is empty
    pub selected: Option<usize>,
    pub scroll_offset: usize,
}

impl SearchableList {
    pub fn new(item_count: usize) -> Self {
        Self {
            search: String::new(),
            filtered: (0..item_count).map(|i| (i, 0)).collect(),
            selected: if item_count > 0 { Some(0) } else { None },
            scroll_offset: 0,
        }
    }

    /// Replace the filtered view and put the highlight back on the first row
    pub fn set_filtered(&mut self, filtered: Vec<(usize, i64)>) {
        self.selected = if filtered.is_empty() { None } else { Some(0) };
        self.filtered = filtered;
        self.scroll_offset = 0;
    }

    /// Remove the last grapheme cluster of the query
    pub fn pop_search(&mut self) -> bool {
        match self.search.grapheme_indices(true).next_back() {
            Some((idx, _)) => {
                self.search.truncate(idx);
                true
            }
            None => false,
        }
    }

    /// Move selection by delta, clamping to bounds. Returns whether it moved.
    pub fn move_selection(&mut self, delta: i32) -> bool {
        let len = self.filtered.len();
        if len == 0 {
            return false;
        }
        let current = self.selected.unwrap_or(0);
        let step = delta.unsigned_abs() as usize;
        let next = if delta > 0 {
            current.saturating_add(step).min(len - 1)
        } else {
            current.saturating_sub(step)
        };
        self.selected = Some(next);
        next != current
    }

    /// Scroll just enough to keep the selection inside `viewport_rows` rows
    pub fn update_scroll_offset_for_selection(&mut self, viewport_rows: usize) {
        let Some(selected) = self.selected else {
            self.scroll_offset = 0;
            return;
        };
        let viewport_rows = viewport_rows.max(1);
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + viewport_rows {
            self.scroll_offset = selected + 1 - viewport_rows;
        }
    }

    /// Index into the underlying items of the highlighted row
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
            .and_then(|sel| self.filtered.get(sel))
            .map(|&(idx, _)| idx)
    }
}

/// Lifecycle of the status fetch for the highlighted repository
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    /// Waiting for the debounce delay; the path is the most recent target
    Scheduled(PathBuf),
    Loading(PathBuf),
}

/// Work the event loop must start after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusRequest {
    /// Start the debounce timer for this path
    Debounce(PathBuf),
    /// Fetch status for this path now
    FetchNow(PathBuf),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub repos: Vec<Repo>,
    pub repo_list: SearchableList,
    pub viewport: Viewport,
    pub status: Option<StatusRecord>,
    pub status_error: Option<String>,
    pub status_scroll: usize,
    pub fetch: FetchState,
}

impl AppState {
    pub fn new(repos: Vec<Repo>) -> Self {
        let repo_list = SearchableList::new(repos.len());
        Self {
            repos,
            repo_list,
            viewport: Viewport::default(),
            status: None,
            status_error: None,
            status_scroll: 0,
            fetch: FetchState::Idle,
        }
    }

    pub fn layout(&self) -> PaneLayout {
        PaneLayout::compute(self.viewport)
    }

    pub fn selected_repo(&self) -> Option<&Repo> {
        self.repo_list
            .selected_index()
            .and_then(|idx| self.repos.get(idx))
    }

    fn selected_path(&self) -> Option<PathBuf> {
        self.selected_repo().map(|repo| repo.path.clone())
    }

    fn is_selected_path(&self, path: &Path) -> bool {
        self.selected_repo().is_some_and(|repo| repo.path == path)
    }

    pub fn is_loading(&self) -> bool {
        matches!(&self.fetch, FetchState::Loading(p) if self.is_selected_path(p))
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(&self.fetch, FetchState::Scheduled(p) if self.is_selected_path(p))
    }

    /// Fetch the first repository immediately, without the debounce delay
    pub fn initial_status_request(&mut self) -> Option<StatusRequest> {
        let path = self.selected_path()?;
        self.fetch = FetchState::Loading(path.clone());
        Some(StatusRequest::FetchNow(path))
    }

    fn schedule_debounce(&mut self) -> Option<StatusRequest> {
        match self.selected_path() {
            Some(path) => {
                self.fetch = FetchState::Scheduled(path.clone());
                Some(StatusRequest::Debounce(path))
            }
            None => {
                self.fetch = FetchState::Idle;
                None
            }
        }
    }

    fn clear_status(&mut self) {
        self.status = None;
        self.status_error = None;
        self.status_scroll = 0;
    }

    fn refilter(&mut self, ranker: &dyn Ranker) -> Option<StatusRequest> {
        let previous = self.selected_path();
        let labels: Vec<&str> = self.repos.iter().map(|r| r.name.as_str()).collect();
        let filtered = filter_view(ranker, &self.repo_list.search, &labels);
        self.repo_list.set_filtered(filtered);

        if self.selected_path() == previous {
            self.status_scroll = 0;
        } else {
            self.clear_status();
        }
        self.schedule_debounce()
    }

    pub fn push_search(&mut self, c: char, ranker: &dyn Ranker) -> Option<StatusRequest> {
        self.repo_list.search.push(c);
        self.refilter(ranker)
    }

    pub fn pop_search(&mut self, ranker: &dyn Ranker) -> Option<StatusRequest> {
        if !self.repo_list.pop_search() {
            return None;
        }
        self.refilter(ranker)
    }

    /// No-op at either end of the list
    pub fn move_selection(&mut self, delta: i32) -> Option<StatusRequest> {
        if !self.repo_list.move_selection(delta) {
            return None;
        }
        let rows = self.layout().list_rows;
        self.repo_list.update_scroll_offset_for_selection(rows);
        self.clear_status();
        self.schedule_debounce()
    }

    fn max_status_scroll(&self) -> usize {
        let files = self.status.as_ref().map_or(0, |s| s.files.len());
        files.saturating_sub(self.layout().status_rows)
    }

    pub fn scroll_status(&mut self, delta: i32) {
        let step = delta.unsigned_abs() as usize;
        let next = if delta > 0 {
            self.status_scroll.saturating_add(step)
        } else {
            self.status_scroll.saturating_sub(step)
        };
        self.status_scroll = next.min(self.max_status_scroll());
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
        let rows = self.layout().list_rows;
        self.repo_list.update_scroll_offset_for_selection(rows);
        self.status_scroll = self.status_scroll.min(self.max_status_scroll());
    }

    /// Manual refresh: fetch now, bypassing the debounce
    pub fn refresh_status(&mut self) -> Option<StatusRequest> {
        let path = self.selected_path()?;
        self.fetch = FetchState::Loading(path.clone());
        Some(StatusRequest::FetchNow(path))
    }

    /// The debounce timer for `path` fired. Only the latest scheduled path
    /// that is still highlighted proceeds to a fetch.
    pub fn debounce_elapsed(&mut self, path: &Path) -> Option<StatusRequest> {
        let current = matches!(&self.fetch, FetchState::Scheduled(p) if p == path);
        if !current || !self.is_selected_path(path) {
            log::debug!("dropping stale debounce for {}", path.display());
            return None;
        }
        self.fetch = FetchState::Loading(path.to_path_buf());
        Some(StatusRequest::FetchNow(path.to_path_buf()))
    }

    /// Apply a fetch result if it belongs to the highlighted repository.
    /// Returns whether it was applied.
    pub fn status_loaded(&mut self, path: &Path, result: Result<StatusRecord, String>) -> bool {
        if !self.is_selected_path(path) {
            log::debug!("discarding stale status for {}", path.display());
            return false;
        }
        if matches!(&self.fetch, FetchState::Loading(p) if p == path) {
            self.fetch = FetchState::Idle;
        }
        match result {
            Ok(record) => {
                self.status = Some(record);
                self.status_error = None;
            }
            Err(error) => {
                self.status = None;
                self.status_error = Some(error);
            }
        }
        self.status_scroll = 0;
        true
    }
}
