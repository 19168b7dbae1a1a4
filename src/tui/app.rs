use crate::domain::Theme;
use crate::query::{BookQuery, CategoryFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Reading,
    Finished,
    Detail,
}

impl ActivePane {
    pub fn next(self) -> Self {
        match self {
            ActivePane::Reading => ActivePane::Finished,
            ActivePane::Finished => ActivePane::Detail,
            ActivePane::Detail => ActivePane::Reading,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActivePane::Reading => ActivePane::Detail,
            ActivePane::Finished => ActivePane::Reading,
            ActivePane::Detail => ActivePane::Finished,
        }
    }
}

/// The shelf whose selection the detail pane follows. Stays on the last
/// shelf pane visited while the detail pane is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfFocus {
    Reading,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

pub struct TuiApp {
    pub active_pane: ActivePane,
    pub shelf_focus: ShelfFocus,
    pub input_mode: InputMode,
    pub search: String,
    pub category: CategoryFilter,
    pub reading_index: usize,
    pub finished_index: usize,
    pub detail_scroll: u16,
    pub should_quit: bool,
    pub status_message: Option<String>,
    // Pending delete confirmation (book id, title)
    pub pending_delete: Option<(i64, String)>,
    pub theme: Theme,
}

impl TuiApp {
    pub fn new(theme: Theme) -> Self {
        Self {
            active_pane: ActivePane::Reading,
            shelf_focus: ShelfFocus::Reading,
            input_mode: InputMode::Browse,
            search: String::new(),
            category: CategoryFilter::All,
            reading_index: 0,
            finished_index: 0,
            detail_scroll: 0,
            should_quit: false,
            status_message: None,
            pending_delete: None,
            theme,
        }
    }

    pub fn query(&self) -> BookQuery {
        BookQuery {
            keyword: self.search.clone(),
            category: self.category.clone(),
        }
    }

    pub fn set_pane(&mut self, pane: ActivePane) {
        self.active_pane = pane;
        match pane {
            ActivePane::Reading => self.shelf_focus = ShelfFocus::Reading,
            ActivePane::Finished => self.shelf_focus = ShelfFocus::Finished,
            ActivePane::Detail => {}
        }
    }

    pub fn move_up(&mut self) {
        match self.active_pane {
            ActivePane::Reading => {
                if self.reading_index > 0 {
                    self.reading_index -= 1;
                    self.detail_scroll = 0;
                }
            }
            ActivePane::Finished => {
                if self.finished_index > 0 {
                    self.finished_index -= 1;
                    self.detail_scroll = 0;
                }
            }
            ActivePane::Detail => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
        }
    }

    pub fn move_down(&mut self, reading_len: usize, finished_len: usize) {
        match self.active_pane {
            ActivePane::Reading => {
                if reading_len > 0 && self.reading_index < reading_len - 1 {
                    self.reading_index += 1;
                    self.detail_scroll = 0;
                }
            }
            ActivePane::Finished => {
                if finished_len > 0 && self.finished_index < finished_len - 1 {
                    self.finished_index += 1;
                    self.detail_scroll = 0;
                }
            }
            ActivePane::Detail => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
            }
        }
    }

    /// Keep selections inside the current projection; shelves shrink when
    /// books move, match a search, or get deleted.
    pub fn clamp_selection(&mut self, reading_len: usize, finished_len: usize) {
        if self.reading_index >= reading_len && reading_len > 0 {
            self.reading_index = reading_len - 1;
        }
        if reading_len == 0 {
            self.reading_index = 0;
        }
        if self.finished_index >= finished_len && finished_len > 0 {
            self.finished_index = finished_len - 1;
        }
        if finished_len == 0 {
            self.finished_index = 0;
        }
    }

    /// Cycle the category filter: all -> each known category -> all.
    pub fn cycle_category(&mut self, categories: &[String]) {
        let next = match &self.category {
            CategoryFilter::All => categories.first().cloned(),
            CategoryFilter::Only(current) => {
                let position = categories.iter().position(|c| c == current);
                match position {
                    Some(i) => categories.get(i + 1).cloned(),
                    // Current category vanished; start over.
                    None => categories.first().cloned(),
                }
            }
        };
        self.category = next.map(CategoryFilter::Only).unwrap_or(CategoryFilter::All);
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
