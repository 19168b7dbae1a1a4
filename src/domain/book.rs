use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ratings run 0-5, where 0 means unrated.
pub const MAX_RATING: u8 = 5;

/// A single tracked title in the library.
///
/// Serialized field names are camelCase to match the on-disk blob layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub category: String,
    pub total_pages: u32,
    pub is_complete: bool,
    pub progress: u32,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub notes: String,
    pub date_added: DateTime<Utc>,
}

impl Book {
    /// Build a fresh record from a draft. `id` and `date_added` are stamped
    /// here and never change afterwards.
    pub fn from_draft(id: i64, draft: BookDraft) -> Self {
        let progress = if draft.finished { draft.total_pages } else { 0 };
        let mut book = Self {
            id,
            title: draft.title,
            author: draft.author,
            year: draft.year,
            category: draft.category,
            total_pages: draft.total_pages,
            is_complete: false,
            progress,
            is_favorite: false,
            rating: 0,
            notes: String::new(),
            date_added: Utc::now(),
        };
        book.derive_completion();
        book
    }

    /// Clamp a raw page number into `[0, total_pages]`.
    pub fn clamp_page(&self, raw: i64) -> u32 {
        raw.clamp(0, i64::from(self.total_pages)) as u32
    }

    /// Completion is always derived from progress: a book is complete exactly
    /// when every page is read. A zero-page book is therefore always complete.
    pub fn derive_completion(&mut self) {
        self.is_complete = self.progress >= self.total_pages;
    }

    /// Pages read as a whole percentage. A zero-page book reads as 0%.
    pub fn percent_read(&self) -> u8 {
        if self.total_pages == 0 {
            return 0;
        }
        (u64::from(self.progress) * 100 / u64::from(self.total_pages)) as u8
    }

    pub fn display_rating(&self) -> String {
        "★".repeat(usize::from(self.rating.min(MAX_RATING)))
    }
}

/// User-supplied field set for adding or editing a book. Carries only the
/// editable fields; identity and bookkeeping stay on [`Book`].
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub category: String,
    pub total_pages: u32,
    pub finished: bool,
}
