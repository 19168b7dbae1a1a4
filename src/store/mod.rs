pub mod json;

use crate::app::Result;
use crate::domain::{Book, Theme};

pub use json::JsonStore;

/// Storage slot for the serialized book collection.
pub const BOOKS_SLOT: &str = "books.json";
/// Storage slot for the theme preference string.
pub const THEME_SLOT: &str = "theme";

pub trait Storage {
    /// Read the persisted collection. Absent or unparseable data yields an
    /// empty collection; load never fails.
    fn load_books(&self) -> Vec<Book>;

    /// Serialize and overwrite the whole collection.
    fn save_books(&self, books: &[Book]) -> Result<()>;

    /// Read the theme preference, defaulting to light when unset.
    fn load_theme(&self) -> Theme;

    fn save_theme(&self, theme: Theme) -> Result<()>;
}
