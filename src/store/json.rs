use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::app::{OctavoError, Result};
use crate::domain::{Book, Theme};
use crate::store::{Storage, BOOKS_SLOT, THEME_SLOT};

/// File-backed key-value storage. Each slot is one file under the data
/// directory; the whole collection is serialized as a single JSON array and
/// overwritten on every save.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(slot)
    }
}

impl Storage for JsonStore {
    fn load_books(&self) -> Vec<Book> {
        let path = self.slot_path(BOOKS_SLOT);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            // A missing slot is the first-run case.
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(books) => books,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable book data, starting empty");
                Vec::new()
            }
        }
    }

    fn save_books(&self, books: &[Book]) -> Result<()> {
        let path = self.slot_path(BOOKS_SLOT);
        let raw = serde_json::to_string(books)?;
        fs::write(&path, raw).map_err(|source| OctavoError::Storage {
            path: path.clone(),
            source,
        })?;
        debug!(count = books.len(), "collection saved");
        Ok(())
    }

    fn load_theme(&self) -> Theme {
        fs::read_to_string(self.slot_path(THEME_SLOT))
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        let path = self.slot_path(THEME_SLOT);
        fs::write(&path, theme.as_str()).map_err(|source| OctavoError::Storage { path, source })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookDraft;

    fn store() -> (JsonStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        (store, dir)
    }

    fn sample_books() -> Vec<Book> {
        let mut first = Book::from_draft(
            1,
            BookDraft {
                title: "Dune".into(),
                author: "Frank Herbert".into(),
                year: Some(1965),
                category: "Fiction".into(),
                total_pages: 412,
                finished: false,
            },
        );
        first.progress = 100;
        first.rating = 4;
        first.notes = "Slow start".into();
        let second = Book::from_draft(
            2,
            BookDraft {
                title: "The Rust Programming Language".into(),
                author: "Steve Klabnik".into(),
                year: Some(2019),
                category: "Tech".into(),
                total_pages: 560,
                finished: true,
            },
        );
        vec![first, second]
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let (store, _dir) = store();
        assert!(store.load_books().is_empty());
    }

    #[test]
    fn test_books_round_trip() {
        let (store, _dir) = store();
        let books = sample_books();
        store.save_books(&books).unwrap();
        assert_eq!(store.load_books(), books);
    }

    #[test]
    fn test_garbage_slot_loads_empty() {
        let (store, dir) = store();
        fs::write(dir.path().join(BOOKS_SLOT), "{not json").unwrap();
        assert!(store.load_books().is_empty());
    }

    #[test]
    fn test_save_overwrites_whole_slot() {
        let (store, _dir) = store();
        store.save_books(&sample_books()).unwrap();
        let one = vec![sample_books().remove(0)];
        store.save_books(&one).unwrap();
        assert_eq!(store.load_books(), one);
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let (store, _dir) = store();
        assert_eq!(store.load_theme(), Theme::Light);
    }

    #[test]
    fn test_theme_round_trip() {
        let (store, _dir) = store();
        store.save_theme(Theme::Dark).unwrap();
        assert_eq!(store.load_theme(), Theme::Dark);
    }

    #[test]
    fn test_garbage_theme_falls_back_to_light() {
        let (store, dir) = store();
        fs::write(dir.path().join(THEME_SLOT), "sepia").unwrap();
        assert_eq!(store.load_theme(), Theme::Light);
    }
}
