use chrono::Utc;
use tracing::debug;

use crate::app::Result;
use crate::domain::{Book, BookDraft, Theme, MAX_RATING};
use crate::store::Storage;

/// The in-memory book collection and its mutating operations.
///
/// Owns the collection exclusively; every mutation writes the whole
/// collection back through the storage adapter before returning, so the
/// persisted state never lags the in-memory one. Collection order is
/// most-recent-first: new books go to the front and nothing reorders them.
///
/// Operations addressed at an id that does not exist are silent no-ops
/// returning `false`; only storage failures surface as errors.
pub struct Library {
    books: Vec<Book>,
    storage: Box<dyn Storage>,
}

impl Library {
    /// Open the library, loading whatever the storage slot holds.
    pub fn open(storage: Box<dyn Storage>) -> Self {
        let books = storage.load_books();
        debug!(count = books.len(), "library opened");
        Self { books, storage }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Distinct category labels in collection order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for book in &self.books {
            if !seen.iter().any(|c| c == &book.category) {
                seen.push(book.category.clone());
            }
        }
        seen
    }

    /// Add a book from a draft, stamping a fresh id and creation time.
    /// The new record is inserted at the front of the collection.
    pub fn add(&mut self, draft: BookDraft) -> Result<&Book> {
        let book = Book::from_draft(self.next_id(), draft);
        self.books.insert(0, book);
        self.persist()?;
        Ok(&self.books[0])
    }

    /// Replace all editable fields of an existing book. `id` and
    /// `date_added` are preserved. A draft marked finished forces progress
    /// to the new page count; otherwise progress is only clamped into the
    /// new bounds.
    pub fn update(&mut self, id: i64, draft: BookDraft) -> Result<bool> {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        book.title = draft.title;
        book.author = draft.author;
        book.year = draft.year;
        book.category = draft.category;
        book.total_pages = draft.total_pages;
        if draft.finished {
            book.progress = book.total_pages;
        } else {
            book.progress = book.progress.min(book.total_pages);
        }
        book.derive_completion();
        self.persist()?;
        Ok(true)
    }

    /// Remove a book permanently. There is no tombstone and no undo.
    pub fn remove(&mut self, id: i64) -> Result<bool> {
        let before = self.books.len();
        self.books.retain(|b| b.id != id);
        if self.books.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn toggle_favorite(&mut self, id: i64) -> Result<bool> {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        book.is_favorite = !book.is_favorite;
        self.persist()?;
        Ok(true)
    }

    /// Move a book to the opposite shelf by driving progress to the
    /// corresponding boundary: every page when finishing, zero when
    /// reopening. Reopening discards any recorded progress.
    pub fn toggle_complete(&mut self, id: i64) -> Result<bool> {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        book.progress = if book.is_complete { 0 } else { book.total_pages };
        book.derive_completion();
        self.persist()?;
        Ok(true)
    }

    /// Record a reading session: current page (clamped into
    /// `[0, total_pages]`), notes, and rating (clamped to 5). Completion is
    /// re-derived from the clamped page.
    pub fn set_progress(&mut self, id: i64, raw_page: i64, notes: &str, rating: u8) -> Result<bool> {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        book.progress = book.clamp_page(raw_page);
        book.notes = notes.to_string();
        book.rating = rating.min(MAX_RATING);
        book.derive_completion();
        self.persist()?;
        Ok(true)
    }

    pub fn theme(&self) -> Theme {
        self.storage.load_theme()
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.storage.save_theme(theme)
    }

    /// Ids are millisecond timestamps, bumped past any collision so they
    /// stay unique within the collection.
    fn next_id(&self) -> i64 {
        let mut id = Utc::now().timestamp_millis();
        while self.books.iter().any(|b| b.id == id) {
            id += 1;
        }
        id
    }

    fn persist(&self) -> Result<()> {
        self.storage.save_books(&self.books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonStore;

    fn library() -> (Library, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        (Library::open(Box::new(store)), dir)
    }

    fn draft(title: &str, category: &str, pages: u32, finished: bool) -> BookDraft {
        BookDraft {
            title: title.into(),
            author: "Anonymous".into(),
            year: Some(2001),
            category: category.into(),
            total_pages: pages,
            finished,
        }
    }

    #[test]
    fn test_add_inserts_at_front() {
        let (mut lib, _dir) = library();
        lib.add(draft("First", "Fiction", 100, false)).unwrap();
        lib.add(draft("Second", "Fiction", 100, false)).unwrap();
        assert_eq!(lib.books()[0].title, "Second");
        assert_eq!(lib.books()[1].title, "First");
    }

    #[test]
    fn test_add_unfinished_starts_at_zero() {
        let (mut lib, _dir) = library();
        let book = lib.add(draft("Dune", "Fiction", 300, false)).unwrap();
        assert_eq!(book.progress, 0);
        assert!(!book.is_complete);
    }

    #[test]
    fn test_add_finished_starts_at_total() {
        let (mut lib, _dir) = library();
        let book = lib.add(draft("Dune", "Fiction", 200, true)).unwrap();
        assert_eq!(book.progress, 200);
        assert!(book.is_complete);
    }

    #[test]
    fn test_ids_stay_unique() {
        let (mut lib, _dir) = library();
        for i in 0..20 {
            lib.add(draft(&format!("Book {}", i), "Fiction", 10, false))
                .unwrap();
        }
        let mut ids: Vec<i64> = lib.books().iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_update_replaces_fields_but_keeps_identity() {
        let (mut lib, _dir) = library();
        let (id, added) = {
            let book = lib.add(draft("Draft Title", "Fiction", 100, false)).unwrap();
            (book.id, book.date_added)
        };

        let changed = lib
            .update(id, draft("Real Title", "Tech", 150, false))
            .unwrap();
        assert!(changed);

        let book = lib.get(id).unwrap();
        assert_eq!(book.title, "Real Title");
        assert_eq!(book.category, "Tech");
        assert_eq!(book.total_pages, 150);
        assert_eq!(book.id, id);
        assert_eq!(book.date_added, added);
    }

    #[test]
    fn test_update_finished_forces_progress_to_total() {
        let (mut lib, _dir) = library();
        let id = lib.add(draft("Dune", "Fiction", 300, false)).unwrap().id;
        lib.set_progress(id, 50, "", 0).unwrap();

        lib.update(id, draft("Dune", "Fiction", 300, true)).unwrap();
        let book = lib.get(id).unwrap();
        assert_eq!(book.progress, 300);
        assert!(book.is_complete);
    }

    #[test]
    fn test_update_clamps_progress_into_new_bounds() {
        let (mut lib, _dir) = library();
        let id = lib.add(draft("Dune", "Fiction", 300, false)).unwrap().id;
        lib.set_progress(id, 250, "", 0).unwrap();

        // Shrinking the page count below recorded progress clamps it.
        lib.update(id, draft("Dune", "Fiction", 200, false)).unwrap();
        let book = lib.get(id).unwrap();
        assert_eq!(book.progress, 200);
        assert!(book.is_complete);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (mut lib, _dir) = library();
        lib.add(draft("Dune", "Fiction", 300, false)).unwrap();
        let snapshot = lib.books().to_vec();
        assert!(!lib.update(999, draft("X", "Y", 1, false)).unwrap());
        assert_eq!(lib.books(), snapshot.as_slice());
    }

    #[test]
    fn test_remove_deletes_book() {
        let (mut lib, _dir) = library();
        let id = lib.add(draft("Dune", "Fiction", 300, false)).unwrap().id;
        assert!(lib.remove(id).unwrap());
        assert!(lib.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_leaves_collection_unchanged() {
        let (mut lib, _dir) = library();
        lib.add(draft("Dune", "Fiction", 300, false)).unwrap();
        let snapshot = lib.books().to_vec();
        assert!(!lib.remove(12345).unwrap());
        assert_eq!(lib.books(), snapshot.as_slice());
    }

    #[test]
    fn test_toggle_favorite_flips() {
        let (mut lib, _dir) = library();
        let id = lib.add(draft("Dune", "Fiction", 300, false)).unwrap().id;
        lib.toggle_favorite(id).unwrap();
        assert!(lib.get(id).unwrap().is_favorite);
        lib.toggle_favorite(id).unwrap();
        assert!(!lib.get(id).unwrap().is_favorite);
    }

    #[test]
    fn test_toggle_complete_twice_restores_flag_and_resets_progress() {
        let (mut lib, _dir) = library();
        let id = lib.add(draft("Dune", "Fiction", 300, false)).unwrap().id;
        lib.set_progress(id, 120, "", 0).unwrap();

        lib.toggle_complete(id).unwrap();
        let book = lib.get(id).unwrap();
        assert!(book.is_complete);
        assert_eq!(book.progress, 300);

        // Reopening zeroes progress, including what was recorded before.
        lib.toggle_complete(id).unwrap();
        let book = lib.get(id).unwrap();
        assert!(!book.is_complete);
        assert_eq!(book.progress, 0);
    }

    #[test]
    fn test_set_progress_clamps_over_max() {
        let (mut lib, _dir) = library();
        let id = lib.add(draft("Dune", "Fiction", 200, false)).unwrap().id;
        lib.set_progress(id, 250, "", 0).unwrap();
        let book = lib.get(id).unwrap();
        assert_eq!(book.progress, 200);
        assert!(book.is_complete);
    }

    #[test]
    fn test_set_progress_clamps_negative_to_zero() {
        let (mut lib, _dir) = library();
        let id = lib.add(draft("Dune", "Fiction", 200, false)).unwrap().id;
        lib.set_progress(id, -5, "", 0).unwrap();
        let book = lib.get(id).unwrap();
        assert_eq!(book.progress, 0);
        assert!(!book.is_complete);
    }

    #[test]
    fn test_set_progress_on_zero_page_book_is_complete() {
        let (mut lib, _dir) = library();
        let id = lib.add(draft("Pamphlet", "Fiction", 0, false)).unwrap().id;
        lib.set_progress(id, -5, "", 0).unwrap();
        let book = lib.get(id).unwrap();
        assert_eq!(book.progress, 0);
        assert!(book.is_complete);
    }

    #[test]
    fn test_set_progress_stores_notes_and_clamps_rating() {
        let (mut lib, _dir) = library();
        let id = lib.add(draft("Dune", "Fiction", 200, false)).unwrap().id;
        lib.set_progress(id, 80, "Paul meets the Fremen", 9).unwrap();
        let book = lib.get(id).unwrap();
        assert_eq!(book.notes, "Paul meets the Fremen");
        assert_eq!(book.rating, MAX_RATING);
        assert!(!book.is_complete);
    }

    #[test]
    fn test_mutations_persist_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let store = JsonStore::new(dir.path()).unwrap();
            let mut lib = Library::open(Box::new(store));
            let id = lib.add(draft("Dune", "Fiction", 300, false)).unwrap().id;
            lib.add(draft("Emma", "Fiction", 250, true)).unwrap();
            lib.set_progress(id, 42, "note", 3).unwrap();
            lib.toggle_favorite(id).unwrap();
            id
        };

        let store = JsonStore::new(dir.path()).unwrap();
        let lib = Library::open(Box::new(store));
        assert_eq!(lib.len(), 2);
        assert_eq!(lib.books()[0].title, "Emma");
        let book = lib.get(id).unwrap();
        assert_eq!(book.progress, 42);
        assert_eq!(book.notes, "note");
        assert_eq!(book.rating, 3);
        assert!(book.is_favorite);
    }

    #[test]
    fn test_categories_in_collection_order() {
        let (mut lib, _dir) = library();
        lib.add(draft("A", "Tech", 10, false)).unwrap();
        lib.add(draft("B", "Fiction", 10, false)).unwrap();
        lib.add(draft("C", "Tech", 10, false)).unwrap();
        // Front-insertion puts the latest addition first.
        assert_eq!(lib.categories(), vec!["Tech", "Fiction"]);
    }

    #[test]
    fn test_theme_passthrough() {
        let (lib, _dir) = library();
        assert_eq!(lib.theme(), Theme::Light);
        lib.set_theme(Theme::Dark).unwrap();
        assert_eq!(lib.theme(), Theme::Dark);
    }
}
