use std::collections::HashMap;

use crate::domain::Book;

/// Placeholder category shown when the collection is empty.
pub const NO_CATEGORY: &str = "-";

/// Aggregate counters over the whole collection. Derived on demand; nothing
/// here is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryStats {
    pub total: usize,
    pub finished: usize,
    pub pages_read: u64,
    pub top_category: String,
}

impl LibraryStats {
    pub fn derive(books: &[Book]) -> Self {
        Self {
            total: books.len(),
            finished: books.iter().filter(|b| b.is_complete).count(),
            pages_read: books.iter().map(|b| u64::from(b.progress)).sum(),
            top_category: top_category(books),
        }
    }
}

/// Most frequent category label. Ties go to the category seen first in
/// collection order: the scan only replaces the current best on a strictly
/// greater count.
fn top_category(books: &[Book]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for book in books {
        *counts.entry(book.category.as_str()).or_default() += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for book in books {
        let count = counts[book.category.as_str()];
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((book.category.as_str(), count));
        }
    }

    best.map(|(category, _)| category.to_string())
        .unwrap_or_else(|| NO_CATEGORY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookDraft;

    fn book(id: i64, category: &str, pages: u32, finished: bool) -> Book {
        Book::from_draft(
            id,
            BookDraft {
                title: format!("Book {}", id),
                author: "Anonymous".into(),
                year: None,
                category: category.into(),
                total_pages: pages,
                finished,
            },
        )
    }

    #[test]
    fn test_empty_collection() {
        let stats = LibraryStats::derive(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.finished, 0);
        assert_eq!(stats.pages_read, 0);
        assert_eq!(stats.top_category, NO_CATEGORY);
    }

    #[test]
    fn test_counters() {
        let mut reading = book(1, "Fiction", 300, false);
        reading.progress = 120;
        let books = vec![reading, book(2, "Fiction", 200, true), book(3, "Tech", 50, false)];

        let stats = LibraryStats::derive(&books);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.finished, 1);
        assert!(stats.finished <= stats.total);
        assert_eq!(stats.pages_read, 120 + 200);
    }

    #[test]
    fn test_top_category_by_frequency() {
        let books = vec![
            book(1, "Fiction", 10, false),
            book(2, "Fiction", 10, false),
            book(3, "Tech", 10, false),
        ];
        assert_eq!(LibraryStats::derive(&books).top_category, "Fiction");
    }

    #[test]
    fn test_top_category_tie_goes_to_first_seen() {
        let books = vec![
            book(1, "Tech", 10, false),
            book(2, "Fiction", 10, false),
            book(3, "Fiction", 10, false),
            book(4, "Tech", 10, false),
        ];
        assert_eq!(LibraryStats::derive(&books).top_category, "Tech");
    }
}
