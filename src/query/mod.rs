use crate::domain::Book;

/// Category side of a query: everything, or one specific label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn allows(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => label == category,
        }
    }
}

/// A case-insensitive keyword plus a category filter. An empty keyword
/// matches every book.
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    pub keyword: String,
    pub category: CategoryFilter,
}

impl BookQuery {
    pub fn matches(&self, book: &Book) -> bool {
        let keyword = self.keyword.to_lowercase();
        let text_hit = book.title.to_lowercase().contains(&keyword)
            || book.author.to_lowercase().contains(&keyword);
        text_hit && self.category.allows(&book.category)
    }
}

/// The two display groups, each preserving collection order.
#[derive(Debug)]
pub struct Shelves<'a> {
    pub reading: Vec<&'a Book>,
    pub finished: Vec<&'a Book>,
}

/// Project the collection through a query and split it into shelves.
/// Returns `None` when nothing matches, so callers can render a not-found
/// state instead of two empty lists.
pub fn shelve<'a>(books: &'a [Book], query: &BookQuery) -> Option<Shelves<'a>> {
    let matched: Vec<&Book> = books.iter().filter(|b| query.matches(b)).collect();
    if matched.is_empty() {
        return None;
    }
    let (finished, reading) = matched.into_iter().partition(|b| b.is_complete);
    Some(Shelves { reading, finished })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookDraft;

    fn book(id: i64, title: &str, author: &str, category: &str, finished: bool) -> Book {
        Book::from_draft(
            id,
            BookDraft {
                title: title.into(),
                author: author.into(),
                year: None,
                category: category.into(),
                total_pages: 100,
                finished,
            },
        )
    }

    fn shelf() -> Vec<Book> {
        vec![
            book(1, "The Hobbit", "J.R.R. Tolkien", "Fiction", false),
            book(2, "The Silmarillion", "J.R.R. Tolkien", "Fiction", true),
            book(3, "Clean Code", "Robert Martin", "Tech", false),
        ]
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let books = shelf();
        let shelves = shelve(&books, &BookQuery::default()).unwrap();
        assert_eq!(shelves.reading.len(), 2);
        assert_eq!(shelves.finished.len(), 1);
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let books = shelf();
        let query = BookQuery {
            keyword: "hobbit".into(),
            ..Default::default()
        };
        let shelves = shelve(&books, &query).unwrap();
        assert_eq!(shelves.reading.len(), 1);
        assert_eq!(shelves.reading[0].title, "The Hobbit");
        assert!(shelves.finished.is_empty());
    }

    #[test]
    fn test_keyword_matches_author_too() {
        let books = shelf();
        let query = BookQuery {
            keyword: "tolkien".into(),
            ..Default::default()
        };
        let shelves = shelve(&books, &query).unwrap();
        assert_eq!(shelves.reading.len(), 1);
        assert_eq!(shelves.finished.len(), 1);
    }

    #[test]
    fn test_category_filter_composes_with_keyword() {
        let books = shelf();
        let query = BookQuery {
            keyword: "the".into(),
            category: CategoryFilter::Only("Fiction".into()),
        };
        let shelves = shelve(&books, &query).unwrap();
        assert_eq!(shelves.reading.len(), 1);
        assert_eq!(shelves.finished.len(), 1);
    }

    #[test]
    fn test_no_match_is_not_found_state() {
        let books = shelf();
        let query = BookQuery {
            keyword: "dostoevsky".into(),
            ..Default::default()
        };
        assert!(shelve(&books, &query).is_none());
    }

    #[test]
    fn test_shelves_preserve_collection_order() {
        let books = vec![
            book(1, "A", "x", "Fiction", false),
            book(2, "B", "x", "Fiction", true),
            book(3, "C", "x", "Fiction", false),
            book(4, "D", "x", "Fiction", true),
        ];
        let shelves = shelve(&books, &BookQuery::default()).unwrap();
        let reading: Vec<&str> = shelves.reading.iter().map(|b| b.title.as_str()).collect();
        let finished: Vec<&str> = shelves.finished.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(reading, vec!["A", "C"]);
        assert_eq!(finished, vec!["B", "D"]);
    }
}
