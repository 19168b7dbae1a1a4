use crate::app::{AppContext, OctavoError, Result};
use crate::domain::{Book, BookDraft};
use crate::query::{shelve, BookQuery, CategoryFilter};
use crate::stats::LibraryStats;

/// Optional field changes from `octavo edit`. Anything left `None` keeps the
/// book's current value; the merged result is submitted as a full draft.
#[derive(Debug, Default)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub pages: Option<u32>,
    pub finished: Option<bool>,
}

impl BookChanges {
    fn merge_into(self, book: &Book) -> BookDraft {
        BookDraft {
            title: self.title.unwrap_or_else(|| book.title.clone()),
            author: self.author.unwrap_or_else(|| book.author.clone()),
            year: self.year.or(book.year),
            category: self.category.unwrap_or_else(|| book.category.clone()),
            total_pages: self.pages.unwrap_or(book.total_pages),
            finished: self.finished.unwrap_or(book.is_complete),
        }
    }
}

pub fn add_book(ctx: &mut AppContext, draft: BookDraft) -> Result<()> {
    let book = ctx.library.add(draft)?;
    println!("Added \"{}\" by {} (id {})", book.title, book.author, book.id);
    Ok(())
}

pub fn edit_book(ctx: &mut AppContext, id: i64, changes: BookChanges) -> Result<()> {
    let Some(book) = ctx.library.get(id) else {
        println!("No book with id {}", id);
        return Ok(());
    };
    let draft = changes.merge_into(book);
    let title = draft.title.clone();
    ctx.library.update(id, draft)?;
    println!("Updated \"{}\"", title);
    Ok(())
}

pub fn remove_book(ctx: &mut AppContext, id: i64) -> Result<()> {
    let title = ctx.library.get(id).map(|b| b.title.clone());
    if ctx.library.remove(id)? {
        println!("Removed \"{}\"", title.unwrap_or_default());
    } else {
        println!("No book with id {}", id);
    }
    Ok(())
}

pub fn toggle_favorite(ctx: &mut AppContext, id: i64) -> Result<()> {
    if !ctx.library.toggle_favorite(id)? {
        println!("No book with id {}", id);
        return Ok(());
    }
    if let Some(book) = ctx.library.get(id) {
        if book.is_favorite {
            println!("Marked \"{}\" as a favorite", book.title);
        } else {
            println!("Removed \"{}\" from favorites", book.title);
        }
    }
    Ok(())
}

pub fn toggle_finished(ctx: &mut AppContext, id: i64) -> Result<()> {
    if !ctx.library.toggle_complete(id)? {
        println!("No book with id {}", id);
        return Ok(());
    }
    if let Some(book) = ctx.library.get(id) {
        if book.is_complete {
            println!("Finished \"{}\"", book.title);
        } else {
            println!("Moved \"{}\" back to the reading shelf", book.title);
        }
    }
    Ok(())
}

pub fn log_reading(
    ctx: &mut AppContext,
    id: i64,
    page: i64,
    notes: Option<String>,
    rating: Option<u8>,
) -> Result<()> {
    // Fields not supplied keep what the book already holds.
    let Some(book) = ctx.library.get(id) else {
        println!("No book with id {}", id);
        return Ok(());
    };
    let notes = notes.unwrap_or_else(|| book.notes.clone());
    let rating = rating.unwrap_or(book.rating);

    ctx.library.set_progress(id, page, &notes, rating)?;

    if let Some(book) = ctx.library.get(id) {
        if book.is_complete {
            println!(
                "\"{}\": page {}/{}, finished",
                book.title, book.progress, book.total_pages
            );
        } else {
            println!(
                "\"{}\": page {}/{} ({}%)",
                book.title,
                book.progress,
                book.total_pages,
                book.percent_read()
            );
        }
    }
    Ok(())
}

pub fn list_books(ctx: &AppContext, search: Option<String>, category: Option<String>) -> Result<()> {
    let query = BookQuery {
        keyword: search.unwrap_or_default(),
        category: category.map(CategoryFilter::Only).unwrap_or_default(),
    };

    let Some(shelves) = shelve(ctx.library.books(), &query) else {
        println!("No books found");
        return Ok(());
    };

    if !shelves.reading.is_empty() {
        println!("Reading ({})", shelves.reading.len());
        for book in &shelves.reading {
            print_book_line(book);
            println!(
                "    {}/{} pages ({}%) · id {}",
                book.progress,
                book.total_pages,
                book.percent_read(),
                book.id
            );
        }
    }

    if !shelves.finished.is_empty() {
        println!("Finished ({})", shelves.finished.len());
        for book in &shelves.finished {
            print_book_line(book);
            let rating = book.display_rating();
            if rating.is_empty() {
                println!("    id {}", book.id);
            } else {
                println!("    {} · id {}", rating, book.id);
            }
        }
    }

    Ok(())
}

fn print_book_line(book: &Book) {
    let marker = if book.is_favorite { "♥" } else { " " };
    let year = book.year.map(|y| format!(" · {}", y)).unwrap_or_default();
    if book.category.is_empty() {
        println!("{} {} — {}{}", marker, book.title, book.author, year);
    } else {
        println!(
            "{} {} — {} · {}{}",
            marker, book.title, book.author, book.category, year
        );
    }
}

pub fn show_stats(ctx: &AppContext) -> Result<()> {
    let stats = LibraryStats::derive(ctx.library.books());
    println!("Books:        {}", stats.total);
    println!("Finished:     {}", stats.finished);
    println!("Pages read:   {}", stats.pages_read);
    println!("Top category: {}", stats.top_category);
    Ok(())
}

pub fn theme(ctx: &AppContext, value: Option<String>) -> Result<()> {
    match value {
        None => {
            println!("Theme: {}", ctx.library.theme());
        }
        Some(raw) => {
            let theme = raw
                .parse()
                .map_err(|_| OctavoError::Other("theme must be \"light\" or \"dark\"".into()))?;
            ctx.library.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }
    }
    Ok(())
}
