use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::Palette;
use crate::domain::Book;
use crate::query::{shelve, CategoryFilter, Shelves};
use crate::stats::LibraryStats;
use crate::tui::app::{ActivePane, InputMode, ShelfFocus, TuiApp};

pub fn render(frame: &mut Frame, app: &TuiApp, books: &[Book], palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Stats strip
            Constraint::Percentage(32), // Reading shelf
            Constraint::Percentage(28), // Finished shelf
            Constraint::Min(8),         // Detail pane
            Constraint::Length(1),      // Status bar
        ])
        .split(frame.area());

    let shelves = shelve(books, &app.query());

    render_stats_strip(frame, books, palette, chunks[0]);
    match &shelves {
        Some(shelves) => {
            render_shelf(
                frame,
                app,
                &shelves.reading,
                ActivePane::Reading,
                palette,
                chunks[1],
            );
            render_shelf(
                frame,
                app,
                &shelves.finished,
                ActivePane::Finished,
                palette,
                chunks[2],
            );
        }
        None => {
            render_empty_shelf(frame, app, ActivePane::Reading, palette, chunks[1]);
            render_empty_shelf(frame, app, ActivePane::Finished, palette, chunks[2]);
        }
    }
    render_detail_pane(frame, app, shelves.as_ref(), palette, chunks[3]);
    render_status_bar(frame, app, palette, chunks[4]);
}

fn render_stats_strip(frame: &mut Frame, books: &[Book], palette: &Palette, area: Rect) {
    let stats = LibraryStats::derive(books);
    let text = format!(
        " {} books · {} finished · {} pages read · top category: {}",
        stats.total, stats.finished, stats.pages_read, stats.top_category
    );
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(palette.status_fg).bg(palette.status_bg));
    frame.render_widget(paragraph, area);
}

fn shelf_title(app: &TuiApp, pane: ActivePane, count: usize) -> String {
    let name = match pane {
        ActivePane::Finished => "Finished",
        _ => "Reading",
    };
    match &app.category {
        CategoryFilter::All => format!(" {} ({}) ", name, count),
        CategoryFilter::Only(category) => format!(" {} ({}) · {} ", name, count, category),
    }
}

fn render_shelf(
    frame: &mut Frame,
    app: &TuiApp,
    books: &[&Book],
    pane: ActivePane,
    palette: &Palette,
    area: Rect,
) {
    let is_active = app.active_pane == pane;
    let border_style = if is_active {
        Style::default().fg(palette.active_border)
    } else {
        Style::default().fg(palette.inactive_border)
    };

    let selected = match pane {
        ActivePane::Finished => app.finished_index,
        _ => app.reading_index,
    };
    let is_focused = matches!(
        (pane, app.shelf_focus),
        (ActivePane::Reading, ShelfFocus::Reading) | (ActivePane::Finished, ShelfFocus::Finished)
    );

    let row_color = match pane {
        ActivePane::Finished => palette.finished_book,
        _ => palette.reading_book,
    };

    let items: Vec<ListItem> = books
        .iter()
        .enumerate()
        .map(|(i, book)| {
            let marker = if book.is_favorite { "♥ " } else { "  " };
            let body = shelf_row(book, pane);

            let line = if i == selected && is_active {
                Line::from(Span::styled(
                    format!("{}{}", marker, body),
                    Style::default()
                        .bg(palette.selection_bg)
                        .fg(palette.selection_fg)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                let base = Style::default().fg(row_color);
                let style = if i == selected && is_focused {
                    base.add_modifier(Modifier::BOLD)
                } else {
                    base
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(palette.favorite)),
                    Span::styled(body, style),
                ])
            };
            ListItem::new(line)
        })
        .collect();

    let block = Block::default()
        .title(shelf_title(app, pane, books.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(List::new(items).block(block), area);
}

fn shelf_row(book: &Book, pane: ActivePane) -> String {
    match pane {
        ActivePane::Finished => {
            let rating = book.display_rating();
            if rating.is_empty() {
                format!("{} — {}", book.title, book.author)
            } else {
                format!("{} — {} · {}", book.title, book.author, rating)
            }
        }
        _ => format!(
            "{} — {} · {}/{} ({}%)",
            book.title,
            book.author,
            book.progress,
            book.total_pages,
            book.percent_read()
        ),
    }
}

fn render_empty_shelf(
    frame: &mut Frame,
    app: &TuiApp,
    pane: ActivePane,
    palette: &Palette,
    area: Rect,
) {
    let is_active = app.active_pane == pane;
    let border_style = if is_active {
        Style::default().fg(palette.active_border)
    } else {
        Style::default().fg(palette.inactive_border)
    };

    let block = Block::default()
        .title(shelf_title(app, pane, 0))
        .borders(Borders::ALL)
        .border_style(border_style);

    // The not-found message lives in the reading pane, like the web original.
    let message = if pane == ActivePane::Reading {
        "No books found"
    } else {
        ""
    };
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(palette.metadata))
        .block(block);
    frame.render_widget(paragraph, area);
}

fn selected_book<'a>(app: &TuiApp, shelves: &Shelves<'a>) -> Option<&'a Book> {
    match app.shelf_focus {
        ShelfFocus::Reading => shelves.reading.get(app.reading_index).copied(),
        ShelfFocus::Finished => shelves.finished.get(app.finished_index).copied(),
    }
}

fn render_detail_pane(
    frame: &mut Frame,
    app: &TuiApp,
    shelves: Option<&Shelves<'_>>,
    palette: &Palette,
    area: Rect,
) {
    let is_active = app.active_pane == ActivePane::Detail;
    let border_style = if is_active {
        Style::default().fg(palette.active_border)
    } else {
        Style::default().fg(palette.inactive_border)
    };

    let book = shelves.and_then(|shelves| selected_book(app, shelves));

    let (title, content) = if let Some(book) = book {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            book.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        let mut byline = format!("By: {}", book.author);
        if let Some(year) = book.year {
            byline.push_str(&format!(" ({})", year));
        }
        lines.push(Line::from(Span::styled(
            byline,
            Style::default().fg(palette.metadata),
        )));
        if !book.category.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("Category: {}", book.category),
                Style::default().fg(palette.metadata),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("Added: {}", book.date_added.format("%Y-%m-%d")),
            Style::default().fg(palette.metadata),
        )));
        lines.push(Line::from(""));

        lines.push(Line::from(format!(
            "{} {}/{} pages ({}%)",
            progress_bar(book, 20),
            book.progress,
            book.total_pages,
            book.percent_read()
        )));
        if book.rating > 0 {
            lines.push(Line::from(Span::styled(
                book.display_rating(),
                Style::default().fg(palette.rating),
            )));
        }

        if !book.notes.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(
                "─".repeat(area.width.saturating_sub(2) as usize),
            ));
            lines.push(Line::from(""));
            for line in book.notes.lines() {
                lines.push(Line::from(line.to_string()));
            }
        }

        (format!(" {} ", book.title), Text::from(lines))
    } else {
        (" Detail ".to_string(), Text::from("No book selected"))
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Fixed-width progress bar drawn with block characters.
fn progress_bar(book: &Book, width: usize) -> String {
    let filled = if book.total_pages == 0 {
        0
    } else {
        (book.progress as usize * width) / book.total_pages as usize
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, palette: &Palette, area: Rect) {
    let status = if let Some((_, ref title)) = app.pending_delete {
        format!("Remove \"{}\"? (y/n)", title)
    } else if app.input_mode == InputMode::Search {
        format!("/{}", app.search)
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else if !app.search.is_empty() {
        format!(
            "/{}  Esc:Clear  j/k:Navigate  Tab:Pane  f:Favorite  c:Finish  q:Quit",
            app.search
        )
    } else {
        "j/k:Navigate  Tab:Pane  /:Search  g:Category  f:Favorite  c:Finish  +/-:Page  d:Delete  t:Theme  q:Quit"
            .to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(palette.status_fg).bg(palette.status_bg));

    frame.render_widget(paragraph, area);
}
