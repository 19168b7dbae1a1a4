pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::KeyCode,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::domain::Book;
use crate::query::{self, BookQuery, CategoryFilter};

use self::app::{InputMode, ShelfFocus, TuiApp};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn run(ctx: &mut AppContext) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Tui, ctx: &mut AppContext) -> Result<()> {
    let mut app = TuiApp::new(ctx.library.theme());
    let event_handler = EventHandler::new(Duration::from_millis(100));

    loop {
        let (reading_len, finished_len) = shelf_lens(ctx.library.books(), &app.query());
        app.clamp_selection(reading_len, finished_len);

        let palette = ctx.config.colors.palette(app.theme);
        terminal.draw(|frame| layout::render(frame, &app, ctx.library.books(), &palette))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                // Handle pending delete confirmation
                if let Some((id, title)) = app.pending_delete.take() {
                    match key.code {
                        KeyCode::Char('y') | KeyCode::Char('Y') => {
                            ctx.library.remove(id)?;
                            app.set_status(format!("Removed \"{}\"", title));
                        }
                        _ => {
                            app.set_status("Delete cancelled".to_string());
                        }
                    }
                    continue;
                }

                // Search mode captures keys as input
                if app.input_mode == InputMode::Search {
                    match key.code {
                        KeyCode::Enter => app.input_mode = InputMode::Browse,
                        KeyCode::Esc => {
                            app.search.clear();
                            app.input_mode = InputMode::Browse;
                        }
                        KeyCode::Backspace => {
                            app.search.pop();
                        }
                        KeyCode::Char(c) => app.search.push(c),
                        _ => {}
                    }
                    continue;
                }

                match Action::from(key) {
                    Action::Quit => {
                        app.should_quit = true;
                    }
                    Action::MoveUp => {
                        app.move_up();
                    }
                    Action::MoveDown => {
                        app.move_down(reading_len, finished_len);
                    }
                    Action::NextPane => {
                        app.set_pane(app.active_pane.next());
                    }
                    Action::PrevPane => {
                        app.set_pane(app.active_pane.prev());
                    }
                    Action::ToggleFavorite => {
                        if let Some(id) = selected_id(&app, ctx.library.books()) {
                            ctx.library.toggle_favorite(id)?;
                        }
                    }
                    Action::ToggleFinished => {
                        if let Some(id) = selected_id(&app, ctx.library.books()) {
                            ctx.library.toggle_complete(id)?;
                        }
                    }
                    Action::PageForward => {
                        turn_page(ctx, &app, 1)?;
                    }
                    Action::PageBack => {
                        turn_page(ctx, &app, -1)?;
                    }
                    Action::Delete => {
                        if let Some(id) = selected_id(&app, ctx.library.books()) {
                            if let Some(book) = ctx.library.get(id) {
                                app.pending_delete = Some((id, book.title.clone()));
                            }
                        }
                    }
                    Action::CycleCategory => {
                        let categories = ctx.library.categories();
                        app.cycle_category(&categories);
                    }
                    Action::StartSearch => {
                        app.clear_status();
                        app.input_mode = InputMode::Search;
                    }
                    Action::ClearFilters => {
                        app.search.clear();
                        app.category = CategoryFilter::All;
                    }
                    Action::ToggleTheme => {
                        app.theme = app.theme.flipped();
                        ctx.library.set_theme(app.theme)?;
                        app.set_status(format!("Switched to the {} theme", app.theme));
                    }
                    Action::None => {}
                }
            }
            AppEvent::Tick => {
                // Clear status message after some time could be implemented here
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn shelf_lens(books: &[Book], query: &BookQuery) -> (usize, usize) {
    match query::shelve(books, query) {
        Some(shelves) => (shelves.reading.len(), shelves.finished.len()),
        None => (0, 0),
    }
}

/// Id of the book the detail pane is following, resolved against the
/// current projection.
fn selected_id(app: &TuiApp, books: &[Book]) -> Option<i64> {
    let shelves = query::shelve(books, &app.query())?;
    match app.shelf_focus {
        ShelfFocus::Reading => shelves.reading.get(app.reading_index).map(|b| b.id),
        ShelfFocus::Finished => shelves.finished.get(app.finished_index).map(|b| b.id),
    }
}

/// Nudge the selected book's progress by one page, keeping notes and rating.
fn turn_page(ctx: &mut AppContext, app: &TuiApp, delta: i64) -> Result<()> {
    let Some(id) = selected_id(app, ctx.library.books()) else {
        return Ok(());
    };
    let Some(book) = ctx.library.get(id) else {
        return Ok(());
    };
    let page = i64::from(book.progress) + delta;
    let notes = book.notes.clone();
    let rating = book.rating;
    ctx.library.set_progress(id, page, &notes, rating)?;
    Ok(())
}
