use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::Result;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                return Ok(AppEvent::Key(key));
            }
        }
        Ok(AppEvent::Tick)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    NextPane,
    PrevPane,
    ToggleFinished,
    ToggleFavorite,
    PageForward,
    PageBack,
    Delete,
    CycleCategory,
    StartSearch,
    ClearFilters,
    ToggleTheme,
    None,
}

/// Browse-mode key mapping. Search input is captured directly by the run
/// loop while search mode is active.
impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
            KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
            KeyCode::Tab => Action::NextPane,
            KeyCode::BackTab => Action::PrevPane,
            KeyCode::Char('c') => Action::ToggleFinished,
            KeyCode::Char('f') => Action::ToggleFavorite,
            KeyCode::Char('+') | KeyCode::Char('l') | KeyCode::Right => Action::PageForward,
            KeyCode::Char('-') | KeyCode::Char('h') | KeyCode::Left => Action::PageBack,
            KeyCode::Char('d') | KeyCode::Delete => Action::Delete,
            KeyCode::Char('g') => Action::CycleCategory,
            KeyCode::Char('/') => Action::StartSearch,
            KeyCode::Esc => Action::ClearFilters,
            KeyCode::Char('t') => Action::ToggleTheme,
            _ => Action::None,
        }
    }
}
