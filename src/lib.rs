//! # Octavo
//!
//! A terminal-first personal library tracker: catalog books, track reading
//! progress, rate and annotate them, and watch the shelf statistics move.
//!
//! ## Architecture
//!
//! Octavo follows a simple synchronous pipeline:
//!
//! ```text
//! Storage → Library → Query / Stats → UI
//! ```
//!
//! - [`store`]: JSON-file persistence, one slot per kind of data
//! - [`library`]: the in-memory collection and all mutating operations
//! - [`query`]: keyword/category projection into reading and finished shelves
//! - [`stats`]: aggregate counters derived from the collection
//! - [`tui`]: terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a book
//! octavo add "The Hobbit" "J.R.R. Tolkien" --pages 310 --category Fiction
//!
//! # Record a reading session
//! octavo read <id> 120 --notes "Riddles in the dark" --rating 5
//!
//! # List the shelves
//! octavo list
//!
//! # Launch the TUI
//! octavo tui
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration and color palettes
//! - [`domain`]: Core domain models (Book, BookDraft, Theme)
//! - [`library`]: The book collection and its operations
//! - [`query`]: Search and filter projection
//! - [`stats`]: Statistics derivation
//! - [`store`]: Storage persistence
//! - [`tui`]: Terminal user interface

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together configuration,
/// storage, and the library.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `add <title> <author>` - Add a book
/// - `read <id> <page>` - Record a reading session
/// - `list` - Print the shelves
/// - `stats` - Print collection statistics
/// - `tui` - Launch the TUI
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/octavo/config.toml`, supporting a data directory
/// override and custom colors (named or hex) per theme.
pub mod config;

/// Core domain models.
///
/// - [`Book`](domain::Book): a single tracked title
/// - [`BookDraft`](domain::BookDraft): user-supplied fields for add/edit
/// - [`Theme`](domain::Theme): light/dark display preference
pub mod domain;

/// The book collection and its mutating operations.
///
/// [`Library`](library::Library) owns the collection, persists through the
/// storage adapter after every mutation, and silently ignores unknown ids.
pub mod library;

/// Search and filter projection.
///
/// Projects the collection through a [`BookQuery`](query::BookQuery) into
/// reading and finished [`Shelves`](query::Shelves).
pub mod query;

/// Statistics derivation.
///
/// [`LibraryStats`](stats::LibraryStats): total, finished, pages read, and
/// the most frequent category.
pub mod stats;

/// JSON-file persistence layer.
///
/// - [`Storage`](store::Storage): trait defining the storage slots
/// - [`JsonStore`](store::JsonStore): file-backed implementation
pub mod store;

/// Terminal user interface.
///
/// Shelf browser built with ratatui: stats strip, reading and finished
/// shelves, detail pane, status bar.
///
/// Keybindings: j/k navigate, Tab cycles panes, / searches, g cycles the
/// category filter, f toggles favorite, c moves a book between shelves,
/// +/- turn pages, d deletes (with confirmation), t flips the theme,
/// q quits.
pub mod tui;
