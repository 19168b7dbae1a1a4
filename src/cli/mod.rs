pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "octavo")]
#[command(about = "A terminal personal library tracker", long_about = None)]
pub struct Cli {
    /// Data directory holding the library (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a book to the library
    Add {
        /// Book title
        title: String,
        /// Author name
        author: String,
        /// Publication year
        #[arg(short, long)]
        year: Option<i32>,
        /// Genre label
        #[arg(short, long, default_value = "")]
        category: String,
        /// Total page count
        #[arg(short, long, default_value_t = 0)]
        pages: u32,
        /// Mark the book as already finished
        #[arg(long)]
        finished: bool,
    },
    /// Edit a book's fields
    Edit {
        /// Id of the book to edit
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        pages: Option<u32>,
        /// Mark finished (true) or back to reading (false)
        #[arg(long)]
        finished: Option<bool>,
    },
    /// Remove a book permanently
    Remove {
        /// Id of the book to remove
        id: i64,
    },
    /// Toggle a book's favorite flag
    Favorite {
        /// Id of the book
        id: i64,
    },
    /// Move a book to the opposite shelf
    Finish {
        /// Id of the book
        id: i64,
    },
    /// Record a reading session: current page, notes, rating
    Read {
        /// Id of the book
        id: i64,
        /// Current page; clamped into the book's page range
        page: i64,
        /// Session notes (replaces existing notes)
        #[arg(short, long)]
        notes: Option<String>,
        /// Rating 0-5
        #[arg(short, long)]
        rating: Option<u8>,
    },
    /// List the reading and finished shelves
    List {
        /// Keyword matched against title and author
        #[arg(short, long)]
        search: Option<String>,
        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show collection statistics
    Stats,
    /// Show or set the theme preference
    Theme {
        /// "light" or "dark"; omit to print the current preference
        value: Option<String>,
    },
    /// Launch the TUI
    Tui,
}
