use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use octavo::app::AppContext;
use octavo::cli::{commands, Cli, Commands};
use octavo::domain::BookDraft;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut ctx = AppContext::new(cli.data_dir.clone())?;

    match cli.command {
        Commands::Add {
            title,
            author,
            year,
            category,
            pages,
            finished,
        } => {
            commands::add_book(
                &mut ctx,
                BookDraft {
                    title,
                    author,
                    year,
                    category,
                    total_pages: pages,
                    finished,
                },
            )?;
        }
        Commands::Edit {
            id,
            title,
            author,
            year,
            category,
            pages,
            finished,
        } => {
            commands::edit_book(
                &mut ctx,
                id,
                commands::BookChanges {
                    title,
                    author,
                    year,
                    category,
                    pages,
                    finished,
                },
            )?;
        }
        Commands::Remove { id } => {
            commands::remove_book(&mut ctx, id)?;
        }
        Commands::Favorite { id } => {
            commands::toggle_favorite(&mut ctx, id)?;
        }
        Commands::Finish { id } => {
            commands::toggle_finished(&mut ctx, id)?;
        }
        Commands::Read {
            id,
            page,
            notes,
            rating,
        } => {
            commands::log_reading(&mut ctx, id, page, notes, rating)?;
        }
        Commands::List { search, category } => {
            commands::list_books(&ctx, search, category)?;
        }
        Commands::Stats => {
            commands::show_stats(&ctx)?;
        }
        Commands::Theme { value } => {
            commands::theme(&ctx, value)?;
        }
        Commands::Tui => {
            octavo::tui::run(&mut ctx)?;
        }
    }

    Ok(())
}
