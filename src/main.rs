//! margin: export highlights and reading notes from a WeRead account.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "margin", version, about = "Export highlights and reading notes from a WeRead account")]
struct Cli {
    /// Path to a configuration file (default: `margin.toml` in the platform
    /// config directory).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every book on the bookshelf.
    Shelf,
    /// List the books with recorded notes.
    Notebooks,
    /// Print a book's own highlights, organized by chapter.
    Notes {
        /// Numeric book identifier, as shown by `shelf` or `notebooks`.
        book_id: u64,
    },
    /// Print a book's platform-curated popular highlights.
    Best {
        /// Numeric book identifier, as shown by `shelf` or `notebooks`.
        book_id: u64,
    },
    /// Download a book's full-size cover image.
    Cover {
        /// Book identifier, as shown by `shelf` or `notebooks`.
        book_id: String,
        /// Directory to write `<book id>.jpg` into.
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
    /// Export shelf book details to a CSV file.
    Export {
        /// Output file path.
        #[arg(long, default_value = "books.csv", value_name = "FILE")]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    if let Err(error) = commands::run(cli) {
        tracing::debug!(?error, "command failed");
        eprintln!("error: {}", *error);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
