//! Command implementations: wire configuration, client, and the
//! reconstruction/enumeration crates together.

use crate::error::{ErrorKind, Result};
use crate::{Cli, Command};
use exn::OptionExt;
use margin_client::{ApiClient, ClientOptions, Session};
use margin_config::Config;
use margin_library::{Book, download_cover, export_details, notebook_books, shelf_books};
use margin_notes::{ChapterDirectory, render_best_bookmarks, render_bookmarks};

pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).map_err(ErrorKind::config)?;
    let client = build_client(&config)?;
    match cli.command {
        Command::Shelf => {
            let books = shelf_books(client.shelf().map_err(ErrorKind::api)?);
            print_books(&books);
        },
        Command::Notebooks => {
            let books = notebook_books(client.notebooks().map_err(ErrorKind::api)?);
            print_books(&books);
        },
        Command::Notes { book_id } => {
            let directory = directory_for(&client, book_id)?;
            let payload = client.bookmark_list(&book_id.to_string()).map_err(ErrorKind::api)?;
            let text = render_bookmarks(&directory, &payload).map_err(ErrorKind::notes)?;
            print!("{text}");
        },
        Command::Best { book_id } => {
            let directory = directory_for(&client, book_id)?;
            let payload = client.best_bookmarks(&book_id.to_string()).map_err(ErrorKind::api)?;
            let text = render_best_bookmarks(&directory, &payload).map_err(ErrorKind::notes)?;
            print!("{text}");
        },
        Command::Cover { book_id, output } => {
            let book = find_book(&client, &book_id)?;
            let dir = output.or(config.output_dir);
            let path = download_cover(&client, &book, dir.as_deref()).map_err(ErrorKind::library)?;
            println!("{}", path.display());
        },
        Command::Export { output } => {
            let books = shelf_books(client.shelf().map_err(ErrorKind::api)?);
            let output = match &config.output_dir {
                Some(dir) if output.is_relative() => dir.join(&output),
                _ => output,
            };
            let stats = export_details(&client, &books, &output).map_err(ErrorKind::library)?;
            println!(
                "exported {} book(s) to {}, skipped {}",
                stats.exported,
                output.display(),
                stats.skipped
            );
        },
    }
    Ok(())
}

fn build_client(config: &Config) -> Result<ApiClient> {
    let mut options = ClientOptions::default();
    if let Some(base_url) = &config.base_url {
        options.base_url = base_url.clone();
    }
    options.accept_invalid_certs = config.accept_invalid_certs;
    ApiClient::with_options(Session::parse(&config.cookies), options).map_err(ErrorKind::api)
}

fn directory_for(client: &ApiClient, book_id: u64) -> Result<ChapterDirectory> {
    let nodes = client.chapter_infos(book_id).map_err(ErrorKind::api)?;
    Ok(ChapterDirectory::from_nodes(&nodes))
}

/// Resolves an id against the shelf first, then the notebooks: covers exist
/// for annotated books even when they have left the shelf.
fn find_book(client: &ApiClient, book_id: &str) -> Result<Book> {
    let shelf = shelf_books(client.shelf().map_err(ErrorKind::api)?);
    if let Some(book) = shelf.into_iter().find(|book| book.id == book_id) {
        return Ok(book);
    }
    let notebooks = notebook_books(client.notebooks().map_err(ErrorKind::api)?);
    notebooks
        .into_iter()
        .find(|book| book.id == book_id)
        .ok_or_raise(|| ErrorKind::BookNotFound(book_id.to_string()))
}

fn print_books(books: &[Book]) {
    for book in books {
        println!("{}\t{book}", book.id);
    }
}
