//! Tabular export of book details.

use crate::error::{ErrorKind, Result};
use crate::shelf::Book;
use exn::ResultExt;
use margin_client::ApiClient;
use margin_client::models::BookInfo;
use std::path::Path;
use tracing::instrument;

/// Column contract of the detail export.
pub const EXPORT_COLUMNS: [&str; 7] = ["Book ID", "Title", "Author", "Cover", "Details", "Publisher", "Price"];

/// Outcome of a bulk export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub exported: usize,
    pub skipped: usize,
}

/// Fetches the detail record for every book and writes them as CSV.
///
/// This is the one place in the system with partial-failure tolerance: a
/// book whose detail fetch fails is logged and skipped so the remaining
/// books still make it into the export.
#[instrument(skip(client, books), fields(books = books.len()))]
pub fn export_details(client: &ApiClient, books: &[Book], path: &Path) -> Result<ExportStats> {
    let mut writer = csv::Writer::from_path(path).or_raise(|| ErrorKind::Csv)?;
    writer.write_record(EXPORT_COLUMNS).or_raise(|| ErrorKind::Csv)?;

    let mut stats = ExportStats::default();
    for book in books {
        let info = match client.book_info(&book.id) {
            Ok(info) => info,
            Err(error) => {
                tracing::warn!(book = %book, error = ?error, "skipping book: detail fetch failed");
                stats.skipped += 1;
                continue;
            },
        };
        writer.write_record(detail_record(book, &info)).or_raise(|| ErrorKind::Csv)?;
        stats.exported += 1;
    }
    writer.flush().or_raise(|| ErrorKind::Io)?;
    Ok(stats)
}

/// One CSV row. Detail fields the platform omitted export as empty cells.
fn detail_record(book: &Book, info: &BookInfo) -> [String; 7] {
    [
        book.id.clone(),
        book.title.clone(),
        book.author.clone(),
        book.cover.clone(),
        info.description.clone().unwrap_or_default(),
        info.publisher.clone().unwrap_or_default(),
        info.price.map(|price| price.to_string()).unwrap_or_default(),
    ]
}
