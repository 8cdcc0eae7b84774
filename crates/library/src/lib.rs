//! Bookshelf enumeration, cover download, and tabular export.

mod cover;
pub mod error;
mod export;
mod shelf;

pub use crate::cover::{cover_image_url, download_cover};
pub use crate::export::{EXPORT_COLUMNS, ExportStats, export_details};
pub use crate::shelf::{Book, notebook_books, shelf_books};
