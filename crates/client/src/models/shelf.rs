use serde::Deserialize;

/// Response of `GET /shelf/friendCommon`.
///
/// Two overlapping lists cover the bookshelf: books the account has finished
/// and books it has recently opened. Entries are not guaranteed to be books;
/// subscription-feed content shares the same listing and is distinguished
/// only by its non-numeric id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfPayload {
    #[serde(default)]
    pub finish_read_books: Vec<ShelfEntry>,
    #[serde(default)]
    pub recent_books: Vec<ShelfEntry>,
}

/// One shelf listing entry. Every field is optional on the wire; entries
/// missing any of them are not usable as books and get filtered out during
/// enumeration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfEntry {
    #[serde(default)]
    pub book_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
}

/// Response of `GET /user/notebooks`: books the account has notes for.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookPayload {
    #[serde(default)]
    pub books: Vec<NotebookEntry>,
}

/// One notebook listing entry, wrapping the book it annotates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookEntry {
    pub book: NotebookBook,
}

/// Book fields as returned by the notebook endpoint. Unlike the shelf
/// listing, these entries are always real books, so the fields are required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookBook {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub cover: String,
}
