//! Bookshelf and notebook enumeration.

use margin_client::models::{NotebookPayload, ShelfEntry, ShelfPayload};
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::instrument;

/// A book associated with the reading account.
///
/// Immutable value type. Identity is the full `(id, title, author, cover)`
/// tuple — the shelf enumerator deduplicates on exactly this equality, so
/// two listings of the same id with, say, different cover revisions survive
/// as two entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    /// Opaque platform identifier. All-digit for true books; feed content
    /// carries non-numeric ids and never reaches a [`Book`].
    pub id: String,
    pub title: String,
    pub author: String,
    /// Cover image URL (small-size variant).
    pub cover: String,
}

impl Book {
    fn from_shelf_entry(entry: ShelfEntry) -> Option<Self> {
        Some(Self {
            id: entry.book_id?,
            title: entry.title?,
            author: entry.author?,
            cover: entry.cover?,
        })
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// Subscription feeds share the shelf listing with books and are told apart
/// only by their non-numeric ids.
fn is_book_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

/// Enumerates the bookshelf: finished and recently-read listings merged,
/// non-book entries dropped, duplicates collapsed, sorted by title.
///
/// The sort is a plain codepoint comparison. Sortedness is the only ordering
/// guarantee: set-based deduplication does not preserve encounter order, so
/// books with equal titles may come out in any relative order.
#[instrument(skip_all, fields(finished = payload.finish_read_books.len(), recent = payload.recent_books.len()))]
pub fn shelf_books(payload: ShelfPayload) -> Vec<Book> {
    let mut unique = HashSet::new();
    for entry in payload.finish_read_books.into_iter().chain(payload.recent_books) {
        let Some(id) = entry.book_id.as_deref() else {
            continue;
        };
        if !is_book_id(id) {
            tracing::debug!(id, "skipping non-book shelf entry");
            continue;
        }
        // Entries missing title, author, or cover are listing stubs, not books.
        let Some(book) = Book::from_shelf_entry(entry) else {
            continue;
        };
        unique.insert(book);
    }
    let mut books: Vec<Book> = unique.into_iter().collect();
    books.sort_by(|a, b| a.title.cmp(&b.title));
    books
}

/// Enumerates the books the account has notes for, sorted by title.
///
/// The notebook endpoint only ever lists real books, so there is no id
/// filtering and no deduplication beyond what the source guarantees.
#[instrument(skip_all, fields(books = payload.books.len()))]
pub fn notebook_books(payload: NotebookPayload) -> Vec<Book> {
    let mut books: Vec<Book> = payload
        .books
        .into_iter()
        .map(|entry| Book {
            id: entry.book.book_id,
            title: entry.book.title,
            author: entry.book.author,
            cover: entry.book.cover,
        })
        .collect();
    books.sort_by(|a, b| a.title.cmp(&b.title));
    books
}

#[cfg(test)]
mod tests {
    use super::*;
    use margin_client::models::{NotebookBook, NotebookEntry};
    use rstest::rstest;

    fn entry(id: Option<&str>, title: &str) -> ShelfEntry {
        ShelfEntry {
            book_id: id.map(str::to_string),
            title: Some(title.to_string()),
            author: Some("Author".to_string()),
            cover: Some("https://img.test/s_c.jpg".to_string()),
        }
    }

    #[test]
    fn merges_both_listings_and_deduplicates() {
        let payload = ShelfPayload {
            finish_read_books: vec![entry(Some("100"), "Alpha")],
            recent_books: vec![entry(Some("100"), "Alpha"), entry(Some("200"), "Beta")],
        };
        let books = shelf_books(payload);
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Alpha");
        assert_eq!(books[1].title, "Beta");
    }

    #[rstest]
    #[case(Some("abc123"))]
    #[case(Some("MP_WXS_123"))]
    #[case(Some(""))]
    #[case(None)]
    fn excludes_entries_without_a_numeric_id(#[case] id: Option<&str>) {
        let payload = ShelfPayload {
            finish_read_books: vec![entry(id, "Feed Thing")],
            recent_books: vec![],
        };
        assert!(shelf_books(payload).is_empty());
    }

    #[test]
    fn excludes_entries_missing_book_fields() {
        let stub = ShelfEntry {
            book_id: Some("300".to_string()),
            title: Some("No Cover".to_string()),
            author: Some("Author".to_string()),
            cover: None,
        };
        let payload = ShelfPayload {
            finish_read_books: vec![stub],
            recent_books: vec![],
        };
        assert!(shelf_books(payload).is_empty());
    }

    #[test]
    fn sorts_by_title() {
        let payload = ShelfPayload {
            finish_read_books: vec![entry(Some("3"), "Charlie"), entry(Some("1"), "Alpha")],
            recent_books: vec![entry(Some("2"), "Beta")],
        };
        let titles: Vec<_> = shelf_books(payload).into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["Alpha", "Beta", "Charlie"]);
    }

    #[test]
    fn same_id_with_different_cover_stays_distinct() {
        let mut revised = entry(Some("100"), "Alpha");
        revised.cover = Some("https://img.test/s_c2.jpg".to_string());
        let payload = ShelfPayload {
            finish_read_books: vec![entry(Some("100"), "Alpha")],
            recent_books: vec![revised],
        };
        assert_eq!(shelf_books(payload).len(), 2);
    }

    #[test]
    fn notebook_books_sort_without_filtering() {
        let payload = NotebookPayload {
            books: vec![
                NotebookEntry {
                    book: NotebookBook {
                        book_id: "9".to_string(),
                        title: "Zed".to_string(),
                        author: "A".to_string(),
                        cover: "c".to_string(),
                    },
                },
                NotebookEntry {
                    book: NotebookBook {
                        book_id: "7".to_string(),
                        title: "Ack".to_string(),
                        author: "B".to_string(),
                        cover: "c".to_string(),
                    },
                },
            ],
        };
        let titles: Vec<_> = notebook_books(payload).into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["Ack", "Zed"]);
    }

    #[test]
    fn book_displays_title_and_author() {
        let book = Book {
            id: "1".to_string(),
            title: "Title".to_string(),
            author: "Someone".to_string(),
            cover: "c".to_string(),
        };
        assert_eq!(book.to_string(), "Title by Someone");
    }
}
