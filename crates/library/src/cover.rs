//! Cover image download.

use crate::error::{ErrorKind, Result};
use crate::shelf::Book;
use exn::ResultExt;
use margin_client::ApiClient;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Derives the full-size cover URL from a shelf listing's cover reference.
///
/// The image host encodes the size variant as a single letter in the path;
/// the listing hands out the small variant and the large one is reached by
/// rewriting the last `s` to a `b`. A reference without any `s` is returned
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use margin_library::cover_image_url;
/// let url = cover_image_url("https://img.test/cover/823/s_82312.jpg");
/// assert_eq!(url, "https://img.test/cover/823/b_82312.jpg");
/// ```
pub fn cover_image_url(cover: &str) -> String {
    match cover.rfind('s') {
        Some(position) => {
            let mut url = String::with_capacity(cover.len());
            url.push_str(&cover[..position]);
            url.push('b');
            url.push_str(&cover[position + 1..]);
            url
        },
        None => cover.to_string(),
    }
}

/// Downloads a book's full-size cover into `output_dir` (default: the
/// current directory) as `<book id>.jpg` and returns the written path.
#[instrument(skip(client, book), fields(book_id = %book.id))]
pub fn download_cover(client: &ApiClient, book: &Book, output_dir: Option<&Path>) -> Result<PathBuf> {
    let url = cover_image_url(&book.cover);
    let bytes = client.cover_image(&url).map_err(ErrorKind::api)?;
    let dir = output_dir.unwrap_or(Path::new("."));
    let path = dir.join(format!("{}.jpg", book.id));
    fs::write(&path, bytes).or_raise(|| ErrorKind::Io)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use margin_client::{ClientOptions, Session};
    use rstest::rstest;

    #[rstest]
    #[case("https://img.test/cover/823/s_82312.jpg", "https://img.test/cover/823/b_82312.jpg")]
    #[case("no letter here", "no letter here")]
    #[case("", "")]
    fn rewrites_last_size_letter(#[case] cover: &str, #[case] expected: &str) {
        assert_eq!(cover_image_url(cover), expected);
    }

    #[test]
    fn failed_download_writes_nothing() {
        let options = ClientOptions {
            // Nothing listens here, so the fetch fails fast.
            base_url: "http://127.0.0.1:1".to_string(),
            ..ClientOptions::default()
        };
        let client = ApiClient::with_options(Session::default(), options).unwrap();
        let book = Book {
            id: "42".to_string(),
            title: "T".to_string(),
            author: "A".to_string(),
            cover: "http://127.0.0.1:1/s_c.jpg".to_string(),
        };
        let dir = tempfile::tempdir().unwrap();
        let result = download_cover(&client, &book, Some(dir.path()));
        assert!(result.is_err());
        assert!(!dir.path().join("42.jpg").exists());
    }
}
