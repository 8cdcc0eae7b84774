//! Blocking request plumbing for the WeRead API.

use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::models::{
    BestBookmarksPayload, BookInfo, BookmarkPayload, ChapterInfoPayload, ChapterNode, NotebookPayload, ShelfPayload,
};
use crate::session::Session;
use exn::{OptionExt, ResultExt};
use reqwest::blocking::{Client, Response};
use reqwest::header::{COOKIE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::instrument;

/// Transport options for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Origin all endpoint paths are resolved against.
    pub base_url: String,
    /// Disables TLS certificate verification for the platform host.
    ///
    /// Some captured sessions sit behind interception proxies whose
    /// certificates do not validate. Off by default; enabling it is an
    /// explicit, logged decision.
    pub accept_invalid_certs: bool,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: consts::DEFAULT_BASE_URL.to_string(),
            accept_invalid_certs: false,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Synchronous client for the reading-platform API.
///
/// One outstanding request at a time, no retry, no backoff: a non-success
/// response surfaces immediately as [`ErrorKind::RemoteFailure`] carrying the
/// raw body text. Every call authenticates by replaying the captured
/// [`Session`] cookies.
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Builds a client with default [`ClientOptions`].
    pub fn new(session: Session) -> Result<Self> {
        Self::with_options(session, ClientOptions::default())
    }

    pub fn with_options(session: Session, options: ClientOptions) -> Result<Self> {
        if options.accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled for {}", options.base_url);
        }
        let http = Client::builder()
            .default_headers(Self::browser_headers())
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.accept_invalid_certs)
            .build()
            .or_raise(|| ErrorKind::Transport)?;
        Ok(Self {
            http,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Chapter listing for a book: the raw table-of-contents nodes in
    /// reading order, ready for flattening.
    ///
    /// The id must be numeric because the endpoint only answers for true
    /// books; callers validate before calling.
    #[instrument(skip(self))]
    pub fn chapter_infos(&self, book_id: u64) -> Result<Vec<ChapterNode>> {
        let body = serde_json::json!({ "bookIds": [book_id.to_string()], "synckeys": [0] });
        let text = self.post_json("/book/chapterInfos", &body)?;
        let payload: ChapterInfoPayload = decode(&text, "/book/chapterInfos")?;
        payload
            .data
            .into_iter()
            .next()
            .map(|sync| sync.updated)
            .ok_or_raise(|| ErrorKind::Decode("/book/chapterInfos"))
    }

    /// The account's own highlights for a book, with the chapter listing
    /// they reference.
    #[instrument(skip(self))]
    pub fn bookmark_list(&self, book_id: &str) -> Result<BookmarkPayload> {
        let text = self.get("/book/bookmarklist", &[("bookId", book_id)])?;
        decode(&text, "/book/bookmarklist")
    }

    /// Platform-curated popular highlights for a book.
    #[instrument(skip(self))]
    pub fn best_bookmarks(&self, book_id: &str) -> Result<BestBookmarksPayload> {
        let text = self.get("/book/bestbookmarks", &[("bookId", book_id)])?;
        decode(&text, "/book/bestbookmarks")
    }

    /// Detail record for a single book.
    #[instrument(skip(self))]
    pub fn book_info(&self, book_id: &str) -> Result<BookInfo> {
        let text = self.get("/book/info", &[("bookId", book_id)])?;
        decode(&text, "/book/info")
    }

    /// The bookshelf listing, keyed on the user id from the session cookies.
    #[instrument(skip(self))]
    pub fn shelf(&self) -> Result<ShelfPayload> {
        let vid = self.session.user_vid()?.to_string();
        let text = self.get("/shelf/friendCommon", &[("userVid", vid.as_str())])?;
        decode(&text, "/shelf/friendCommon")
    }

    /// Books the account has recorded notes for.
    #[instrument(skip(self))]
    pub fn notebooks(&self) -> Result<NotebookPayload> {
        let text = self.get("/user/notebooks", &[])?;
        decode(&text, "/user/notebooks")
    }

    /// Fetches a cover image by absolute URL.
    ///
    /// Cover assets live on a separate image host that wants no cookies, so
    /// this bypasses the session entirely.
    #[instrument(skip(self))]
    pub fn cover_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().or_raise(|| ErrorKind::Transport)?;
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            exn::bail!(ErrorKind::RemoteFailure(body));
        }
        let bytes = response.bytes().or_raise(|| ErrorKind::Transport)?;
        Ok(bytes.to_vec())
    }

    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .query(query)
            .header(COOKIE, self.session.to_string())
            .send()
            .or_raise(|| ErrorKind::Transport)?;
        read_body(response)
    }

    fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<String> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .header(COOKIE, self.session.to_string())
            .send()
            .or_raise(|| ErrorKind::Transport)?;
        read_body(response)
    }

    fn browser_headers() -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(consts::BROWSER_HEADERS.len());
        for (name, value) in consts::BROWSER_HEADERS {
            headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        }
        headers
    }
}

/// Resolves a response into its body text, raising [`ErrorKind::RemoteFailure`]
/// with that same text for any non-success status.
fn read_body(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().or_raise(|| ErrorKind::Transport)?;
    if !status.is_success() {
        exn::bail!(ErrorKind::RemoteFailure(body));
    }
    Ok(body)
}

fn decode<T: DeserializeOwned>(text: &str, endpoint: &'static str) -> Result<T> {
    serde_json::from_str(text).or_raise(|| ErrorKind::Decode(endpoint))
}
