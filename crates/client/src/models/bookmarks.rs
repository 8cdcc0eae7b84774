use serde::Deserialize;
use time::OffsetDateTime;

/// Response of `GET /book/bookmarklist`: the account's own highlights.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkPayload {
    /// Chapter listing returned alongside the highlights. Maps each
    /// `chapterUid` to its display title.
    #[serde(default)]
    pub chapters: Vec<ChapterRef>,
    /// Highlight records, in sync (not reading) order.
    #[serde(default)]
    pub updated: Vec<BookmarkItem>,
}

/// A chapter reference from a highlight payload's `chapters` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRef {
    pub chapter_uid: u64,
    pub title: String,
}

/// A positioned highlight: carries a `range` locating it within its chapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkItem {
    pub chapter_uid: u64,
    /// The highlighted span of book text.
    pub mark_text: String,
    /// Unix timestamp of when the highlight was created.
    #[serde(default)]
    pub create_time: Option<i64>,
    /// Character range within the chapter, formatted `"start-end"`.
    #[serde(default)]
    pub range: String,
}

impl BookmarkItem {
    /// Creation time as a calendar timestamp, when the platform recorded one.
    pub fn created_at(&self) -> Option<OffsetDateTime> {
        self.create_time.and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
    }
}

/// Response of `GET /book/bestbookmarks`: highlights popular among all
/// readers of a book. Same envelope shape as [`BookmarkPayload`] but the
/// records live under `items` and carry no position information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestBookmarksPayload {
    #[serde(default)]
    pub chapters: Vec<ChapterRef>,
    #[serde(default)]
    pub items: Vec<BestBookmarkItem>,
}

/// An unpositioned aggregate highlight.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestBookmarkItem {
    pub chapter_uid: u64,
    pub mark_text: String,
}
