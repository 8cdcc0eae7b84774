mod bookmarks;
mod chapters;
mod info;
mod shelf;

pub use self::bookmarks::{BestBookmarkItem, BestBookmarksPayload, BookmarkItem, BookmarkPayload, ChapterRef};
pub use self::chapters::{ChapterAnchor, ChapterInfoPayload, ChapterNode, ChapterSync};
pub use self::info::BookInfo;
pub use self::shelf::{NotebookBook, NotebookEntry, NotebookPayload, ShelfEntry, ShelfPayload};
