//! Bookmark merging: the account's own positioned highlights.

use crate::directory::ChapterDirectory;
use crate::error::{ErrorKind, Result};
use crate::render;
use exn::{OptionExt, ResultExt};
use margin_client::models::BookmarkPayload;
use std::collections::{BTreeMap, HashMap};
use tracing::instrument;

/// Merges a book's positioned highlights into a chapter-ordered Markdown
/// document.
///
/// Chapters emit in ascending numeric `chapterUid` order, which is not
/// necessarily reading order; this quirk is part of the output contract.
/// Within a chapter, highlights sort by ascending start offset with ties
/// broken by arrival order. Every chapter the payload lists gets a heading,
/// highlights or not.
///
/// # Errors
///
/// - [`ErrorKind::DirectoryMismatch`] when a chapter title from the payload
///   is absent from `directory` — the heading depth would otherwise be a
///   silent guess.
/// - [`ErrorKind::ParseError`] when a highlight's `range` field does not
///   start with an integer offset.
#[instrument(skip_all, fields(chapters = payload.chapters.len(), highlights = payload.updated.len()))]
pub fn render_bookmarks(directory: &ChapterDirectory, payload: &BookmarkPayload) -> Result<String> {
    // BTreeMap both deduplicates and fixes the ascending-uid emission order.
    let index: BTreeMap<u64, &str> = payload
        .chapters
        .iter()
        .map(|chapter| (chapter.chapter_uid, chapter.title.as_str()))
        .collect();

    let mut grouped: HashMap<u64, Vec<(u64, &str)>> = HashMap::new();
    for item in &payload.updated {
        if !index.contains_key(&item.chapter_uid) {
            tracing::warn!(
                chapter_uid = item.chapter_uid,
                "dropping highlight: chapter is absent from the payload's own listing"
            );
            continue;
        }
        let start = range_start(&item.range)?;
        grouped
            .entry(item.chapter_uid)
            .or_default()
            .push((start, item.mark_text.as_str()));
    }

    let mut out = String::new();
    for (uid, title) in &index {
        let level = directory
            .level_of(title)
            .ok_or_raise(|| ErrorKind::DirectoryMismatch { title: (*title).to_string() })?;
        render::push_heading(&mut out, level, title);
        if let Some(marks) = grouped.get_mut(uid) {
            // Stable sort: equal offsets keep their arrival order.
            marks.sort_by_key(|(start, _)| *start);
            for (_, text) in marks.iter() {
                render::push_quote(&mut out, text);
            }
        }
        out.push('\n');
    }
    Ok(out)
}

/// Start offset of a `"start-end"` range string.
fn range_start(range: &str) -> Result<u64> {
    let start = range.split('-').next().unwrap_or_default();
    start.parse::<u64>().or_raise(|| ErrorKind::ParseError {
        field: "range",
        value: range.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::ChapterEntry;
    use margin_client::models::{BookmarkItem, ChapterRef};
    use rstest::rstest;

    fn chapter(uid: u64, title: &str) -> ChapterRef {
        ChapterRef {
            chapter_uid: uid,
            title: title.to_string(),
        }
    }

    fn highlight(uid: u64, text: &str, range: &str) -> BookmarkItem {
        BookmarkItem {
            chapter_uid: uid,
            mark_text: text.to_string(),
            create_time: None,
            range: range.to_string(),
        }
    }

    fn directory(entries: &[(u32, &str)]) -> ChapterDirectory {
        entries
            .iter()
            .map(|(level, title)| ChapterEntry {
                level: *level,
                title: (*title).to_string(),
            })
            .collect()
    }

    #[test]
    fn orders_highlights_by_start_offset() {
        let payload = BookmarkPayload {
            chapters: vec![chapter(1, "Ch1")],
            updated: vec![
                highlight(1, "b", "50-60"),
                highlight(1, "a", "10-20"),
                highlight(1, "c", "30-40"),
            ],
        };
        let text = render_bookmarks(&directory(&[(1, "Ch1")]), &payload).unwrap();
        assert_eq!(text, "# Ch1\n> a\n\n> c\n\n> b\n\n\n");
    }

    #[test]
    fn equal_offsets_keep_arrival_order() {
        let payload = BookmarkPayload {
            chapters: vec![chapter(1, "Ch1")],
            updated: vec![
                highlight(1, "first", "10-15"),
                highlight(1, "second", "10-12"),
            ],
        };
        let text = render_bookmarks(&directory(&[(1, "Ch1")]), &payload).unwrap();
        let first = text.find("first").unwrap();
        let second = text.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn chapters_emit_in_ascending_uid_order() {
        let payload = BookmarkPayload {
            chapters: vec![chapter(9, "Nine"), chapter(2, "Two"), chapter(5, "Five")],
            updated: vec![
                highlight(9, "n", "1-2"),
                highlight(2, "t", "1-2"),
                highlight(5, "f", "1-2"),
            ],
        };
        let dir = directory(&[(1, "Nine"), (1, "Two"), (1, "Five")]);
        let text = render_bookmarks(&dir, &payload).unwrap();
        let positions: Vec<_> = ["Two", "Five", "Nine"].iter().map(|t| text.find(*t).unwrap()).collect();
        assert!(positions[0] < positions[1] && positions[1] < positions[2]);
    }

    #[test]
    fn chapter_without_highlights_still_gets_heading() {
        let payload = BookmarkPayload {
            chapters: vec![chapter(1, "Ch1"), chapter(2, "Ch2")],
            updated: vec![highlight(2, "only", "5-6")],
        };
        let dir = directory(&[(1, "Ch1"), (2, "Ch2")]);
        let text = render_bookmarks(&dir, &payload).unwrap();
        assert_eq!(text, "# Ch1\n\n## Ch2\n> only\n\n\n");
    }

    #[test]
    fn missing_directory_title_is_surfaced_not_defaulted() {
        let payload = BookmarkPayload {
            chapters: vec![chapter(1, "Ghost Chapter")],
            updated: vec![],
        };
        let err = render_bookmarks(&ChapterDirectory::default(), &payload).unwrap_err();
        assert_eq!(
            *err,
            ErrorKind::DirectoryMismatch {
                title: "Ghost Chapter".to_string()
            }
        );
    }

    #[test]
    fn highlight_for_unlisted_chapter_is_dropped() {
        let payload = BookmarkPayload {
            chapters: vec![chapter(1, "Ch1")],
            updated: vec![highlight(1, "kept", "1-2"), highlight(77, "orphan", "1-2")],
        };
        let text = render_bookmarks(&directory(&[(1, "Ch1")]), &payload).unwrap();
        assert!(text.contains("kept"));
        assert!(!text.contains("orphan"));
    }

    #[rstest]
    #[case("")]
    #[case("abc-10")]
    #[case("-5")]
    fn unparsable_range_is_an_error(#[case] range: &str) {
        let payload = BookmarkPayload {
            chapters: vec![chapter(1, "Ch1")],
            updated: vec![highlight(1, "text", range)],
        };
        let err = render_bookmarks(&directory(&[(1, "Ch1")]), &payload).unwrap_err();
        assert!(matches!(*err, ErrorKind::ParseError { field: "range", .. }));
    }

    #[test]
    fn output_is_deterministic() {
        let payload = BookmarkPayload {
            chapters: vec![chapter(3, "C"), chapter(1, "A"), chapter(2, "B")],
            updated: vec![
                highlight(2, "x", "9-10"),
                highlight(1, "y", "4-5"),
                highlight(2, "z", "2-3"),
            ],
        };
        let dir = directory(&[(1, "A"), (2, "B"), (1, "C")]);
        let first = render_bookmarks(&dir, &payload).unwrap();
        let second = render_bookmarks(&dir, &payload).unwrap();
        assert_eq!(first, second);
    }

    /// The end-to-end shape: fixture chapter listing through flattening,
    /// directory construction, and rendering.
    #[test]
    fn reconstructs_notes_from_fixture_payloads() {
        use crate::directory::flatten_chapters;
        use margin_client::models::ChapterNode;

        let nodes: Vec<ChapterNode> = serde_json::from_str(
            r#"[
                {"title": "Ch1", "level": 1},
                {"title": "Ch2", "anchors": [{"title": "Ch2.1", "level": 2}]}
            ]"#,
        )
        .unwrap();
        let entries = flatten_chapters(&nodes);
        assert_eq!(
            entries,
            vec![
                ChapterEntry { level: 1, title: "Ch1".to_string() },
                ChapterEntry { level: 1, title: "Ch2".to_string() },
                ChapterEntry { level: 2, title: "Ch2.1".to_string() },
            ]
        );

        let payload: BookmarkPayload = serde_json::from_str(
            r#"{
                "chapters": [
                    {"chapterUid": 9, "title": "Ch1"},
                    {"chapterUid": 12, "title": "Ch2.1"}
                ],
                "updated": [
                    {"chapterUid": 12, "markText": "nested note", "createTime": 1700000000, "range": "7-9"},
                    {"chapterUid": 9, "markText": "opening note", "range": "100-120"}
                ]
            }"#,
        )
        .unwrap();
        let dir: ChapterDirectory = entries.into_iter().collect();
        let text = render_bookmarks(&dir, &payload).unwrap();
        assert_eq!(text, "# Ch1\n> opening note\n\n\n## Ch2.1\n> nested note\n\n\n");
    }
}
