//! Aggregate-highlight merging: platform-curated "best" highlights.
//!
//! Deliberately a separate algorithm from [`crate::bookmarks`], not a shared
//! one. The two differ in ways that are part of the observable contract:
//! best highlights carry no position, so intra-chapter order is arrival
//! order, and chapters emit in the order the payload lists them rather than
//! sorted by numeric uid.

use crate::directory::ChapterDirectory;
use crate::error::{ErrorKind, Result};
use crate::render;
use exn::OptionExt;
use margin_client::models::BestBookmarksPayload;
use std::collections::{HashMap, HashSet};
use tracing::instrument;

/// Merges a book's aggregate highlights into a Markdown document.
///
/// # Errors
///
/// [`ErrorKind::DirectoryMismatch`] when a chapter title from the payload is
/// absent from `directory`.
#[instrument(skip_all, fields(chapters = payload.chapters.len(), highlights = payload.items.len()))]
pub fn render_best_bookmarks(directory: &ChapterDirectory, payload: &BestBookmarksPayload) -> Result<String> {
    let known: HashSet<u64> = payload.chapters.iter().map(|chapter| chapter.chapter_uid).collect();

    let mut grouped: HashMap<u64, Vec<&str>> = HashMap::new();
    for item in &payload.items {
        if !known.contains(&item.chapter_uid) {
            tracing::warn!(
                chapter_uid = item.chapter_uid,
                "dropping highlight: chapter is absent from the payload's own listing"
            );
            continue;
        }
        grouped.entry(item.chapter_uid).or_default().push(item.mark_text.as_str());
    }

    let mut out = String::new();
    for chapter in &payload.chapters {
        let level = directory.level_of(&chapter.title).ok_or_raise(|| ErrorKind::DirectoryMismatch {
            title: chapter.title.clone(),
        })?;
        render::push_heading(&mut out, level, &chapter.title);
        if let Some(texts) = grouped.get(&chapter.chapter_uid) {
            for text in texts {
                render::push_quote(&mut out, text);
            }
        }
        out.push('\n');
    }
    Ok(out)
}
