//! Chapter directory resolution: flattening the table-of-contents tree.

use margin_client::models::ChapterNode;
use std::collections::HashMap;
use tracing::instrument;

/// One flattened table-of-contents heading: depth plus display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    /// Positive heading depth (1 = top level).
    pub level: u32,
    pub title: String,
}

/// Flattens the chapter-listing tree into an ordered heading sequence.
///
/// For each top-level node, in source order:
/// - a node carrying an `anchors` list (even an empty one) emits itself at
///   its own level (default 1), then one entry per anchor at the anchor's
///   declared level;
/// - a node with an explicit level emits a single entry at that level;
/// - anything else emits a single entry at level 1.
///
/// The output is never sorted: later stages index into this sequence by
/// title to recover heading depth, and that only works if traversal order
/// is preserved exactly.
#[instrument(skip_all, fields(nodes = nodes.len()))]
pub fn flatten_chapters(nodes: &[ChapterNode]) -> Vec<ChapterEntry> {
    let mut entries = Vec::new();
    for node in nodes {
        if let Some(anchors) = &node.anchors {
            entries.push(ChapterEntry {
                level: node.level.unwrap_or(1),
                title: node.title.clone(),
            });
            for anchor in anchors {
                entries.push(ChapterEntry {
                    level: anchor.level,
                    title: anchor.title.clone(),
                });
            }
        } else if let Some(level) = node.level {
            entries.push(ChapterEntry {
                level,
                title: node.title.clone(),
            });
        } else {
            entries.push(ChapterEntry {
                level: 1,
                title: node.title.clone(),
            });
        }
    }
    entries
}

/// Heading depth lookup by chapter title.
///
/// Titles are assumed unique within a book; a duplicate title overwrites the
/// previous mapping, so the last occurrence wins. This is an accepted
/// approximation of the source data, not an error condition.
#[derive(Debug, Clone, Default)]
pub struct ChapterDirectory {
    levels: HashMap<String, u32>,
}

impl ChapterDirectory {
    /// Builds the directory straight from the raw chapter listing.
    pub fn from_nodes(nodes: &[ChapterNode]) -> Self {
        flatten_chapters(nodes).into_iter().collect()
    }

    /// Heading depth for the given chapter title, if the book lists it.
    pub fn level_of(&self, title: &str) -> Option<u32> {
        self.levels.get(title).copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl FromIterator<ChapterEntry> for ChapterDirectory {
    fn from_iter<I: IntoIterator<Item = ChapterEntry>>(entries: I) -> Self {
        let mut levels = HashMap::new();
        for entry in entries {
            levels.insert(entry.title, entry.level);
        }
        Self { levels }
    }
}
