use serde::Deserialize;

/// Response envelope of `POST /book/chapterInfos`.
///
/// The endpoint is a bulk sync API: one [`ChapterSync`] per requested book id.
/// This client only ever asks for a single book at a time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterInfoPayload {
    #[serde(default)]
    pub data: Vec<ChapterSync>,
}

/// Chapter sync state for one book.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSync {
    #[serde(default)]
    pub book_id: Option<String>,
    /// Table-of-contents nodes in reading order.
    #[serde(default)]
    pub updated: Vec<ChapterNode>,
}

/// One top-level table-of-contents node.
///
/// The presence of the `anchors` key (even with an empty list) changes how the
/// node is flattened, so it is modeled as `Option<Vec<_>>` rather than a bare
/// defaulted vector.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterNode {
    pub title: String,
    /// Heading depth. Absent for books without nested structure.
    #[serde(default)]
    pub level: Option<u32>,
    /// Sub-headings within the same physical chapter.
    #[serde(default)]
    pub anchors: Option<Vec<ChapterAnchor>>,
}

/// A sub-heading nested within a chapter's top-level node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterAnchor {
    pub title: String,
    pub level: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinguishes_absent_anchors_from_empty() {
        let with_empty: ChapterNode = serde_json::from_str(r#"{"title": "Ch1", "anchors": []}"#).unwrap();
        assert_eq!(with_empty.anchors.map(|anchors| anchors.len()), Some(0));

        let without: ChapterNode = serde_json::from_str(r#"{"title": "Ch1"}"#).unwrap();
        assert!(without.anchors.is_none());
    }
}
