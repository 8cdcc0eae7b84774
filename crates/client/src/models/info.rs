use serde::Deserialize;

/// Response of `GET /book/info`.
///
/// The detail payload carries many more fields than these; only the ones the
/// tabular export consumes are modeled. Everything is optional because the
/// platform omits fields it has no value for.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookInfo {
    pub book_id: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub price: Option<f64>,
}
