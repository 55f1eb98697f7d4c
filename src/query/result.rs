//! Query result types

use serde::{Deserialize, Serialize};

/// One fetched row: a mapping from column label to value
pub type Row = serde_json::Map<String, serde_json::Value>;

/// The outcome of a successful paginated fetch.
///
/// Derived per retrieval, never persisted. `x` and `y` are the comma-joined
/// axis column names; `rows` holds at most the last
/// [`RESULT_WINDOW`](crate::retrieval::RESULT_WINDOW) rows fetched.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryResult {
    pub dataset_name: String,
    /// Comma-joined x-axis labels
    pub x: String,
    /// Comma-joined y-axis labels
    pub y: String,
    #[serde(rename = "charts_data")]
    pub rows: Vec<Row>,
}
