//! Chart query request types
//!
//! A query is built by an upstream planning step against one dataset's
//! metadata. Axis records carry denormalized copies of the column name and
//! type; those copies are untrusted and are exactly what the validator
//! cross-checks against the catalog. `calculation` and `format` stay raw
//! strings so out-of-vocabulary values reach the validator instead of dying
//! in deserialization.

use serde::{Deserialize, Serialize};
use crate::catalog::ColumnType;

/// One x-axis of a chart query
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct XAxis {
    /// Column id; must come from the query's dataset
    #[serde(rename = "columnID")]
    pub column_id: String,
    /// Denormalized copy of the column's name; must agree with `column_id`
    pub column_name: String,
    /// Denormalized copy of the column's type; must agree with `column_id`
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Where the dataset is from; only checked when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub language: String,
    /// Temporal bucket keyword for date/datetime columns, or an admin-level
    /// key for spatial columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// One y-axis of a chart query
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YAxis {
    /// Column id; must come from the query's dataset
    #[serde(rename = "columnID")]
    pub column_id: String,
    /// Denormalized copy of the column's name; must agree with `column_id`
    pub column_name: String,
    /// Denormalized copy of the column's type; must agree with `column_id`
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Aggregation function applied to the column
    pub calculation: String,
}

/// A chart query against a single dataset.
///
/// `source_url`, `dataset_id` and `dataset_name` must all match the referenced
/// dataset's own fields. A query may use up to three x-axes and up to two
/// y-axes. Never mutated after construction.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Query {
    #[serde(rename = "sourceURL")]
    pub source_url: String,
    pub dataset_id: String,
    pub dataset_name: String,
    pub x: Vec<XAxis>,
    pub y: Vec<YAxis>,
}

impl Query {
    /// Comma-joined x-axis column names, for result labelling
    pub fn x_label(&self) -> String {
        self.x
            .iter()
            .map(|a| a.column_name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Comma-joined y-axis column names, for result labelling
    pub fn y_label(&self) -> String {
        self.y
            .iter()
            .map(|a| a.column_name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
