//! Dataset metadata from the remote catalog

use serde::{Deserialize, Serialize};
use super::column::Column;

/// A dataset - the queryable entity on a data planet.
///
/// `source_url` is the API base endpoint the dataset's rows must be fetched
/// from. Columns arrive in catalog order; order is irrelevant for validation
/// and only matters for display.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "sourceType", default)]
    pub source_type: String,
    #[serde(rename = "siteName", default)]
    pub site_name: String,
    /// API base endpoint for this dataset's rows
    #[serde(rename = "sourceURL")]
    pub source_url: String,
    /// Column metadata; empty until fetched from the dataset's source
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Dataset {
    /// Get a column by id
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Check that every column declares this dataset as its owner
    pub fn owns_columns(&self) -> bool {
        self.columns.iter().all(|c| c.dataset_id == self.id)
    }
}
