//! Column metadata from the remote catalog

use serde::{Deserialize, Serialize};
use super::types::ColumnType;

/// A dataset column as declared by the remote catalog.
///
/// Immutable once loaded; the display fields are carried for the upstream
/// planning layer and play no part in validation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Column {
    pub id: String,
    pub name: String,
    /// Declared type (e.g., nominal, space, date, float)
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Id of the dataset this column belongs to
    #[serde(rename = "datasetID", default)]
    pub dataset_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(rename = "ordinalPosition", default)]
    pub ordinal_position: u32,
    #[serde(rename = "sortingSettingID", default)]
    pub sorting_setting_id: String,
    #[serde(default)]
    pub visible: bool,
}
