//! Column type vocabulary

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Declared type of a dataset column.
///
/// The remote catalog uses a fixed vocabulary, but validation only defines
/// rules for a subset of it (temporal, spatial and categorical types). Any
/// type outside the known vocabulary is preserved as `Other` so that axis
/// records can still be compared against the catalog by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    /// Unordered categorical values
    Nominal,
    /// Ordered categorical values
    Ordinal,
    /// Spatial/geographic values, bucketed by administrative level
    Space,
    /// Calendar date
    Date,
    /// Date with time component
    Datetime,
    /// Integer numeric values
    Integer,
    /// Floating point numeric values
    Float,
    /// Any type the validator has no rule for
    Other(String),
}

impl From<&str> for ColumnType {
    fn from(s: &str) -> Self {
        // Exact match on purpose: "Date" and "date" are different types as far
        // as the denormalization cross-check is concerned.
        match s {
            "nominal" => ColumnType::Nominal,
            "ordinal" => ColumnType::Ordinal,
            "space" => ColumnType::Space,
            "date" => ColumnType::Date,
            "datetime" => ColumnType::Datetime,
            "integer" => ColumnType::Integer,
            "float" => ColumnType::Float,
            other => ColumnType::Other(other.to_string()),
        }
    }
}

impl FromStr for ColumnType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ColumnType::from(s))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Nominal => write!(f, "nominal"),
            ColumnType::Ordinal => write!(f, "ordinal"),
            ColumnType::Space => write!(f, "space"),
            ColumnType::Date => write!(f, "date"),
            ColumnType::Datetime => write!(f, "datetime"),
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Other(s) => write!(f, "{}", s),
        }
    }
}

impl ColumnType {
    /// Check if this is a temporal type (date or datetime)
    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::Date | ColumnType::Datetime)
    }

    /// Check if this is a categorical type (nominal or ordinal)
    pub fn is_categorical(&self) -> bool {
        matches!(self, ColumnType::Nominal | ColumnType::Ordinal)
    }

    /// Check if this is the spatial type
    pub fn is_spatial(&self) -> bool {
        matches!(self, ColumnType::Space)
    }

    /// Check if this is a numeric type (integer or float)
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

// Custom deserialize from string
impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ColumnType::from(s.as_str()))
    }
}

// Serialize back to string
impl Serialize for ColumnType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
