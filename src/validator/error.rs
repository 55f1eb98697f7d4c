//! Validation failure reasons

use std::fmt;
use thiserror::Error;

/// Which axis a failure was found on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "XAxis"),
            Axis::Y => write!(f, "YAxis"),
        }
    }
}

/// A rejected chart query.
///
/// Validation failures are data, not faults: the validator hands them back to
/// the caller (typically so the upstream planner can be re-prompted) and never
/// panics for well-formed input. The first failing check wins; later axes are
/// not examined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Dataset with ID '{dataset_id}' not found in provided datasets.")]
    DatasetNotFound { dataset_id: String },

    #[error("Query sourceURL '{query}' does not match dataset sourceURL '{dataset}'.")]
    SourceUrlMismatch { query: String, dataset: String },

    #[error("Query dataset_name '{query}' does not match dataset name '{dataset}'.")]
    DatasetNameMismatch { query: String, dataset: String },

    #[error("{axis} columnID '{column_id}' not found in dataset columns.")]
    ColumnNotFound { axis: Axis, column_id: String },

    #[error("{axis} column_name '{column_name}' does not match with columnID '{column_id}' in dataset.")]
    ColumnNameMismatch {
        axis: Axis,
        column_name: String,
        column_id: String,
    },

    #[error("{axis} type '{given}' for column '{column_name}' does not match expected type '{expected}' in dataset.")]
    TypeMismatch {
        axis: Axis,
        column_name: String,
        given: String,
        expected: String,
    },

    #[error("XAxis country '{country}' is invalid. Expected 'Taiwan'.")]
    InvalidCountry { country: String },

    #[error("XAxis language '{language}' is invalid. Expected one of ['zh-tw', 'zh-cn', 'en'].")]
    InvalidLanguage { language: String },

    #[error("XAxis format '{format}' is invalid for type '{column_type}'. Expected a temporal bucket keyword such as 'year' or 'month'.")]
    InvalidTemporalFormat { format: String, column_type: String },

    #[error("XAxis format '{format}' is not a valid admin level for country '{country}' and language '{language}'.")]
    InvalidAdminLevel {
        format: String,
        country: String,
        language: String,
    },

    #[error("YAxis calculation '{calculation}' is invalid. Expected one of ['count', 'sum', 'avg', 'min', 'max', 'distinct_count'].")]
    InvalidCalculation { calculation: String },

    #[error("YAxis calculation '{calculation}' is not valid for type '{column_type}'. Expected one of [{permitted}].")]
    CalculationNotPermitted {
        calculation: String,
        column_type: String,
        permitted: String,
    },
}
