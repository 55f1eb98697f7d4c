//! Chart query validation
//!
//! Proves that a proposed query is consistent with a dataset's declared
//! column metadata before any data is fetched. Checks short-circuit: the
//! first failing axis determines the outcome and later axes are never
//! examined.

use crate::catalog::{Column, Dataset};
use crate::locale;
use crate::query::vocab;
use crate::query::{Query, XAxis, YAxis};
use super::error::{Axis, ValidationError};

/// Validate a chart query against the datasets it was built from.
///
/// Locates the dataset named by `query.dataset_id`, cross-checks the query's
/// denormalized dataset fields, then runs every x-axis and y-axis check in
/// order. Pure: the same inputs always yield the same outcome.
pub fn validate_query(query: &Query, datasets: &[Dataset]) -> Result<(), ValidationError> {
    let dataset = datasets
        .iter()
        .find(|d| d.id == query.dataset_id)
        .ok_or_else(|| ValidationError::DatasetNotFound {
            dataset_id: query.dataset_id.clone(),
        })?;

    if query.source_url != dataset.source_url {
        return Err(ValidationError::SourceUrlMismatch {
            query: query.source_url.clone(),
            dataset: dataset.source_url.clone(),
        });
    }
    if query.dataset_name != dataset.name {
        return Err(ValidationError::DatasetNameMismatch {
            query: query.dataset_name.clone(),
            dataset: dataset.name.clone(),
        });
    }

    for x in &query.x {
        validate_x_axis(x, &dataset.columns)?;
    }
    for y in &query.y {
        validate_y_axis(y, &dataset.columns)?;
    }

    Ok(())
}

/// Validate one x-axis against a dataset's columns.
///
/// Beyond the denormalization cross-check, the `format` rule depends on the
/// column type: temporal columns take a bucket keyword, spatial columns take
/// an admin-level key for the axis locale, and every other type imposes no
/// format rule at all.
pub fn validate_x_axis(axis: &XAxis, columns: &[Column]) -> Result<(), ValidationError> {
    let column = find_column(columns, &axis.column_id, Axis::X)?;
    check_denormalized_fields(Axis::X, &axis.column_name, &axis.column_type, column)?;

    if let Some(country) = &axis.country {
        if !vocab::SUPPORTED_COUNTRIES.contains(&country.as_str()) {
            return Err(ValidationError::InvalidCountry {
                country: country.clone(),
            });
        }
    }
    if !vocab::LANGUAGES.contains(&axis.language.as_str()) {
        return Err(ValidationError::InvalidLanguage {
            language: axis.language.clone(),
        });
    }

    if axis.column_type.is_temporal() {
        let format = axis.format.as_deref().unwrap_or("");
        if !vocab::TEMPORAL_FORMATS.contains(&format) {
            return Err(ValidationError::InvalidTemporalFormat {
                format: format.to_string(),
                column_type: axis.column_type.to_string(),
            });
        }
    }

    if axis.column_type.is_spatial() {
        // A spatial axis without a country cannot name an admin level
        let country = axis.country.as_deref().unwrap_or("");
        let format = axis.format.as_deref().unwrap_or("");
        if !locale::is_admin_level(country, &axis.language, format) {
            return Err(ValidationError::InvalidAdminLevel {
                format: format.to_string(),
                country: country.to_string(),
                language: axis.language.clone(),
            });
        }
    }

    Ok(())
}

/// Validate one y-axis against a dataset's columns.
///
/// The calculation must be in the global vocabulary and, for categorical and
/// temporal columns, in the per-type restriction set. Numeric types carry no
/// restriction beyond the global vocabulary.
pub fn validate_y_axis(axis: &YAxis, columns: &[Column]) -> Result<(), ValidationError> {
    let column = find_column(columns, &axis.column_id, Axis::Y)?;
    check_denormalized_fields(Axis::Y, &axis.column_name, &axis.column_type, column)?;

    if !vocab::CALCULATIONS.contains(&axis.calculation.as_str()) {
        return Err(ValidationError::InvalidCalculation {
            calculation: axis.calculation.clone(),
        });
    }

    if let Some(permitted) = vocab::permitted_calculations(&axis.column_type) {
        if !permitted.contains(&axis.calculation.as_str()) {
            return Err(ValidationError::CalculationNotPermitted {
                calculation: axis.calculation.clone(),
                column_type: axis.column_type.to_string(),
                permitted: permitted
                    .iter()
                    .map(|c| format!("'{}'", c))
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
    }

    Ok(())
}

fn find_column<'a>(
    columns: &'a [Column],
    column_id: &str,
    axis: Axis,
) -> Result<&'a Column, ValidationError> {
    columns
        .iter()
        .find(|c| c.id == column_id)
        .ok_or_else(|| ValidationError::ColumnNotFound {
            axis,
            column_id: column_id.to_string(),
        })
}

/// Check an axis's denormalized name/type copies against the catalog column
fn check_denormalized_fields(
    axis: Axis,
    column_name: &str,
    column_type: &crate::catalog::ColumnType,
    column: &Column,
) -> Result<(), ValidationError> {
    if column_name != column.name {
        return Err(ValidationError::ColumnNameMismatch {
            axis,
            column_name: column_name.to_string(),
            column_id: column.id.clone(),
        });
    }
    if *column_type != column.column_type {
        return Err(ValidationError::TypeMismatch {
            axis,
            column_name: column_name.to_string(),
            given: column_type.to_string(),
            expected: column.column_type.to_string(),
        });
    }
    Ok(())
}
