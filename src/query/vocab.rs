//! Fixed vocabularies for chart queries
//!
//! Every admissible-value set the validator checks is hoisted here as a named
//! constant so the rules are testable in one place. Axis records keep these
//! fields as raw strings: queries come from an upstream planner that may emit
//! anything, and an out-of-vocabulary value has to survive deserialization so
//! the validator can report it.

use crate::catalog::ColumnType;

/// Temporal bucket keywords accepted as `format` on date/datetime x-axes
pub const TEMPORAL_FORMATS: [&str; 17] = [
    "year",
    "quarter",
    "month",
    "week",
    "date",
    "day",
    "weekday",
    "year_month",
    "year_quarter",
    "year_week",
    "month_day",
    "day_hour",
    "hour",
    "minute",
    "second",
    "hour_minute",
    "time",
];

/// Aggregation functions accepted as `calculation` on y-axes
pub const CALCULATIONS: [&str; 6] = ["count", "sum", "avg", "min", "max", "distinct_count"];

/// Countries with a locale/format catalog
pub const SUPPORTED_COUNTRIES: [&str; 1] = ["Taiwan"];

/// Supported locale tags
pub const LANGUAGES: [&str; 3] = ["zh-tw", "zh-cn", "en"];

/// Calculations permitted on categorical (nominal/ordinal) columns
pub const CATEGORICAL_CALCULATIONS: [&str; 2] = ["count", "distinct_count"];

/// Calculations permitted on temporal (date/datetime) columns
pub const TEMPORAL_CALCULATIONS: [&str; 4] = ["count", "min", "max", "distinct_count"];

/// Calculations permitted for a column type, beyond the global set.
///
/// `None` means no per-type restriction applies. Numeric types deliberately
/// map to `None`: the global `CALCULATIONS` set is their only constraint.
pub fn permitted_calculations(column_type: &ColumnType) -> Option<&'static [&'static str]> {
    if column_type.is_categorical() {
        Some(&CATEGORICAL_CALCULATIONS)
    } else if column_type.is_temporal() {
        Some(&TEMPORAL_CALCULATIONS)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporal_format_vocabulary() {
        assert_eq!(TEMPORAL_FORMATS.len(), 17);
        assert!(TEMPORAL_FORMATS.contains(&"year"));
        assert!(TEMPORAL_FORMATS.contains(&"time"));
        assert!(!TEMPORAL_FORMATS.contains(&"decade"));
    }

    #[test]
    fn test_categorical_restriction() {
        let permitted = permitted_calculations(&ColumnType::Nominal).unwrap();
        assert!(permitted.contains(&"count"));
        assert!(permitted.contains(&"distinct_count"));
        assert!(!permitted.contains(&"avg"));

        assert_eq!(
            permitted_calculations(&ColumnType::Ordinal),
            permitted_calculations(&ColumnType::Nominal)
        );
    }

    #[test]
    fn test_temporal_restriction() {
        let permitted = permitted_calculations(&ColumnType::Date).unwrap();
        assert!(permitted.contains(&"min"));
        assert!(permitted.contains(&"max"));
        assert!(!permitted.contains(&"sum"));
        assert!(!permitted.contains(&"avg"));
    }

    #[test]
    fn test_numeric_types_are_unrestricted() {
        assert!(permitted_calculations(&ColumnType::Integer).is_none());
        assert!(permitted_calculations(&ColumnType::Float).is_none());
        assert!(permitted_calculations(&ColumnType::Other("boolean".into())).is_none());
    }

    #[test]
    fn test_restrictions_are_subsets_of_the_global_set() {
        for c in CATEGORICAL_CALCULATIONS.iter().chain(TEMPORAL_CALCULATIONS.iter()) {
            assert!(CALCULATIONS.contains(c), "{} not in global set", c);
        }
    }
}
