//! Query validation (verbs)
//!
//! Checks a chart query against one dataset's declared columns before any
//! network call is made for data. Outcomes are values: a failed validation
//! is an `Err(ValidationError)` for the caller to act on, never a panic.

mod error;
mod validate;

pub use error::{Axis, ValidationError};
pub use validate::{validate_query, validate_x_axis, validate_y_axis};
