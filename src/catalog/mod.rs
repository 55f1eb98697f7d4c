//! Dataset metadata types (nouns)
//!
//! These types mirror what the remote catalog declares about a dataset and
//! its columns. They are loaded once and never mutated.

mod column;
mod dataset;
mod types;

pub use column::Column;
pub use dataset::Dataset;
pub use types::ColumnType;
