//! aralia - Chart-query validation and paginated data retrieval
//!
//! This library sits between a structured chart-query description (built by
//! an upstream planning step, typically an LLM) and the remote Aralia data
//! planets. It provides:
//! - Dataset/column metadata types (`catalog`)
//! - The admin-level locale catalog for spatial axes (`locale`)
//! - Chart query types and fixed vocabularies (`query`)
//! - Query validation against a dataset's declared columns (`validator`)
//! - An authenticated API client (`transport`)
//! - The paginated exploration fetch (`retrieval`)
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `catalog/` - remote metadata (Dataset, Column, ColumnType)
//! - `locale` - static admin-level table per country and language
//! - `query/` - query request/result types and vocabularies
//!
//! **Verb modules** (transformations):
//! - `validator/` - Query + Datasets → Ok | ValidationError
//! - `transport/` - authenticated GET/POST against the catalog and planets
//! - `retrieval/` - validated Query + transport → QueryResult
//!
//! # Example
//!
//! ```ignore
//! use aralia::{validate_query, run_query, Client, Query};
//!
//! let client = Client::from_env()?;
//! let mut datasets = client.search_datasets("空氣品質")?;
//! for dataset in &mut datasets {
//!     dataset.columns = client.column_info(dataset)?;
//! }
//!
//! let query: Query = serde_json::from_str(planner_output)?;
//! validate_query(&query, &datasets)?;
//! let result = run_query(&client, &query)?;
//! println!("{} rows for {}", result.rows.len(), result.dataset_name);
//! ```

pub mod catalog;
pub mod locale;
pub mod query;
pub mod retrieval;
pub mod transport;
pub mod validator;

// Re-export commonly used types
pub use catalog::{Column, ColumnType, Dataset};
pub use query::{Query, QueryResult, Row, XAxis, YAxis};
pub use retrieval::{run_query, RetrievalError};
pub use transport::{Client, Config, ConfigError, ExplorationApi, TransportError};
pub use validator::{validate_query, Axis, ValidationError};
