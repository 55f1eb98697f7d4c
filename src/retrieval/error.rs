//! Retrieval error types

use thiserror::Error;
use crate::transport::TransportError;

/// A paginated fetch that failed partway.
///
/// Wraps the underlying transport fault with the dataset name for context.
/// Everything accumulated before the fault is discarded; no partial result
/// is ever returned.
#[derive(Debug, Error)]
#[error("Error fetching rows for dataset '{dataset_name}': {source}")]
pub struct RetrievalError {
    pub dataset_name: String,
    #[source]
    pub source: TransportError,
}
