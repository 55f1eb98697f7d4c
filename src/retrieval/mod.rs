//! Paginated retrieval engine (verbs)
//!
//! Fetches every matching row for a validated query under the exploration
//! paging protocol, with a hard page ceiling and a final result window.

mod error;
mod fetch;

pub use error::RetrievalError;
pub use fetch::{run_query, PAGE_SIZE, RESULT_WINDOW, START_CEILING};
