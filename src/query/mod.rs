//! Chart query types (nouns)
//!
//! Request records produced by the upstream planner, the fixed vocabularies
//! their fields are validated against, and the result shape returned by the
//! retrieval engine.

mod request;
mod result;
pub mod vocab;

pub use request::{Query, XAxis, YAxis};
pub use result::{QueryResult, Row};
