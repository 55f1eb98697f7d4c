//! API transport (verbs)
//!
//! Authenticated request execution against the galaxy catalog and the
//! per-dataset source planets. The credential and base URL are read once at
//! client construction; every failure after that is a typed
//! [`TransportError`].

mod client;
mod config;
mod error;

pub use client::Client;
pub use config::{Config, ENDPOINT_VAR, TOKEN_VAR};
pub use error::{ConfigError, TransportError};

use crate::query::{Query, Row};

/// One page of the exploration protocol.
///
/// The seam between the retrieval engine and the network: [`Client`]
/// implements it with a POST to the dataset's source planet, tests implement
/// it with scripted pages.
pub trait ExplorationApi {
    /// Fetch the page of rows beginning at the 1-based cursor `start`
    fn exploration_page(&self, query: &Query, start: u32) -> Result<Vec<Row>, TransportError>;
}
