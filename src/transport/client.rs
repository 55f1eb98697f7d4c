//! Authenticated API client
//!
//! Low-level request execution against a configurable base URL, plus the
//! catalog operations built on it (dataset search, column metadata) and the
//! exploration-page call the retrieval engine drives. Holds no per-call
//! state beyond the base URL and credential, so one instance can be shared
//! across threads.

use serde_json::Value;
use std::error::Error as _;
use tracing::debug;
use ureq::Agent;

use crate::catalog::{Column, Dataset};
use crate::query::{Query, Row};
use super::config::Config;
use super::error::{ConfigError, TransportError};
use super::ExplorationApi;

#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    http: Agent,
}

impl Client {
    pub fn new(config: Config) -> Self {
        let http = ureq::AgentBuilder::new()
            .timeout_read(config.timeout)
            .timeout_write(config.timeout)
            .timeout_connect(config.timeout)
            .build();
        Self { config, http }
    }

    /// Build a client from `ARALIA_ENDPOINT` and `ARALIA_TOKEN`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(Config::from_env()?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute one authenticated request and return the response payload.
    ///
    /// `method` must be GET (payload sent as query parameters) or POST
    /// (payload sent as a JSON body); anything else is an `InvalidMethod`
    /// fault. `base_url` overrides the configured endpoint, which is how
    /// per-dataset `sourceURL`s are reached.
    pub fn request(
        &self,
        method: &str,
        path: &str,
        payload: &Value,
        base_url: Option<&str>,
    ) -> Result<Value, TransportError> {
        let base = base_url.unwrap_or(&self.config.endpoint);
        let url = format!("{}{}", base, path);
        let method = method.to_uppercase();
        debug!(%method, %url, "api request");

        let authorization = format!("Bearer {}", self.config.token);
        let response = match method.as_str() {
            "GET" => {
                let mut req = self.http.get(&url).set("Authorization", &authorization);
                if let Some(params) = payload.as_object() {
                    for (key, value) in params {
                        req = req.query(key, &query_value(value));
                    }
                }
                req.call()
            }
            "POST" => self
                .http
                .post(&url)
                .set("Authorization", &authorization)
                .send_json(payload.clone()),
            _ => return Err(TransportError::InvalidMethod(method)),
        }
        .map_err(map_transport_error)?;

        let body: Value = response
            .into_json()
            .map_err(|e| TransportError::Unexpected(e.to_string()))?;
        Ok(extract_payload(body))
    }

    /// Search the galaxy catalog for datasets matching a keyword.
    ///
    /// Each result's `sourceURL` points at the planet's admin console; it is
    /// rewritten to the planet's API base before being returned.
    pub fn search_datasets(&self, keyword: &str) -> Result<Vec<Dataset>, TransportError> {
        let params = serde_json::json!({ "keyword": keyword, "pageSize": 10 });
        let payload = self.request("GET", "/galaxy/dataset", &params, None)?;

        let mut datasets: Vec<Dataset> = serde_json::from_value(payload)
            .map_err(|e| TransportError::Unexpected(e.to_string()))?;
        for dataset in &mut datasets {
            dataset.source_url = planet_api_url(&dataset.source_url);
        }
        Ok(datasets)
    }

    /// Fetch the column metadata for a dataset from its own source planet
    pub fn column_info(&self, dataset: &Dataset) -> Result<Vec<Column>, TransportError> {
        let path = format!("/dataset/{}", dataset.id);
        let payload = self.request("GET", &path, &Value::Null, Some(&dataset.source_url))?;

        let columns = payload.get("columns").cloned().unwrap_or(Value::Null);
        serde_json::from_value(columns).map_err(|e| TransportError::Unexpected(e.to_string()))
    }
}

impl ExplorationApi for Client {
    fn exploration_page(&self, query: &Query, start: u32) -> Result<Vec<Row>, TransportError> {
        let path = format!("/exploration/{}?start={}", query.dataset_id, start);
        let body = serde_json::to_value(query)
            .map_err(|e| TransportError::Unexpected(e.to_string()))?;
        let payload = self.request("POST", &path, &body, Some(&query.source_url))?;
        serde_json::from_value(payload).map_err(|e| TransportError::Unexpected(e.to_string()))
    }
}

/// Pull the payload out of a response envelope.
///
/// Responses are JSON objects with a `data` field; when `data` itself carries
/// a non-null `list`, that nested list is the payload, otherwise `data` is.
fn extract_payload(body: Value) -> Value {
    let data = body.get("data").cloned().unwrap_or(Value::Null);
    match data.get("list") {
        Some(list) if !list.is_null() => list.clone(),
        _ => data,
    }
}

/// Rewrite a catalog `sourceURL` (admin console address) to the planet's API base
fn planet_api_url(source_url: &str) -> String {
    let base = source_url.split("/admin").next().unwrap_or(source_url);
    format!("{}/api", base)
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn map_transport_error(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Status(status, response) => TransportError::Api {
            status,
            reason: response.status_text().to_string(),
        },
        ureq::Error::Transport(transport) => {
            let timed_out = transport
                .source()
                .and_then(|s| s.downcast_ref::<std::io::Error>())
                .map(|io| {
                    matches!(
                        io.kind(),
                        std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                    )
                })
                .unwrap_or(false);
            if timed_out {
                return TransportError::Timeout;
            }
            match transport.kind() {
                ureq::ErrorKind::Dns | ureq::ErrorKind::ConnectionFailed => {
                    TransportError::Connection(transport.to_string())
                }
                _ => TransportError::Unexpected(transport.to_string()),
            }
        }
    }
}
