//! Paginated row retrieval
//!
//! Drives repeated exploration-page calls for one validated query and folds
//! the pages into a single bounded result. Pages are fetched strictly
//! sequentially: each continuation decision depends on the previous page's
//! size, so there is no prefetch.

use tracing::debug;

use crate::query::{Query, QueryResult, Row};
use crate::transport::ExplorationApi;
use super::error::RetrievalError;

/// Maximum rows per page; a full page means more data may exist
pub const PAGE_SIZE: usize = 1000;

/// Highest cursor value a page may be requested at
pub const START_CEILING: u32 = 10_000;

/// Only the most recently fetched rows inside this window are returned
pub const RESULT_WINDOW: usize = 500;

/// Fetch all matching rows for a validated query.
///
/// The cursor is 1-based and starts at 1. A page of exactly [`PAGE_SIZE`]
/// rows continues the loop with the cursor advanced by [`PAGE_SIZE`]; a
/// partial page is the termination signal. Once the next cursor would exceed
/// [`START_CEILING`] the loop stops regardless, bounding the fetch against a
/// misbehaving or enormous dataset. The accumulated rows are then truncated
/// to the last [`RESULT_WINDOW`] and labelled with the query's axis names.
pub fn run_query<A: ExplorationApi>(api: &A, query: &Query) -> Result<QueryResult, RetrievalError> {
    let mut start: u32 = 1;
    let mut rows: Vec<Row> = Vec::new();

    loop {
        let page = api
            .exploration_page(query, start)
            .map_err(|source| RetrievalError {
                dataset_name: query.dataset_name.clone(),
                source,
            })?;
        debug!(start, page_len = page.len(), "fetched exploration page");

        let full_page = page.len() == PAGE_SIZE;
        rows.extend(page);

        if !full_page {
            break;
        }
        start += PAGE_SIZE as u32;
        if start > START_CEILING {
            break;
        }
    }

    if rows.len() > RESULT_WINDOW {
        rows.drain(..rows.len() - RESULT_WINDOW);
    }

    Ok(QueryResult {
        dataset_name: query.dataset_name.clone(),
        x: query.x_label(),
        y: query.y_label(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportError;
    use std::cell::RefCell;

    /// Scripted page source that records every requested cursor
    struct ScriptedPages {
        page_sizes: Vec<usize>,
        starts: RefCell<Vec<u32>>,
        fail_on_request: Option<usize>,
    }

    impl ScriptedPages {
        fn new(page_sizes: Vec<usize>) -> Self {
            Self {
                page_sizes,
                starts: RefCell::new(Vec::new()),
                fail_on_request: None,
            }
        }

        fn starts(&self) -> Vec<u32> {
            self.starts.borrow().clone()
        }
    }

    impl ExplorationApi for ScriptedPages {
        fn exploration_page(
            &self,
            _query: &Query,
            start: u32,
        ) -> Result<Vec<Row>, TransportError> {
            let request_index = self.starts.borrow().len();
            self.starts.borrow_mut().push(start);

            if self.fail_on_request == Some(request_index) {
                return Err(TransportError::Timeout);
            }

            // Past the scripted pages, keep serving full pages
            let size = self
                .page_sizes
                .get(request_index)
                .copied()
                .unwrap_or(PAGE_SIZE);
            Ok((0..size)
                .map(|i| {
                    let mut row = Row::new();
                    row.insert("n".to_string(), serde_json::json!(start as usize + i));
                    row
                })
                .collect())
        }
    }

    fn query() -> Query {
        serde_json::from_value(serde_json::json!({
            "sourceURL": "https://tw-entertainment.araliadata.io/api",
            "dataset_id": "D1",
            "dataset_name": "電影票房資料",
            "x": [{
                "columnID": "C1",
                "column_name": "Country",
                "type": "nominal",
                "country": "Taiwan",
                "language": "zh-tw"
            }],
            "y": [{
                "columnID": "C2",
                "column_name": "Sales",
                "type": "float",
                "calculation": "avg"
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_partial_page_terminates() {
        let api = ScriptedPages::new(vec![1000, 1000, 200]);
        let result = run_query(&api, &query()).unwrap();

        assert_eq!(api.starts(), vec![1, 1001, 2001]);
        // 2200 fetched, truncated to the window
        assert_eq!(result.rows.len(), RESULT_WINDOW);
    }

    #[test]
    fn test_single_short_page() {
        let api = ScriptedPages::new(vec![3]);
        let result = run_query(&api, &query()).unwrap();

        assert_eq!(api.starts(), vec![1]);
        assert_eq!(result.rows.len(), 3);
        assert_eq!(result.dataset_name, "電影票房資料");
        assert_eq!(result.x, "Country");
        assert_eq!(result.y, "Sales");
    }

    #[test]
    fn test_empty_first_page() {
        let api = ScriptedPages::new(vec![0]);
        let result = run_query(&api, &query()).unwrap();

        assert_eq!(api.starts(), vec![1]);
        assert!(result.rows.is_empty());
    }

    #[test]
    fn test_ceiling_bounds_unbounded_source() {
        // Every page is full: the ceiling is the only thing that stops us
        let api = ScriptedPages::new(vec![]);
        let result = run_query(&api, &query()).unwrap();

        let starts = api.starts();
        assert_eq!(starts.len(), 10);
        assert_eq!(starts.first(), Some(&1));
        assert_eq!(starts.last(), Some(&9001));
        assert_eq!(result.rows.len(), RESULT_WINDOW);
    }

    #[test]
    fn test_window_keeps_most_recent_rows() {
        let api = ScriptedPages::new(vec![1000, 500]);
        let result = run_query(&api, &query()).unwrap();

        // 1500 fetched; the window keeps rows 1001..=1500
        assert_eq!(result.rows.len(), RESULT_WINDOW);
        assert_eq!(result.rows[0]["n"], serde_json::json!(1001));
        assert_eq!(result.rows[RESULT_WINDOW - 1]["n"], serde_json::json!(1500));
    }

    #[test]
    fn test_transport_failure_discards_everything() {
        let api = ScriptedPages {
            page_sizes: vec![1000, 1000],
            starts: RefCell::new(Vec::new()),
            fail_on_request: Some(2),
        };

        let err = run_query(&api, &query()).unwrap_err();
        assert_eq!(err.dataset_name, "電影票房資料");
        assert!(matches!(err.source, TransportError::Timeout));
    }
}
