//! # JIRA Search Endpoint

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::api::client::JiraClient;
use crate::api::error::{ApiError, Result};
use crate::api::types::{SearchRequest, SearchResponse, DEFAULT_SEARCH_LIMIT};

impl JiraClient {
    /// Search for issues using JQL.
    ///
    /// Calls `POST /rest/api/2/search` with `maxResults` set to `limit`, or
    /// 100 when no limit is given. Only the `issues` list of the response is
    /// returned; a response without one yields an empty list.
    #[instrument(skip(self), fields(jql = %jql))]
    pub fn search(&self, jql: &str, limit: Option<u32>) -> Result<Vec<Value>> {
        let max_results = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        debug!("Searching issues: maxResults={}", max_results);

        let value = self.send(
            Method::POST,
            "/rest/api/2/search",
            &SearchRequest { jql, max_results },
        )?;

        // A null body (no content) carries no issues either.
        if value.is_null() {
            return Ok(Vec::new());
        }

        let result: SearchResponse = serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse search result: {}", e)))?;

        debug!("Found {} issues", result.issues.len());
        Ok(result.issues)
    }
}
