//! # JIRA Transition Endpoints
//!
//! The client does not track workflow state; it lists what JIRA offers and
//! forwards the chosen transition id.

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::api::client::JiraClient;
use crate::api::error::{ApiError, Result};
use crate::api::types::{Transition, TransitionId, TransitionRequest, TransitionsResponse};

impl JiraClient {
    /// Get the transitions available on an issue, in JIRA's order.
    ///
    /// Calls `GET /rest/api/2/issue/{key}/transitions` and keeps only the id
    /// and name of each transition.
    #[instrument(skip(self), fields(issue_key = %key))]
    pub fn get_transitions(&self, key: &str) -> Result<Vec<Transition>> {
        let value = self.get(&format!("/rest/api/2/issue/{}/transitions", key))?;

        let response: TransitionsResponse = serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse transitions: {}", e)))?;

        debug!("Found {} transitions", response.transitions.len());
        Ok(response.transitions)
    }

    /// Move an issue through a workflow transition.
    ///
    /// Calls `POST /rest/api/2/issue/{key}/transitions`.
    #[instrument(skip(self), fields(issue_key = %key))]
    pub fn transition_issue(&self, key: &str, transition_id: &str) -> Result<Value> {
        let body = TransitionRequest {
            transition: TransitionId { id: transition_id },
        };
        self.send(
            Method::POST,
            &format!("/rest/api/2/issue/{}/transitions", key),
            &body,
        )
    }
}
