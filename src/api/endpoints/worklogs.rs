//! # JIRA Worklog Endpoints

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::api::client::JiraClient;
use crate::api::error::Result;
use crate::api::types::NewWorklog;

impl JiraClient {
    /// Get the worklogs of an issue.
    ///
    /// Calls `GET /rest/api/2/issue/{key}/worklog`. `only_mine` is accepted
    /// for callers that want to express the intent, but it is not applied:
    /// all worklogs are returned.
    #[instrument(skip(self), fields(issue_key = %key))]
    pub fn get_worklog(&self, key: &str, only_mine: bool) -> Result<Value> {
        if only_mine {
            debug!("Filtering worklogs by author is not supported; returning all");
        }
        self.get(&format!("/rest/api/2/issue/{}/worklog", key))
    }

    /// Log work on an issue.
    ///
    /// Calls `POST /rest/api/2/issue/{key}/worklog`.
    #[instrument(skip(self, worklog), fields(issue_key = %key, seconds = worklog.time_spent_seconds))]
    pub fn add_worklog(&self, key: &str, worklog: &NewWorklog) -> Result<Value> {
        self.send(
            Method::POST,
            &format!("/rest/api/2/issue/{}/worklog", key),
            worklog,
        )
    }
}
