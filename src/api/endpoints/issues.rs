//! # JIRA Issue Endpoints
//!
//! Fetching, creating and updating issues, and changing the assignee.

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::api::client::JiraClient;
use crate::api::error::Result;
use crate::api::types::{AssigneeRequest, NewIssue, TextFields, UpdateIssueRequest};

impl JiraClient {
    /// Get a single issue by key.
    ///
    /// Calls `GET /rest/api/2/issue/{key}`.
    #[instrument(skip(self), fields(issue_key = %key))]
    pub fn get_issue(&self, key: &str) -> Result<Value> {
        debug!("Fetching issue");
        self.get(&format!("/rest/api/2/issue/{}", key))
    }

    /// Create an issue.
    ///
    /// Calls `POST /rest/api/2/issue/` and returns JIRA's reply, which carries
    /// the new issue's `id` and `key`.
    #[instrument(skip(self, issue), fields(project = %issue.project_key))]
    pub fn create_issue(&self, issue: &NewIssue) -> Result<Value> {
        debug!("Creating issue");
        self.send(Method::POST, "/rest/api/2/issue/", &issue.to_request())
    }

    /// Overwrite an issue's summary and description.
    ///
    /// Calls `PUT /rest/api/2/issue/{id}`; `id` may be the numeric id or the key.
    #[instrument(skip(self, summary, description), fields(issue = %id))]
    pub fn update_issue(&self, id: &str, summary: &str, description: &str) -> Result<Value> {
        let body = UpdateIssueRequest {
            fields: TextFields {
                description,
                summary,
            },
        };
        self.send(Method::PUT, &format!("/rest/api/2/issue/{}", id), &body)
    }

    /// Assign an issue to a user by user name.
    ///
    /// Calls `PUT /rest/api/2/issue/{key}/assignee`.
    #[instrument(skip(self), fields(issue_key = %key))]
    pub fn assign_issue(&self, key: &str, name: &str) -> Result<Value> {
        self.send(
            Method::PUT,
            &format!("/rest/api/2/issue/{}/assignee", key),
            &AssigneeRequest { name },
        )
    }
}
