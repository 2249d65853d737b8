//! # JIRA Comment Endpoints

use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use crate::api::client::JiraClient;
use crate::api::error::Result;
use crate::api::types::CommentRequest;

impl JiraClient {
    /// Add a comment to an issue.
    ///
    /// Calls `POST /rest/api/2/issue/{key}/comment` and returns the created comment.
    #[instrument(skip(self, body), fields(issue_key = %key))]
    pub fn add_comment(&self, key: &str, body: &str) -> Result<Value> {
        self.send(
            Method::POST,
            &format!("/rest/api/2/issue/{}/comment", key),
            &CommentRequest { body },
        )
    }

    /// Replace the text of an existing comment.
    ///
    /// Calls `PUT /rest/api/2/issue/{key}/comment/{id}`.
    #[instrument(skip(self, body), fields(issue_key = %key))]
    pub fn edit_comment(&self, key: &str, comment_id: &str, body: &str) -> Result<Value> {
        self.send(
            Method::PUT,
            &format!("/rest/api/2/issue/{}/comment/{}", key, comment_id),
            &CommentRequest { body },
        )
    }

    /// Delete a comment.
    ///
    /// Calls `DELETE /rest/api/2/issue/{key}/comment/{id}`. JIRA answers with
    /// no content, so the result is `Value::Null` on success.
    #[instrument(skip(self), fields(issue_key = %key))]
    pub fn delete_comment(&self, key: &str, comment_id: &str) -> Result<Value> {
        self.call(
            Method::DELETE,
            &format!("/rest/api/2/issue/{}/comment/{}", key, comment_id),
            None,
        )
    }
}
