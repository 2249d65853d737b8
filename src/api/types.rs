//! JIRA API request and response types.
//!
//! Request bodies are typed so their wire shape is fixed in one place.
//! Most responses stay as [`serde_json::Value`]; only the endpoints the client
//! reshapes get a struct here.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default `maxResults` for JQL searches.
pub const DEFAULT_SEARCH_LIMIT: u32 = 100;

/// Page size requested for assignable users.
pub const ASSIGNABLE_USERS_LIMIT: u32 = 10_000;

/// Body for adding or editing a comment.
#[derive(Debug, Clone, Serialize)]
pub struct CommentRequest<'a> {
    /// The comment text.
    pub body: &'a str,
}

/// Body for `PUT /rest/api/2/issue/{key}/assignee`.
#[derive(Debug, Clone, Serialize)]
pub struct AssigneeRequest<'a> {
    /// The user name to assign.
    pub name: &'a str,
}

/// Body for `POST /rest/api/2/search`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest<'a> {
    /// The JQL query.
    pub jql: &'a str,
    /// Maximum number of issues to return.
    pub max_results: u32,
}

/// The part of a search response the client keeps.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Matching issues, as returned by JIRA.
    #[serde(default)]
    pub issues: Vec<Value>,
}

/// Body for performing a transition.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionRequest<'a> {
    /// The transition to perform.
    pub transition: TransitionId<'a>,
}

/// A transition reference by id.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionId<'a> {
    /// The transition id.
    pub id: &'a str,
}

/// Response of `GET /rest/api/2/issue/{key}/transitions`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionsResponse {
    /// Transitions available from the issue's current status.
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

/// A workflow transition available on an issue.
///
/// Only the id and name are kept; JIRA sends much more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The transition id.
    pub id: String,
    /// The transition name (e.g., "Done").
    pub name: String,
}

impl Transition {
    /// Create a transition.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Convert into an `(id, name)` pair.
    pub fn into_pair(self) -> (String, String) {
        (self.id, self.name)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A worklog entry to add to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorklog {
    /// Free-text description of the work.
    pub comment: String,
    /// When the work started, in JIRA's format (e.g., "2024-01-17T12:34:00.000+0000").
    pub started: String,
    /// Time spent, in seconds.
    pub time_spent_seconds: u64,
}

impl NewWorklog {
    /// Create a worklog entry.
    pub fn new(comment: impl Into<String>, started: impl Into<String>, time_spent_seconds: u64) -> Self {
        Self {
            comment: comment.into(),
            started: started.into(),
            time_spent_seconds,
        }
    }
}

/// An issue to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    /// Key of the project the issue belongs to (e.g., "ABC").
    pub project_key: String,
    /// One-line summary.
    pub summary: String,
    /// Longer description.
    pub description: String,
    /// Issue type id. JIRA picks its default when absent.
    pub issue_type_id: Option<String>,
}

impl NewIssue {
    /// Create an issue description without an explicit issue type.
    pub fn new(
        project_key: impl Into<String>,
        summary: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            project_key: project_key.into(),
            summary: summary.into(),
            description: description.into(),
            issue_type_id: None,
        }
    }

    /// Set the issue type id.
    pub fn with_issue_type(mut self, issue_type_id: impl Into<String>) -> Self {
        self.issue_type_id = Some(issue_type_id.into());
        self
    }

    /// Build the request body for `POST /rest/api/2/issue/`.
    pub(crate) fn to_request(&self) -> CreateIssueRequest<'_> {
        CreateIssueRequest {
            fields: CreateIssueFields {
                project: KeyRef {
                    key: &self.project_key,
                },
                summary: &self.summary,
                description: &self.description,
                issuetype: self.issue_type_id.as_deref().map(|id| IdRef { id }),
            },
        }
    }
}

/// Body for creating an issue.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueRequest<'a> {
    /// The issue fields.
    pub fields: CreateIssueFields<'a>,
}

/// Fields sent when creating an issue.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueFields<'a> {
    /// The owning project.
    pub project: KeyRef<'a>,
    /// One-line summary.
    pub summary: &'a str,
    /// Longer description.
    pub description: &'a str,
    /// Issue type, omitted when not chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuetype: Option<IdRef<'a>>,
}

/// Body for updating an issue's text fields.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateIssueRequest<'a> {
    /// The fields to overwrite.
    pub fields: TextFields<'a>,
}

/// Summary and description of an issue.
#[derive(Debug, Clone, Serialize)]
pub struct TextFields<'a> {
    /// Longer description.
    pub description: &'a str,
    /// One-line summary.
    pub summary: &'a str,
}

/// Reference to an entity by key.
#[derive(Debug, Clone, Serialize)]
pub struct KeyRef<'a> {
    /// The entity key.
    pub key: &'a str,
}

/// Reference to an entity by id.
#[derive(Debug, Clone, Serialize)]
pub struct IdRef<'a> {
    /// The entity id.
    pub id: &'a str,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_search_request_uses_camel_case() {
        let body = serde_json::to_value(SearchRequest {
            jql: "key=ABC-1",
            max_results: 100,
        })
        .unwrap();

        assert_eq!(body, json!({"jql": "key=ABC-1", "maxResults": 100}));
    }

    #[test]
    fn test_search_response_without_issues_is_empty() {
        let response: SearchResponse = serde_json::from_value(json!({"total": 0})).unwrap();
        assert!(response.issues.is_empty());
    }

    #[test]
    fn test_transitions_response_ignores_extra_fields() {
        let response: TransitionsResponse = serde_json::from_value(json!({
            "expand": "transitions",
            "transitions": [
                {"id": "11", "name": "Done", "to": {"name": "Closed"}, "hasScreen": false}
            ]
        }))
        .unwrap();

        assert_eq!(response.transitions, vec![Transition::new("11", "Done")]);
        assert_eq!(
            response.transitions[0].clone().into_pair(),
            ("11".to_string(), "Done".to_string())
        );
    }

    #[test]
    fn test_worklog_body_shape() {
        let body = serde_json::to_value(NewWorklog::new(
            "Reviewed",
            "2024-01-17T12:34:00.000+0000",
            3600,
        ))
        .unwrap();

        assert_eq!(
            body,
            json!({
                "comment": "Reviewed",
                "started": "2024-01-17T12:34:00.000+0000",
                "timeSpentSeconds": 3600
            })
        );
    }

    #[test]
    fn test_create_issue_body_without_type() {
        let issue = NewIssue::new("ABC", "Broken build", "CI is red");
        let body = serde_json::to_value(issue.to_request()).unwrap();

        assert_eq!(
            body,
            json!({
                "fields": {
                    "project": {"key": "ABC"},
                    "summary": "Broken build",
                    "description": "CI is red"
                }
            })
        );
    }

    #[test]
    fn test_create_issue_body_with_type() {
        let issue = NewIssue::new("ABC", "Broken build", "CI is red").with_issue_type("10004");
        let body = serde_json::to_value(issue.to_request()).unwrap();

        assert_eq!(body["fields"]["issuetype"], json!({"id": "10004"}));
    }

    #[test]
    fn test_transition_request_shape() {
        let body = serde_json::to_value(TransitionRequest {
            transition: TransitionId { id: "31" },
        })
        .unwrap();

        assert_eq!(body, json!({"transition": {"id": "31"}}));
    }
}
