//! # JIRA API Endpoints
//!
//! One thin wrapper per REST endpoint, grouped by resource. Each method
//! issues exactly one request through [`JiraClient`](super::JiraClient),
//! except for the cached lookups which only request on first use.

mod comments;
mod issues;
mod projects;
mod search;
mod transitions;
mod users;
mod worklogs;
