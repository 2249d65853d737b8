//! JIRA API client and types.
//!
//! This module provides the interface for communicating with the JIRA REST API.

pub mod auth;
mod client;
mod endpoints;
mod error;
pub mod types;

#[cfg(test)]
mod test_support;

pub use auth::Auth;
pub use client::{JiraClient, USER_AGENT};
pub use error::{ApiError, Result};
pub use reqwest::Method;
pub use types::{NewIssue, NewWorklog, Transition};
