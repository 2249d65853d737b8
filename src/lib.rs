//! jira-session - a thin synchronous client for the JIRA REST API.
//!
//! Every public operation maps to exactly one HTTP request. Responses are
//! returned as decoded JSON and HTTP status codes are translated into
//! [`ApiError`] variants.
//!
//! ```no_run
//! use jira_session::{JiraClient, Profile};
//!
//! # fn main() -> jira_session::Result<()> {
//! let profile = Profile::new("https://jira.example.com", "jdoe", "api-token");
//! let client = JiraClient::new(&profile)?;
//! let issue = client.get_issue("ABC-1")?;
//! println!("{}", issue["fields"]["summary"]);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod logging;

pub use api::{ApiError, Auth, JiraClient, Method, NewIssue, NewWorklog, Result, Transition};
pub use config::{ConfigError, Profile};
