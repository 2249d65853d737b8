//! Shared helpers for client tests against a wiremock server.

use crate::api::JiraClient;
use crate::config::Profile;

pub(crate) const LOGIN: &str = "test_user";
pub(crate) const TOKEN: &str = "test_token";
/// `test_user:test_token` in base64.
pub(crate) const AUTH_HEADER: &str = "Basic dGVzdF91c2VyOnRlc3RfdG9rZW4=";

/// Build a fully configured client for `base_url`.
pub(crate) fn test_client(base_url: &str) -> JiraClient {
    JiraClient::new(&Profile::new(base_url, LOGIN, TOKEN)).unwrap()
}

/// Run blocking client code off the async test runtime.
///
/// The blocking reqwest client must be created, used and dropped outside of
/// the runtime that drives the mock server.
pub(crate) async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}
