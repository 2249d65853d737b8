//! # JIRA Project Metadata Endpoints
//!
//! Projects and issue types change rarely, so both are fetched once per client.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::api::client::JiraClient;
use crate::api::error::Result;

impl JiraClient {
    /// Get all projects visible to the user.
    ///
    /// Calls `GET /rest/api/2/project` on first use; later calls return the
    /// cached answer.
    #[instrument(skip(self))]
    pub fn get_projects(&self) -> Result<Value> {
        self.cache.projects.get_or_try_fill(|| {
            debug!("Fetching projects");
            self.get("/rest/api/2/project")
        })
    }

    /// Get all issue types.
    ///
    /// Calls `GET /rest/api/2/issuetype` on first use; later calls return the
    /// cached answer.
    #[instrument(skip(self))]
    pub fn get_issue_types(&self) -> Result<Value> {
        self.cache.issue_types.get_or_try_fill(|| {
            debug!("Fetching issue types");
            self.get("/rest/api/2/issuetype")
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::test_support::{blocking, test_client};

    #[tokio::test]
    async fn test_get_projects_is_cached() {
        let mock_server = MockServer::start().await;
        let projects = json!([
            {"id": "10000", "key": "ABC", "name": "Alphabet"},
            {"id": "10001", "key": "XYZ", "name": "Zed"}
        ]);
        Mock::given(method("GET"))
            .and(path("/rest/api/2/project"))
            .respond_with(ResponseTemplate::new(200).set_body_json(projects.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let results = blocking(move || {
            let client = test_client(&uri);
            (0..3).map(|_| client.get_projects()).collect::<Vec<_>>()
        })
        .await;

        for result in results {
            assert_eq!(result.unwrap(), projects);
        }
    }

    #[tokio::test]
    async fn test_get_issue_types_is_cached() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/issuetype"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "1", "name": "Bug"},
                {"id": "3", "name": "Task"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let (first, second) = blocking(move || {
            let client = test_client(&uri);
            (client.get_issue_types(), client.get_issue_types())
        })
        .await;

        let first = first.unwrap();
        assert_eq!(first[0]["name"], "Bug");
        assert_eq!(second.unwrap(), first);
    }

    #[tokio::test]
    async fn test_failed_projects_request_is_retried_on_next_call() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/project"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/project"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let results = blocking(move || {
            let client = test_client(&uri);
            (0..3).map(|_| client.get_projects()).collect::<Vec<_>>()
        })
        .await;

        assert!(results[0].is_err());
        assert!(results[1..].iter().all(|r| r.is_ok()));
    }
}
