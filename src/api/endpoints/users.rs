//! # JIRA User Endpoints

use serde_json::Value;
use tracing::{debug, instrument};

use crate::api::client::JiraClient;
use crate::api::error::Result;
use crate::api::types::ASSIGNABLE_USERS_LIMIT;

impl JiraClient {
    /// Get the current authenticated user.
    ///
    /// Calls `GET /rest/api/2/myself` to retrieve user information.
    #[instrument(skip(self))]
    pub fn get_current_user(&self) -> Result<Value> {
        self.get("/rest/api/2/myself")
    }

    /// Get the users that can be assigned issues in a project.
    ///
    /// Calls `GET /rest/api/2/user/assignable/search` once per client. The
    /// first successful answer is cached and returned for every later call,
    /// whatever project key is passed.
    #[instrument(skip(self), fields(project = %project_key))]
    pub fn get_assignable_users(&self, project_key: &str) -> Result<Value> {
        self.cache.assignable_users.get_or_try_fill(|| {
            debug!("Fetching assignable users");
            self.get(&format!(
                "/rest/api/2/user/assignable/search?project={}&maxResults={}",
                urlencoding::encode(project_key),
                ASSIGNABLE_USERS_LIMIT
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::test_support::{blocking, test_client, AUTH_HEADER};
    use crate::api::ApiError;

    #[tokio::test]
    async fn test_get_current_user() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/myself"))
            .and(header("Authorization", AUTH_HEADER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "test_user",
                "displayName": "Test User",
                "emailAddress": "test@example.com"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let user = blocking(move || test_client(&uri).get_current_user())
            .await
            .unwrap();

        assert_eq!(user["name"], "test_user");
    }

    #[tokio::test]
    async fn test_assignable_users_cached_across_projects() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/user/assignable/search"))
            .and(query_param("project", "ABC"))
            .and(query_param("maxResults", "10000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "jdoe", "displayName": "Jane Doe"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let (first, second) = blocking(move || {
            let client = test_client(&uri);
            let first = client.get_assignable_users("ABC");
            let second = client.get_assignable_users("XYZ");
            (first, second)
        })
        .await;

        let first = first.unwrap();
        assert_eq!(first[0]["name"], "jdoe");
        assert_eq!(second.unwrap(), first);
    }

    #[tokio::test]
    async fn test_assignable_users_project_key_is_encoded() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/user/assignable/search"))
            .and(query_param("project", "A&B"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let users = blocking(move || test_client(&uri).get_assignable_users("A&B"))
            .await
            .unwrap();

        assert_eq!(users, json!([]));
    }

    #[tokio::test]
    async fn test_assignable_users_failure_not_cached() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/user/assignable/search"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/user/assignable/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "jdoe"}])))
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let (first, second) = blocking(move || {
            let client = test_client(&uri);
            (client.get_assignable_users("ABC"), client.get_assignable_users("ABC"))
        })
        .await;

        assert!(matches!(first, Err(ApiError::ServerError(_))));
        assert_eq!(second.unwrap()[0]["name"], "jdoe");
    }

    #[tokio::test]
    async fn test_caches_are_per_client() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/user/assignable/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let results = blocking(move || {
            let one = test_client(&uri);
            let two = test_client(&uri);
            vec![
                one.get_assignable_users("ABC"),
                two.get_assignable_users("ABC"),
                one.get_assignable_users("ABC"),
            ]
        })
        .await;

        assert!(results.iter().all(|r| r.is_ok()));
    }
}
