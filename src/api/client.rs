//! JIRA API client implementation.
//!
//! This module provides the main client for interacting with the JIRA REST API v2.
//! It handles authentication, request/response processing and status mapping.
//! Requests are synchronous and never retried.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::{header, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use super::auth::Auth;
use super::error::{ApiError, Result};
use crate::cache::ResponseCache;
use crate::config::{self, ConfigError, Profile};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent header value sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The JIRA API client.
///
/// Every operation blocks until JIRA answers. The client owns its response
/// cache, so separately configured clients never share cached data.
#[derive(Debug)]
pub struct JiraClient {
    /// The HTTP client.
    client: Client,
    /// The base URL for the JIRA instance, without trailing slash.
    base_url: String,
    /// Authentication credentials, or the name of the missing credential.
    auth: std::result::Result<Auth, &'static str>,
    /// Memoized responses.
    pub(crate) cache: ResponseCache,
}

impl JiraClient {
    /// Create a new JIRA client from a profile.
    ///
    /// A profile without login or token still yields a client; every call
    /// on it fails with [`ApiError::Configuration`] without touching the network.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile URL is invalid or the HTTP client
    /// cannot be built.
    #[instrument(skip(profile), fields(url = %profile.url))]
    pub fn new(profile: &Profile) -> Result<Self> {
        profile.validate()?;

        let auth = match profile.credentials() {
            Ok((login, token)) => Ok(Auth::new(login, token)),
            Err(ConfigError::MissingCredential(missing)) => {
                warn!("Profile has no {}; requests will be refused", missing);
                Err(missing)
            }
            Err(e) => return Err(e.into()),
        };

        let client = Self::build_http_client()?;
        let base_url = normalize_base_url(&profile.url);

        debug!("JIRA client created");
        Ok(Self {
            client,
            base_url,
            auth,
            cache: ResponseCache::new(),
        })
    }

    /// Create a client from the config file, environment and keyring.
    ///
    /// See [`config::load`] for the lookup order.
    pub fn from_config() -> Result<Self> {
        let profile = config::load()?;
        Self::new(&profile)
    }

    /// Build the HTTP client with appropriate settings.
    fn build_http_client() -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Network)
    }

    /// Validate the connection by calling the /myself endpoint.
    ///
    /// This verifies that the URL is reachable and the credentials are accepted.
    #[instrument(skip(self))]
    pub fn validate_connection(&self) -> Result<Value> {
        debug!("Validating JIRA connection");

        let user = self.get_current_user().map_err(|e| {
            error!("Connection validation failed: {}", e);
            e
        })?;

        let name = user
            .get("displayName")
            .or_else(|| user.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("<unknown>");
        info!("Connected as user: {}", name);
        Ok(user)
    }

    /// Perform an authenticated request and decode the JSON response.
    ///
    /// `path` is appended to the base URL, e.g. `/rest/api/2/myself`.
    /// Statuses 200-399 succeed; an empty body decodes to `Value::Null`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Configuration`] if login or token is missing (no request is sent)
    /// - [`ApiError::Network`] if no response was received
    /// - [`ApiError::Unauthorized`], [`ApiError::Forbidden`], [`ApiError::NotFound`],
    ///   [`ApiError::BadRequest`] or [`ApiError::ServerError`] by status code
    /// - [`ApiError::InvalidResponse`] if a success body is not JSON
    pub fn call(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        self.execute(method, path, body)
    }

    /// GET without a body.
    pub(crate) fn get(&self, path: &str) -> Result<Value> {
        self.execute::<()>(Method::GET, path, None)
    }

    /// Send a request with a JSON body.
    pub(crate) fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value> {
        self.execute(method, path, Some(body))
    }

    /// Execute a single request.
    #[instrument(skip(self, body))]
    fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value> {
        let auth = self
            .auth
            .as_ref()
            .map_err(|missing| ApiError::Configuration(ConfigError::MissingCredential(*missing)))?;

        let url = self.url(path);
        debug!("Sending request");

        let mut request = self
            .client
            .request(method, &url)
            .header(header::AUTHORIZATION, auth.header_value())
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().map_err(|e| {
            warn!("Request did not reach JIRA: {}", e);
            ApiError::Network(e)
        })?;

        self.handle_response(response)
    }

    /// Handle the HTTP response, checking for errors and parsing JSON.
    fn handle_response(&self, response: Response) -> Result<Value> {
        let status = response.status();
        let url = response.url().to_string();
        debug!(status = %status, "Received response");

        if is_success(status) {
            let text = response
                .text()
                .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;
            decode_body(&text)
        } else {
            // Try to get error details from response body
            let error_body = response.text().unwrap_or_default();
            debug!("Error response body: {}", error_body);

            Err(error_from_response(status, &url, &error_body))
        }
    }

    /// Join a request path onto the base URL.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the login the client authenticates as, if configured.
    pub fn login(&self) -> Option<&str> {
        self.auth.as_ref().ok().map(Auth::login)
    }
}

/// Statuses JIRA answers with on success, redirects included.
fn is_success(status: StatusCode) -> bool {
    (200..400).contains(&status.as_u16())
}

/// Decode a success body. Empty bodies (204 No Content) become `null`.
fn decode_body(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(text)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
}

/// Create an appropriate error from an HTTP response.
fn error_from_response(status: StatusCode, url: &str, body: &str) -> ApiError {
    let context = jira_error_details(body).unwrap_or_else(|| url.to_string());
    ApiError::from_status(status, &context)
}

/// Extract JIRA's `errorMessages` list or `errors` map from an error body.
fn jira_error_details(body: &str) -> Option<String> {
    let json = serde_json::from_str::<Value>(body).ok()?;

    let messages: Vec<&str> = json
        .get("errorMessages")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    if !messages.is_empty() {
        return Some(messages.join(", "));
    }

    let errors: Vec<String> = json
        .get("errors")
        .and_then(Value::as_object)
        .map(|obj| obj.iter().map(|(k, v)| format!("{}: {}", k, v)).collect())
        .unwrap_or_default();
    if !errors.is_empty() {
        return Some(errors.join(", "));
    }

    None
}

/// Normalize the base URL by removing trailing slashes.
fn normalize_base_url(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');

    // Warn if not HTTPS (but don't enforce for local instances)
    if !url.starts_with("https://") && !url.contains("localhost") && !url.contains("127.0.0.1") {
        warn!("URL does not use HTTPS: {}. Credentials are sent in clear text.", url);
    }

    url.to_string()
}
