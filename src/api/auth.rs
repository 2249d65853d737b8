//! Authentication handling for JIRA API.
//!
//! This module builds the Basic Auth header (login + API token) and
//! provides secure token storage via the OS keyring.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use super::error::{ApiError, Result};

/// The keyring service name for jira-session tokens.
const KEYRING_SERVICE: &str = "jira-session";

/// Authentication credentials for JIRA.
#[derive(Debug, Clone)]
pub struct Auth {
    /// The user's login name.
    login: String,
    /// The Base64-encoded authorization header value.
    auth_header: String,
}

impl Auth {
    /// Create new authentication credentials from a login and token.
    ///
    /// The token is immediately encoded and the raw token is not stored.
    pub fn new(login: &str, token: &str) -> Self {
        let auth_header = build_auth_header(login, token);
        Self {
            login: login.to_string(),
            auth_header,
        }
    }

    /// Get the authorization header value for HTTP requests.
    ///
    /// Returns the complete "Basic ..." header value.
    pub fn header_value(&self) -> &str {
        &self.auth_header
    }

    /// Get the login name.
    pub fn login(&self) -> &str {
        &self.login
    }
}

/// Build the Basic Auth header value.
///
/// Encodes "login:token" in Base64 and prepends "Basic ".
fn build_auth_header(login: &str, token: &str) -> String {
    let credentials = format!("{}:{}", login, token);
    let encoded = BASE64.encode(credentials.as_bytes());
    format!("Basic {}", encoded)
}

fn keyring_entry(login: &str) -> Result<keyring::Entry> {
    keyring::Entry::new(KEYRING_SERVICE, login)
        .map_err(|e| ApiError::Keyring(format!("failed to access keyring: {}", e)))
}

/// Store an API token in the OS keyring under the given login.
///
/// # Errors
///
/// Returns an error if the token cannot be stored in the keyring.
pub fn store_token(login: &str, token: &str) -> Result<()> {
    keyring_entry(login)?
        .set_password(token)
        .map_err(|e| ApiError::Keyring(format!("failed to store token: {}", e)))
}

/// Retrieve the API token stored for a login.
///
/// # Errors
///
/// Returns an error if the token cannot be retrieved from the keyring.
pub fn get_token(login: &str) -> Result<String> {
    keyring_entry(login)?
        .get_password()
        .map_err(|e| ApiError::Keyring(format!("failed to retrieve token: {}", e)))
}

/// Delete the API token stored for a login.
///
/// # Errors
///
/// Returns an error if the token cannot be deleted from the keyring.
pub fn delete_token(login: &str) -> Result<()> {
    keyring_entry(login)?
        .delete_password()
        .map_err(|e| ApiError::Keyring(format!("failed to delete token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_auth_header() {
        let header = build_auth_header("test_user", "test_token");
        assert_eq!(header, "Basic dGVzdF91c2VyOnRlc3RfdG9rZW4=");
    }

    #[test]
    fn test_auth_header_decodes_to_login_and_token() {
        let header = build_auth_header("jdoe", "api:token:with:colons");

        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = String::from_utf8(BASE64.decode(encoded).unwrap()).unwrap();
        assert_eq!(decoded, "jdoe:api:token:with:colons");
    }

    #[test]
    fn test_auth_new() {
        let auth = Auth::new("jdoe", "secret_token");
        assert_eq!(auth.login(), "jdoe");
        assert!(auth.header_value().starts_with("Basic "));
    }

    #[test]
    fn test_auth_does_not_expose_token() {
        let auth = Auth::new("jdoe", "secret_token");
        let debug_output = format!("{:?}", auth);

        // Token should not appear in debug output
        assert!(!debug_output.contains("secret_token"));
    }
}
