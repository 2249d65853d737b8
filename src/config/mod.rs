//! Configuration management for jira-session.
//!
//! A [`Profile`] is resolved from, in increasing priority:
//! the TOML config file, `JIRA_*` environment variables, and finally the OS
//! keyring when no token has been configured anywhere else.

mod profile;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use profile::{Profile, DEFAULT_URL};

use crate::api::auth;

/// Environment variable overriding the JIRA base URL.
pub const ENV_URL: &str = "JIRA_URL";
/// Environment variable overriding the login name.
pub const ENV_LOGIN: &str = "JIRA_LOGIN";
/// Environment variable overriding the API token.
pub const ENV_TOKEN: &str = "JIRA_API_TOKEN";

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no configuration directory.
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    /// The config file exists but could not be read.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The config file is not valid TOML for a profile.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A field holds an unusable value.
    #[error("invalid configuration: {0}")]
    ValidationError(String),

    /// A required credential was never set.
    #[error("{0} is not set")]
    MissingCredential(&'static str),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Default location of the config file.
///
/// - Linux: `~/.config/jira-session/config.toml`
/// - macOS: `~/Library/Application Support/jira-session/config.toml`
/// - Windows: `C:\Users\<User>\AppData\Roaming\jira-session\config.toml`
pub fn config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("jira-session").join("config.toml"))
}

/// Load the profile from the default config file, the environment and the
/// keyring.
pub fn load() -> Result<Profile> {
    let mut profile = load_from(&config_path()?)?;

    if profile.token.is_none() {
        if let Some(login) = profile.login.as_deref() {
            match auth::get_token(login) {
                Ok(token) => {
                    debug!("Using API token from keyring");
                    profile.token = Some(token);
                }
                Err(e) => debug!("No keyring token available: {}", e),
            }
        }
    }

    Ok(profile)
}

/// Load the profile from a specific file, then apply environment overrides.
///
/// A missing file is not an error; the defaults are used instead.
pub fn load_from(path: &Path) -> Result<Profile> {
    let mut profile = if path.exists() {
        debug!(path = %path.display(), "Reading config file");
        let contents = fs::read_to_string(path)?;
        toml::from_str::<Profile>(&contents)?
    } else {
        debug!(path = %path.display(), "Config file not found, using defaults");
        Profile::default()
    };

    apply_env(&mut profile);
    profile.validate()?;
    Ok(profile)
}

/// Override profile fields from `JIRA_URL`, `JIRA_LOGIN` and `JIRA_API_TOKEN`.
fn apply_env(profile: &mut Profile) {
    if let Some(url) = env_value(ENV_URL) {
        profile.url = url;
    }
    if let Some(login) = env_value(ENV_LOGIN) {
        profile.login = Some(login);
    }
    if let Some(token) = env_value(ENV_TOKEN) {
        profile.token = Some(token);
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
