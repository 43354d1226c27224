use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

const DEFAULT_BASE_URL: &str = "https://api.myanimelist.net/v2";

/// Client configuration.
///
/// Missing keys take their built-in default, so a user file only needs the
/// keys it overrides (usually just the credentials).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub client_id: Option<String>,
    pub access_token: Option<String>,
    pub timeout_secs: u64,
    pub default_limit: u32,
    pub nsfw: bool,
}

/// The credential attached to every request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Public, read-only access identified by an application client id.
    ClientId(String),
    /// OAuth access token of a user; required for list operations.
    AccessToken(String),
}

impl Credentials {
    /// Header name and value carrying this credential.
    pub fn header(&self) -> (&'static str, String) {
        match self {
            Self::ClientId(id) => ("X-MAL-CLIENT-ID", id.clone()),
            Self::AccessToken(token) => ("Authorization", format!("Bearer {token}")),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClientId(_) => f.write_str("ClientId(..)"),
            Self::AccessToken(_) => f.write_str("AccessToken(..)"),
        }
    }
}

impl ClientConfig {
    /// Load config: the user file if it exists, otherwise the built-in defaults.
    pub fn load() -> Result<Self, ApiError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            let user_str = std::fs::read_to_string(&user_path)?;
            Self::from_toml_str(&user_str)
        } else {
            Self::from_toml_str(DEFAULT_CONFIG)
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ApiError> {
        toml::from_str(s).map_err(|e| ApiError::Config(e.to_string()))
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), ApiError> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ApiError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "shiori")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Authenticate with `client_id` only. Any stored access token is dropped,
    /// since it would otherwise take precedence.
    pub fn with_client_id(self, client_id: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            access_token: None,
            ..self
        }
    }

    pub fn with_access_token(self, access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            ..self
        }
    }

    /// Pick the credential to send. An access token wins over a client id;
    /// blank values count as unset.
    pub fn credentials(&self) -> Result<Credentials, ApiError> {
        if let Some(token) = non_blank(&self.access_token) {
            return Ok(Credentials::AccessToken(token.to_owned()));
        }
        if let Some(id) = non_blank(&self.client_id) {
            return Ok(Credentials::ClientId(id.to_owned()));
        }
        Err(ApiError::Config(
            "either an access token or a client id is required".into(),
        ))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            client_id: None,
            access_token: None,
            timeout_secs: 30,
            default_limit: 10,
            nsfw: false,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
