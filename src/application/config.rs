/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_SCOPE, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_MARGIN_SECS, TOKEN_PATH,
};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Credentials for the resource-owner-password flow
///
/// The client secret and the password are never serialized, so neither the
/// `Debug` nor the `Display` output of this type exposes them.
pub struct Credentials {
    /// Client ID of the registered API client
    pub client_id: String,
    /// Client secret of the registered API client
    #[serde(skip_serializing)]
    pub client_secret: String,
    /// Username of the CloudIQ admin account
    pub username: String,
    /// Password of the CloudIQ admin account
    #[serde(skip_serializing)]
    pub password: String,
}

impl Credentials {
    /// Creates a new set of credentials
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Names of the fields that are empty
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("username", &self.username),
            ("password", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL that relative resource paths are joined to
    pub base_url: String,
    /// Timeout in seconds for every request
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the token endpoint
pub struct TokenConfig {
    /// Absolute URL of the OAuth2 token endpoint
    pub url: String,
    /// Scope requested with the password grant
    pub scope: String,
    /// A token is treated as expired this many seconds before its real expiry
    pub expiry_margin_secs: i64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the CloudIQ client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Token endpoint configuration
    pub token: TokenConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment
    ///
    /// A `.env` file in the working directory is read first if present.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `CLIENT_ID`, `CLIENT_SECRET`, `CLOUDIQ_USER`, `CLOUDIQ_PW` | empty |
    /// | `CLOUDIQ_BASE_URL` | `https://api.crayon.com/api/v1` |
    /// | `CLOUDIQ_TOKEN_URL` | `{base_url}/connect/token` |
    /// | `CLOUDIQ_SCOPE` | `CustomerApi` |
    /// | `CLOUDIQ_TIMEOUT` | `30` |
    /// | `CLOUDIQ_TOKEN_MARGIN_SECS` | `60` |
    ///
    /// Missing credentials are logged here and rejected by [`Config::validate`].
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credentials = Credentials {
            client_id: get_env_or_default("CLIENT_ID", String::new()),
            client_secret: get_env_or_default("CLIENT_SECRET", String::new()),
            username: get_env_or_default("CLOUDIQ_USER", String::new()),
            password: get_env_or_default("CLOUDIQ_PW", String::new()),
        };
        for field in credentials.missing_fields() {
            error!("Credential {} not found in environment variables or .env file", field);
        }

        let base_url = get_env_or_default("CLOUDIQ_BASE_URL", DEFAULT_BASE_URL.to_string());
        let token_url = get_env_or_none::<String>("CLOUDIQ_TOKEN_URL")
            .unwrap_or_else(|| token_url_for(&base_url));

        Config {
            credentials,
            rest_api: RestApiConfig {
                timeout: get_env_or_default("CLOUDIQ_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                base_url,
            },
            token: TokenConfig {
                url: token_url,
                scope: get_env_or_default("CLOUDIQ_SCOPE", DEFAULT_SCOPE.to_string()),
                expiry_margin_secs: get_env_or_default(
                    "CLOUDIQ_TOKEN_MARGIN_SECS",
                    DEFAULT_TOKEN_MARGIN_SECS,
                ),
            },
        }
    }

    /// Builds a configuration from explicit credentials and library defaults
    ///
    /// The environment is not consulted.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Builds a configuration targeting another base URL
    ///
    /// The token endpoint is derived from the base URL.
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Config {
            credentials,
            token: TokenConfig {
                url: token_url_for(&base_url),
                scope: DEFAULT_SCOPE.to_string(),
                expiry_margin_secs: DEFAULT_TOKEN_MARGIN_SECS,
            },
            rest_api: RestApiConfig {
                base_url,
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }

    /// Checks that the configuration can be used to authenticate
    ///
    /// # Errors
    /// [`AppError::Config`] listing every empty credential field, or reporting
    /// an empty base URL or token URL.
    pub fn validate(&self) -> Result<(), AppError> {
        let missing = self.credentials.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "missing credentials: {}",
                missing.join(", ")
            )));
        }
        if self.rest_api.base_url.trim().is_empty() {
            return Err(AppError::Config("base url is empty".to_string()));
        }
        if self.token.url.trim().is_empty() {
            return Err(AppError::Config("token url is empty".to_string()));
        }
        Ok(())
    }
}

fn token_url_for(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), TOKEN_PATH)
}
