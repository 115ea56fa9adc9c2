/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Convenience alias for results returned by this crate
pub type CloudIqResult<T> = Result<T, AppError>;

/// Errors returned by the CloudIQ client
#[derive(Debug)]
pub enum AppError {
    /// The token endpoint rejected the credentials or returned malformed token data
    Authentication {
        /// HTTP status returned by the token endpoint
        status: StatusCode,
        /// Raw response body or a description of what was malformed
        body: String,
    },
    /// A resource endpoint answered with a non-2xx status
    Api {
        /// HTTP status returned by the endpoint
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// Transport failure: DNS, connection refused, timeout
    Network(reqwest::Error),
    /// Response body could not be decoded
    Json(serde_json::Error),
    /// A required request parameter was missing or empty
    InvalidInput(String),
    /// Required configuration is missing
    Config(String),
}

impl AppError {
    /// HTTP status carried by the error, if it came from an HTTP response
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Authentication { status, .. } | AppError::Api { status, .. } => {
                Some(*status)
            }
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the error is an authentication failure
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, AppError::Authentication { .. })
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Authentication { status, body } => {
                write!(f, "authentication failed ({status}): {body}")
            }
            AppError::Api { status, body } => write!(f, "api error ({status}): {body}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
