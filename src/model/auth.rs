/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::DEFAULT_TOKEN_TTL_SECS;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Form body of the resource-owner-password grant
#[derive(Serialize)]
pub struct TokenRequest<'a> {
    /// Always `password`
    pub grant_type: &'a str,
    /// Username of the admin account
    pub username: &'a str,
    /// Password of the admin account
    pub password: &'a str,
    /// Requested scope
    pub scope: &'a str,
}

impl<'a> TokenRequest<'a> {
    /// Builds a password grant request
    pub fn password(username: &'a str, password: &'a str, scope: &'a str) -> Self {
        Self {
            grant_type: "password",
            username,
            password,
            scope,
        }
    }
}

/// Raw response of the token endpoint
///
/// CloudIQ answers with PascalCase fields (`AccessToken`, `ExpiresIn`); the
/// standard OAuth2 snake_case names are accepted as well. Fields the client
/// does not interpret are kept in `extra`.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    /// Bearer token
    #[serde(rename = "AccessToken", alias = "access_token", default)]
    pub access_token: Option<String>,
    /// Lifetime of the token in seconds
    #[serde(
        rename = "ExpiresIn",
        alias = "expires_in",
        default,
        deserialize_with = "seconds_from_number_or_string"
    )]
    pub expires_in: Option<i64>,
    /// Token type, usually `Bearer`
    #[serde(rename = "TokenType", alias = "token_type", default)]
    pub token_type: Option<String>,
    /// Refresh token, when the identity server issues one
    #[serde(rename = "RefreshToken", alias = "refresh_token", default)]
    pub refresh_token: Option<String>,
    /// Error reported inside a successful response
    #[serde(rename = "Error", alias = "error", default)]
    pub error: Option<String>,
    /// Any other field of the response
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "***"))
            .field("error", &self.error)
            .finish()
    }
}

fn seconds_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("expires_in out of range")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expires_in must be a number, got {other}"
        ))),
    }
}

/// Bearer token cached by the token manager
#[derive(Clone, PartialEq)]
pub struct Token {
    /// Bearer token sent in the `Authorization` header
    pub access_token: String,
    /// Token type reported by the identity server
    pub token_type: String,
    /// Instant the token request was sent
    pub issued_at: DateTime<Utc>,
    /// Instant after which the token must not be used
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// Builds a token from a token endpoint response received at `issued_at`
    ///
    /// A missing lifetime falls back to one hour.
    ///
    /// # Errors
    /// A description of the problem when the response carries no usable
    /// access token or a lifetime that cannot be represented.
    pub fn from_response(
        response: &TokenResponse,
        issued_at: DateTime<Utc>,
    ) -> Result<Self, String> {
        let Some(access_token) = response
            .access_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
        else {
            return Err(response
                .error
                .clone()
                .unwrap_or_else(|| "token response has no access token".to_string()));
        };

        let expires_in = response.expires_in.unwrap_or(DEFAULT_TOKEN_TTL_SECS).max(0);
        let expires_at = TimeDelta::try_seconds(expires_in)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or_else(|| "expires_in out of range".to_string())?;

        Ok(Self {
            access_token: access_token.to_string(),
            token_type: response
                .token_type
                .clone()
                .unwrap_or_else(|| "Bearer".to_string()),
            issued_at,
            expires_at,
        })
    }

    /// Instant from which the token is treated as stale
    ///
    /// That is `margin_seconds` before expiry. When the margin is not shorter
    /// than the lifetime, the token goes stale halfway through its lifetime.
    #[must_use]
    pub fn refresh_at(&self, margin_seconds: i64) -> DateTime<Utc> {
        let lifetime = (self.expires_at - self.issued_at).num_seconds();
        if lifetime <= 0 {
            return self.expires_at;
        }

        let margin = margin_seconds.max(0);
        let fresh_for = if margin < lifetime {
            lifetime - margin
        } else {
            lifetime / 2
        };

        TimeDelta::try_seconds(fresh_for)
            .and_then(|fresh| self.issued_at.checked_add_signed(fresh))
            .unwrap_or(self.expires_at)
    }

    /// Checks if the token is stale for the given margin, see [`Token::refresh_at`]
    #[must_use]
    pub fn is_expired(&self, margin_seconds: i64) -> bool {
        Utc::now() >= self.refresh_at(margin_seconds)
    }

    /// Seconds left until expiry; negative once expired
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds()
    }

    /// Value of the `Authorization` header
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
