/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Token management for the CloudIQ API
//!
//! [`TokenManager`] acquires bearer tokens with the OAuth2
//! resource-owner-password grant and caches one token per client:
//! - the first request authenticates lazily
//! - an expired token is replaced transparently before the next request
//! - a 401 from a resource endpoint drops the cached token
//!
//! The cache sits behind an async mutex that is held while a new token is
//! requested, so concurrent callers never trigger more than one token
//! request for the same expiry.

use crate::application::config::Config;
use crate::error::AppError;
use crate::model::auth::{Token, TokenRequest, TokenResponse};
use chrono::Utc;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Owner of the bearer token of one client instance
pub struct TokenManager {
    config: Arc<Config>,
    client: Client,
    token: Mutex<Option<Token>>,
}

impl TokenManager {
    /// Creates a token manager with an empty cache
    ///
    /// # Arguments
    /// * `config` - Credentials and endpoint configuration
    /// * `client` - HTTP client shared with the request layer
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            token: Mutex::new(None),
        }
    }

    /// Requests a new token and caches it
    ///
    /// Always contacts the token endpoint, even when a valid token is cached.
    ///
    /// # Returns
    /// * `Ok(TokenResponse)` - Raw token endpoint response
    /// * `Err(AppError::Authentication)` - Credentials rejected or malformed token data
    /// * `Err(AppError::Network)` - Token endpoint unreachable
    pub async fn get_token(&self) -> Result<TokenResponse, AppError> {
        let mut cached = self.token.lock().await;
        let (response, token) = self.request_token().await?;
        *cached = Some(token);
        Ok(response)
    }

    /// Returns the bearer value of a valid token, authenticating if needed
    ///
    /// A token is re-requested when none is cached or when it expires within
    /// the configured margin.
    pub async fn ensure_token(&self) -> Result<String, AppError> {
        let mut cached = self.token.lock().await;

        match cached.as_ref() {
            Some(token) if !token.is_expired(self.config.token.expiry_margin_secs) => {
                return Ok(token.access_token.clone());
            }
            Some(_) => info!("Access token expired, re-authenticating"),
            None => info!("No cached access token, authenticating"),
        }

        let (_, token) = self.request_token().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }

    /// Checks the cached token against the API
    ///
    /// Sends `GET /Me` with the cached token. Never fails: a missing token, a
    /// rejected token or a transport error all yield `false`.
    pub async fn validate_token(&self) -> bool {
        let Some(access_token) = self.cached_access_token().await else {
            debug!("No cached access token to validate");
            return false;
        };

        let url = format!("{}/Me", self.config.rest_api.base_url);
        let result = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .header(ACCEPT, "application/json")
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!("Token validation failed with status {}", response.status());
                false
            }
            Err(e) => {
                warn!("Token validation request failed: {}", e);
                false
            }
        }
    }

    /// Snapshot of the cached token
    pub async fn current_token(&self) -> Option<Token> {
        self.token.lock().await.clone()
    }

    /// Drops the cached token if it is still the one that was rejected
    ///
    /// A token refreshed by another caller in the meantime is kept.
    pub(crate) async fn invalidate(&self, rejected_access_token: &str) {
        let mut cached = self.token.lock().await;
        if cached
            .as_ref()
            .is_some_and(|t| t.access_token == rejected_access_token)
        {
            warn!("Access token rejected by the API, dropping cached token");
            *cached = None;
        }
    }

    async fn cached_access_token(&self) -> Option<String> {
        self.token
            .lock()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    async fn request_token(&self) -> Result<(TokenResponse, Token), AppError> {
        let credentials = &self.config.credentials;
        let url = &self.config.token.url;
        let form = TokenRequest::password(
            &credentials.username,
            &credentials.password,
            &self.config.token.scope,
        );

        debug!("Sending token request to: {}", url);

        let issued_at = Utc::now();
        let response = self
            .client
            .post(url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .header(ACCEPT, "application/json")
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Token request failed with status {}: {}", status, body);
            return Err(AppError::Authentication { status, body });
        }

        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AppError::Authentication {
                status,
                body: format!("malformed token response: {e}"),
            })?;

        let token = Token::from_response(&parsed, issued_at).map_err(|reason| {
            error!("Token endpoint returned no usable token: {}", reason);
            AppError::Authentication {
                status,
                body: reason,
            }
        })?;

        info!("✓ Access token acquired, expires at {}", token.expires_at);
        Ok((parsed, token))
    }
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("token_url", &self.config.token.url)
            .finish()
    }
}
