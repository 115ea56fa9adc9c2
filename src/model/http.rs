/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::auth::TokenManager;
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::auth::TokenResponse;
use crate::model::params::Params;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Authenticated request layer for the CloudIQ API
///
/// Every primitive makes sure a valid bearer token is cached, sends exactly
/// one request and returns the decoded body. Failed requests are never
/// retried.
pub struct HttpClient {
    auth: Arc<TokenManager>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a client without authenticating
    ///
    /// The first request fetches a token.
    ///
    /// # Errors
    /// * `AppError::Config` - Credentials or URLs are missing
    /// * `AppError::Network` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let auth = Arc::new(TokenManager::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Creates a client and authenticates immediately
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let client = Self::new(config)?;
        client.auth.get_token().await?;
        Ok(client)
    }

    /// Resolves a path against the base URL; absolute URLs are kept as given
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.rest_api.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    /// Builds an absolute URL from the base URL and path segments
    ///
    /// Every segment is percent-encoded, so identifiers containing `/`, `?`
    /// or `#` stay inside their own segment.
    ///
    /// # Errors
    /// [`AppError::Config`] when the base URL cannot be parsed or cannot
    /// carry a path.
    pub fn url_with_segments(&self, segments: &[&str]) -> Result<String, AppError> {
        let mut url = Url::parse(&self.config.rest_api.base_url)
            .map_err(|e| AppError::Config(format!("invalid base url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Config("base url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.to_string())
    }

    /// Makes a GET request with optional query parameters
    ///
    /// `None` and an empty [`Params`] produce the same request.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&Params>,
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, params, None::<&()>).await
    }

    /// Makes a GET request and returns the raw body
    ///
    /// Used for file exports (Excel, CSV, JSON record files).
    pub async fn get_bytes(&self, path: &str, params: Option<&Params>) -> Result<Vec<u8>, AppError> {
        let response = self
            .request_internal(Method::GET, path, params, None::<&()>)
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, None, Some(body)).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, None, Some(body)).await
    }

    /// Makes a PATCH request with a JSON body
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PATCH, path, None, Some(body)).await
    }

    /// Makes a DELETE request with optional query parameters
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&Params>,
    ) -> Result<T, AppError> {
        self.request(Method::DELETE, path, params, None::<&()>).await
    }

    /// Makes an authenticated request and decodes the JSON body
    ///
    /// # Returns
    /// * `Ok(T)` - Decoded body; an empty body decodes as JSON `null`
    /// * `Err(AppError::Api)` - Non-2xx response, original status preserved
    /// * `Err(AppError::Authentication)` - No token could be obtained
    /// * `Err(AppError::Network)` - Transport failure
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let response = self.request_internal(method, path, params, body).await?;
        parse_response(response).await
    }

    async fn request_internal<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let access_token = self.auth.ensure_token().await?;
        let url = self.url_for(path);
        let authorization = format!("Bearer {access_token}");

        let headers = vec![
            ("Authorization", authorization.as_str()),
            ("Content-Type", "application/json"),
            ("Accept", "application/json"),
        ];

        match make_http_request(&self.http_client, method, &url, headers, params, body).await {
            Err(AppError::Api { status, body }) if status == StatusCode::UNAUTHORIZED => {
                self.auth.invalidate(&access_token).await;
                Err(AppError::Api { status, body })
            }
            other => other,
        }
    }

    /// Unauthenticated `GET /ping`
    ///
    /// Returns version and environment information of the API.
    pub async fn ping(&self) -> Result<Value, AppError> {
        let url = self.url_for("ping");
        let headers = vec![("Accept", "application/json")];
        let response =
            make_http_request(&self.http_client, Method::GET, &url, headers, None, None::<&()>)
                .await?;
        parse_response(response).await
    }

    /// `GET /Me`: the authenticated user, its claims and token information
    pub async fn me(&self) -> Result<Value, AppError> {
        self.get("Me", None).await
    }

    /// Requests a fresh token, see [`TokenManager::get_token`]
    pub async fn get_token(&self) -> Result<TokenResponse, AppError> {
        self.auth.get_token().await
    }

    /// Checks the cached token, see [`TokenManager::validate_token`]
    pub async fn validate_token(&self) -> bool {
        self.auth.validate_token().await
    }

    /// Gets the token manager
    pub fn auth(&self) -> &TokenManager {
        &self.auth
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Sends one HTTP request and maps non-2xx statuses to [`AppError::Api`]
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `params` - Optional query parameters; an empty set adds nothing
/// * `body` - Optional request body, serialized to JSON
///
/// # Example
///
/// ```ignore
/// use cloudiq_client::model::http::make_http_request;
/// use cloudiq_client::model::params::Params;
/// use reqwest::{Client, Method};
///
/// let client = Client::new();
/// let params = Params::new().with("OrganizationId", 123456);
/// let response = make_http_request(
///     &client,
///     Method::GET,
///     "https://api.crayon.com/api/v1/AgreementProducts",
///     vec![("Authorization", "Bearer <token>")],
///     Some(&params),
///     None::<&()>,
/// )
/// .await?;
/// ```
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    params: Option<&Params>,
    body: Option<&B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let request = build_request(client, method, url, &headers, params, body);
    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::Api { status, body })
}

fn build_request<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    headers: &[(&str, &str)],
    params: Option<&Params>,
    body: Option<&B>,
) -> RequestBuilder {
    let mut request = client.request(method, url);

    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    if let Some(params) = params.filter(|p| !p.is_empty()) {
        request = request.query(&params.to_query_pairs());
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    request
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    Ok(serde_json::from_slice(&bytes)?)
}
