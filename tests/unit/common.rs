// Shared helpers for the mock-server tests

use cloudiq_client::application::config::{Config, Credentials};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
pub const USERNAME: &str = "admin@example.com";
pub const PASSWORD: &str = "pa55word";

/// `Basic base64("test-client:test-secret")`
pub const BASIC_AUTH: &str = "Basic dGVzdC1jbGllbnQ6dGVzdC1zZWNyZXQ=";

/// Configuration pointing both the API and the token endpoint at the mock server
pub fn test_config(server: &ServerGuard) -> Config {
    Config::with_base_url(
        Credentials::new(CLIENT_ID, CLIENT_SECRET, USERNAME, PASSWORD),
        &server.url(),
    )
}

/// Token endpoint answering with `access_token`, expected exactly `hits` times
pub async fn mock_token(
    server: &mut ServerGuard,
    access_token: &str,
    expires_in: i64,
    hits: usize,
) -> Mock {
    server
        .mock("POST", "/connect/token")
        .match_header("authorization", BASIC_AUTH)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "password".into()),
            Matcher::UrlEncoded("username".into(), USERNAME.into()),
            Matcher::UrlEncoded("password".into(), PASSWORD.into()),
            Matcher::UrlEncoded("scope".into(), "CustomerApi".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "AccessToken": access_token,
                "ExpiresIn": expires_in,
                "TokenType": "Bearer"
            })
            .to_string(),
        )
        .expect(hits)
        .create_async()
        .await
}

/// Bearer header value for `access_token`
pub fn bearer(access_token: &str) -> String {
    format!("Bearer {access_token}")
}
