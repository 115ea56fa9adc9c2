use crate::common::{BASIC_AUTH, bearer, mock_token, test_config};
use cloudiq_client::application::auth::TokenManager;
use cloudiq_client::error::AppError;
use cloudiq_client::model::http::HttpClient;
use mockito::Server;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn get_token_returns_response_and_caches_token() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, "token-1", 3600, 1).await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    let response = client.get_token().await.unwrap();

    assert_eq!(response.access_token.as_deref(), Some("token-1"));
    assert_eq!(response.expires_in, Some(3600));

    let cached = client.auth().current_token().await.unwrap();
    assert_eq!(cached.access_token, "token-1");
    assert!(cached.seconds_until_expiry() > 3500);
    assert!(!cached.is_expired(60));

    token_mock.assert_async().await;
}

#[tokio::test]
async fn get_token_accepts_snake_case_fields() {
    let mut server = Server::new_async().await;
    let token_mock = server
        .mock("POST", "/connect/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"oauth-token","expires_in":"1800","token_type":"Bearer"}"#)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    let response = client.get_token().await.unwrap();

    assert_eq!(response.access_token.as_deref(), Some("oauth-token"));
    assert_eq!(response.expires_in, Some(1800));
    token_mock.assert_async().await;
}

#[tokio::test]
async fn invalid_password_fails_with_authentication_error() {
    let mut server = Server::new_async().await;
    let token_mock = server
        .mock("POST", "/connect/token")
        .match_header("authorization", BASIC_AUTH)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"invalid_grant"}"#)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    let err = client.get_token().await.unwrap_err();

    match &err {
        AppError::Authentication { status, body } => {
            assert_eq!(*status, StatusCode::BAD_REQUEST);
            assert!(body.contains("invalid_grant"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_authentication());
    assert!(client.auth().current_token().await.is_none());
    token_mock.assert_async().await;
}

#[tokio::test]
async fn malformed_token_response_is_an_authentication_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/connect/token")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    match client.get_token().await {
        Err(AppError::Authentication { status, body }) => {
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("malformed token response"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn token_response_without_access_token_is_rejected() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/connect/token")
        .with_status(200)
        .with_body(r#"{"Error":"invalid_client","ExpiresIn":0}"#)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    match client.get_token().await {
        Err(AppError::Authentication { body, .. }) => assert_eq!(body, "invalid_client"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn valid_token_is_reused_across_calls() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, "token-1", 3600, 1).await;
    let me_mock = server
        .mock("GET", "/Me")
        .match_header("authorization", bearer("token-1").as_str())
        .with_status(200)
        .with_body(r#"{"UserName":"admin@example.com"}"#)
        .expect(3)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    for _ in 0..3 {
        let me = client.me().await.unwrap();
        assert_eq!(me["UserName"], "admin@example.com");
    }

    token_mock.assert_async().await;
    me_mock.assert_async().await;
}

#[tokio::test]
async fn expired_token_triggers_one_reauthentication() {
    let mut server = Server::new_async().await;
    // 61 s lifetime with the default 60 s margin: fresh for one second
    let token_mock = mock_token(&mut server, "token-1", 61, 2).await;
    let org_mock = server
        .mock("GET", "/Organizations")
        .match_header("authorization", bearer("token-1").as_str())
        .with_status(200)
        .with_body(r#"{"Items":[],"TotalHits":0}"#)
        .expect(3)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    let _: Value = client.get("Organizations", None).await.unwrap();
    let _: Value = client.get("Organizations", None).await.unwrap();

    tokio::time::sleep(Duration::from_millis(1100)).await;
    let organizations: Value = client.get("Organizations", None).await.unwrap();

    assert_eq!(organizations["TotalHits"], 0);
    token_mock.assert_async().await;
    org_mock.assert_async().await;
}

#[tokio::test]
async fn token_shorter_than_margin_is_reused() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, "short-lived", 50, 1).await;
    let org_mock = server
        .mock("GET", "/Organizations")
        .match_header("authorization", bearer("short-lived").as_str())
        .with_status(200)
        .with_body("{}")
        .expect(3)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    for _ in 0..3 {
        let _: Value = client.get("Organizations", None).await.unwrap();
    }

    token_mock.assert_async().await;
    org_mock.assert_async().await;
}

#[tokio::test]
async fn huge_margin_does_not_break_token_reuse() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, "token-1", 3600, 1).await;
    server
        .mock("GET", "/Me")
        .with_status(200)
        .with_body("{}")
        .expect(2)
        .create_async()
        .await;

    let mut config = test_config(&server);
    config.token.expiry_margin_secs = i64::MAX;
    let client = HttpClient::new(config).unwrap();
    client.me().await.unwrap();
    client.me().await.unwrap();

    token_mock.assert_async().await;
}

#[tokio::test]
async fn out_of_range_lifetime_is_an_authentication_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/connect/token")
        .with_status(200)
        .with_body(r#"{"AccessToken":"t","ExpiresIn":9223372036854775807}"#)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    match client.get_token().await {
        Err(AppError::Authentication { status, body }) => {
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, "expires_in out of range");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(client.auth().current_token().await.is_none());
}

#[tokio::test]
async fn concurrent_callers_share_one_token_request() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, "token-1", 3600, 1).await;
    let me_mock = server
        .mock("GET", "/Me")
        .with_status(200)
        .with_body("{}")
        .expect(5)
        .create_async()
        .await;

    let client = Arc::new(HttpClient::new(test_config(&server)).unwrap());
    let mut handles = Vec::new();
    for _ in 0..5 {
        let client = client.clone();
        handles.push(tokio::spawn(async move { client.me().await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    token_mock.assert_async().await;
    me_mock.assert_async().await;
}

#[tokio::test]
async fn validate_token_reports_token_state() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, "token-1", 3600, 1).await;
    let me_mock = server
        .mock("GET", "/Me")
        .match_header("authorization", bearer("token-1").as_str())
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    assert!(!client.validate_token().await);

    client.get_token().await.unwrap();
    assert!(client.validate_token().await);

    me_mock.assert_async().await;
}

#[tokio::test]
async fn validate_token_is_false_when_rejected() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, "revoked", 3600, 1).await;
    server
        .mock("GET", "/Me")
        .with_status(401)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    client.get_token().await.unwrap();
    assert!(!client.validate_token().await);
}

#[tokio::test]
async fn token_manager_debug_hides_credentials() {
    let server = Server::new_async().await;
    let config = Arc::new(test_config(&server));
    let manager = TokenManager::new(config, reqwest::Client::new());
    let rendered = format!("{manager:?}");
    assert!(rendered.contains("connect/token"));
    assert!(!rendered.contains("test-secret"));
    assert!(!rendered.contains("pa55word"));
}

#[tokio::test]
async fn token_response_debug_redacts_tokens() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, "very-secret-token", 3600, 1).await;
    let client = HttpClient::new(test_config(&server)).unwrap();
    let response = client.get_token().await.unwrap();

    let rendered = format!("{response:?}");
    assert!(!rendered.contains("very-secret-token"));
    assert_eq!(
        serde_json::to_value(&response).unwrap()["AccessToken"],
        json!("very-secret-token")
    );
}
