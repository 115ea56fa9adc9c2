use cloudiq_client::error::AppError;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_authentication() {
    let error = AppError::Authentication {
        status: StatusCode::BAD_REQUEST,
        body: "invalid_grant".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "authentication failed (400 Bad Request): invalid_grant"
    );
    assert!(error.is_authentication());
    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api {
        status: StatusCode::NOT_FOUND,
        body: "missing".to_string(),
    };
    assert_eq!(error.to_string(), "api error (404 Not Found): missing");
    assert!(!error.is_authentication());
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("part number is required".to_string());
    assert_eq!(error.to_string(), "invalid input: part number is required");
    assert!(error.status().is_none());
}

#[test]
fn test_app_error_display_config() {
    let error = AppError::Config("missing credentials: password".to_string());
    assert_eq!(
        error.to_string(),
        "configuration error: missing credentials: password"
    );
}

#[test]
fn test_app_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error:"));
    assert!(error.source().is_some());
}
