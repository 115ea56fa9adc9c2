use cloudiq_client::application::config::{Config, Credentials};
use cloudiq_client::constants::{DEFAULT_BASE_URL, DEFAULT_TOKEN_MARGIN_SECS};
use cloudiq_client::error::AppError;
use std::env;

#[test]
fn test_config_new_reads_environment() {
    unsafe {
        env::set_var("CLIENT_ID", "env-client");
        env::set_var("CLIENT_SECRET", "env-secret");
        env::set_var("CLOUDIQ_USER", "env-user@example.com");
        env::set_var("CLOUDIQ_PW", "env-password");
        env::set_var("CLOUDIQ_BASE_URL", "https://sandbox.example.com/api/v1");
        env::set_var("CLOUDIQ_TIMEOUT", "5");
        env::set_var("CLOUDIQ_TOKEN_MARGIN_SECS", "not-a-number");
        env::remove_var("CLOUDIQ_TOKEN_URL");
        env::remove_var("CLOUDIQ_SCOPE");
    }

    let config = Config::new();

    assert_eq!(config.credentials.client_id, "env-client");
    assert_eq!(config.credentials.client_secret, "env-secret");
    assert_eq!(config.credentials.username, "env-user@example.com");
    assert_eq!(config.credentials.password, "env-password");
    assert_eq!(config.rest_api.base_url, "https://sandbox.example.com/api/v1");
    assert_eq!(
        config.token.url,
        "https://sandbox.example.com/api/v1/connect/token"
    );
    assert_eq!(config.token.scope, "CustomerApi");
    assert_eq!(config.rest_api.timeout, 5);
    assert_eq!(config.token.expiry_margin_secs, DEFAULT_TOKEN_MARGIN_SECS);
    assert!(config.validate().is_ok());

    unsafe {
        for var in [
            "CLIENT_ID",
            "CLIENT_SECRET",
            "CLOUDIQ_USER",
            "CLOUDIQ_PW",
            "CLOUDIQ_BASE_URL",
            "CLOUDIQ_TIMEOUT",
            "CLOUDIQ_TOKEN_MARGIN_SECS",
        ] {
            env::remove_var(var);
        }
    }
}

#[test]
fn test_config_with_credentials_targets_production() {
    let config = Config::with_credentials(Credentials::new("id", "secret", "user", "pw"));
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert!(config.token.url.ends_with("/connect/token"));
}

#[test]
fn test_config_validate_rejects_empty_urls() {
    let mut config = Config::with_credentials(Credentials::new("id", "secret", "user", "pw"));
    config.token.url = String::new();
    match config.validate() {
        Err(AppError::Config(msg)) => assert_eq!(msg, "token url is empty"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_credentials_serialization_skips_secrets() {
    let credentials = Credentials::new("id", "client-secret-value", "user", "password-value");
    let value = serde_json::to_value(&credentials).unwrap();
    assert_eq!(value["client_id"], "id");
    assert_eq!(value["username"], "user");
    assert!(value.get("client_secret").is_none());
    assert!(value.get("password").is_none());
}
