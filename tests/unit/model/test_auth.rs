use chrono::{Duration, Utc};
use cloudiq_client::model::auth::{Token, TokenRequest, TokenResponse};

fn response(body: &str) -> TokenResponse {
    serde_json::from_str(body).unwrap()
}

#[test]
fn test_token_from_pascal_case_response() {
    let issued_at = Utc::now();
    let parsed = response(r#"{"AccessToken":"abc","ExpiresIn":3600,"TokenType":"Bearer","IdentityToken":"id"}"#);
    let token = Token::from_response(&parsed, issued_at).unwrap();

    assert_eq!(token.access_token, "abc");
    assert_eq!(token.bearer(), "Bearer abc");
    assert_eq!(token.expires_at, issued_at + Duration::seconds(3600));
    assert_eq!(parsed.extra["IdentityToken"], "id");
}

#[test]
fn test_token_defaults_lifetime_when_missing() {
    let issued_at = Utc::now();
    let token = Token::from_response(&response(r#"{"access_token":"abc"}"#), issued_at).unwrap();
    assert_eq!(token.expires_at, issued_at + Duration::seconds(3600));
    assert_eq!(token.token_type, "Bearer");
}

#[test]
fn test_token_requires_access_token() {
    assert!(Token::from_response(&response(r#"{"AccessToken":"  "}"#), Utc::now()).is_err());
    assert!(Token::from_response(&response("{}"), Utc::now()).is_err());
}

#[test]
fn test_token_expiry_honours_margin() {
    let token = Token::from_response(&response(r#"{"AccessToken":"abc","ExpiresIn":120}"#), Utc::now())
        .unwrap();
    assert!(!token.is_expired(60));
    // A margin longer than the lifetime still leaves the first half usable
    assert!(!token.is_expired(180));
    assert_eq!(token.refresh_at(180), token.issued_at + Duration::seconds(60));
    assert!(token.seconds_until_expiry() <= 120);
}

#[test]
fn test_huge_lifetime_is_an_error() {
    let parsed = response(r#"{"AccessToken":"abc","ExpiresIn":"9223372036854775807"}"#);
    assert_eq!(
        Token::from_response(&parsed, Utc::now()).unwrap_err(),
        "expires_in out of range"
    );
}

#[test]
fn test_expires_in_rejects_non_numeric() {
    assert!(serde_json::from_str::<TokenResponse>(r#"{"ExpiresIn":"soon"}"#).is_err());
}

#[test]
fn test_token_request_form_fields() {
    let request = TokenRequest::password("user@example.com", "pw", "CustomerApi");
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["grant_type"], "password");
    assert_eq!(value["username"], "user@example.com");
    assert_eq!(value["scope"], "CustomerApi");
}
