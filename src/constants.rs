/// Base URL of the CloudIQ REST API
pub const DEFAULT_BASE_URL: &str = "https://api.crayon.com/api/v1";
/// Path of the OAuth2 token endpoint, relative to the base URL
pub const TOKEN_PATH: &str = "connect/token";
/// OAuth2 scope requested with the resource-owner-password grant
pub const DEFAULT_SCOPE: &str = "CustomerApi";
/// Default timeout in seconds applied to every HTTP request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Seconds before the real expiry at which a cached token is treated as expired
pub const DEFAULT_TOKEN_MARGIN_SECS: i64 = 60;
/// Token lifetime assumed when the token endpoint omits `expires_in` (1 hour)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;
/// User agent string sent with every request
pub const USER_AGENT: &str = "cloudiq-client/0.1.0";
/// Publisher id of Microsoft in the CloudIQ catalog
pub const MICROSOFT_PUBLISHER_ID: i64 = 2;
/// Agreement type of the Microsoft Customer Agreement
pub const MICROSOFT_CUSTOMER_AGREEMENT_TYPE: i32 = 1;
