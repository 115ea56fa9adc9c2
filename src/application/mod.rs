/// Token acquisition and caching
pub mod auth;
/// High-level client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces grouped by resource family
pub mod interfaces;
