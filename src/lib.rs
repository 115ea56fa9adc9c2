/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # CloudIQ Client
//!
//! Async client for Crayon's CloudIQ REST API.
//!
//! The crate is split in two layers:
//!
//! - a core that owns the OAuth2 resource-owner-password token
//!   ([`application::auth::TokenManager`]) and dispatches authenticated
//!   requests ([`model::http::HttpClient`]);
//! - thin resource methods grouped in service traits
//!   ([`application::interfaces`]) and implemented by
//!   [`application::client::Client`].
//!
//! ```ignore
//! use cloudiq_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let organizations = client.get_organizations(None).await?;
//! ```
//!
//! A client instance holds exactly one token. Token refresh is serialized
//! behind a mutex, so a client may be shared between tasks, but each call
//! issues a single request and waits for it.

/// Client, configuration, token management and resource services
pub mod application;
/// Global constants
pub mod constants;
/// Error type used across the crate
pub mod error;
/// Wire models, request parameters and the HTTP dispatch layer
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Helpers for rendering API responses
pub mod presentation;
/// Logging and environment helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
