/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # CloudIQ Client Prelude
//!
//! Commonly used types and traits of the library in one import.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloudiq_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new(Config::new())?;
//! let products = client.get_agreement_products(123456, None).await?;
//! println!("{}", ProductTable::from_collection(&products));
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the CloudIQ client
pub use crate::application::config::{Config, Credentials, RestApiConfig, TokenConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, CloudIqResult};

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Token cache and acquisition
pub use crate::application::auth::TokenManager;

/// Token types
pub use crate::model::auth::{Token, TokenResponse};

// ============================================================================
// CLIENT AND SERVICES (TRAITS)
// ============================================================================

/// High-level client
pub use crate::application::client::Client;

/// Service interfaces
pub use crate::application::interfaces::{
    billing::BillingService, catalog::CatalogService, identity::IdentityService,
    organization::OrganizationService, tenant::TenantService,
};

/// Request layer
pub use crate::model::http::{HttpClient, make_http_request};

// ============================================================================
// DATA MODELS
// ============================================================================

/// Query parameters
pub use crate::model::params::{ParamValue, Params};

/// Creation payloads
pub use crate::model::requests::{
    Address, Company, Contact, CustomerTenantAgreement, CustomerTenantDetailed,
    SubscriptionDetailed, TENANT_TYPE_T1, TENANT_TYPE_T2, TenantUser,
};

/// Presentation helpers
pub use crate::presentation::product::{ProductSummary, ProductTable, product_families};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

/// Environment helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

/// Constants
pub use crate::constants::*;

// ============================================================================
// EXTERNAL DEPENDENCIES (COMMONLY USED)
// ============================================================================

/// Async trait support
pub use async_trait::async_trait;

/// JSON values
pub use serde_json::Value;

/// Logging macros
pub use tracing::{debug, error, info, warn};
