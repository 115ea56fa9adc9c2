/// Billing statements and usage cost
pub mod billing;
/// Agreements, products, programs, publishers and regions
pub mod catalog;
/// API clients, secrets and users
pub mod identity;
/// Organizations and the resources scoped to them
pub mod organization;
/// Customer tenants, Azure plans and subscriptions
pub mod tenant;
