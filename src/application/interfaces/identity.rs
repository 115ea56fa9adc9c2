use crate::error::AppError;
use crate::model::params::Params;
use async_trait::async_trait;
use serde_json::Value;

/// API clients, client secrets and users
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Gets API clients
    async fn get_clients(&self, filter: Option<&Params>) -> Result<Value, AppError>;

    /// Gets an API client
    async fn get_client(&self, client_id: &str) -> Result<Value, AppError>;

    /// Creates an API client
    async fn create_client(&self, client: &Value) -> Result<Value, AppError>;

    /// Replaces an API client
    async fn update_client(&self, client_id: &str, client: &Value) -> Result<Value, AppError>;

    /// Deletes an API client
    async fn delete_client(&self, client_id: &str) -> Result<Value, AppError>;

    /// Creates a client secret
    async fn create_secret(&self, secret: &Value) -> Result<Value, AppError>;

    /// Deletes a client secret
    async fn delete_secret(&self, client_id: &str, secret_id: &str) -> Result<Value, AppError>;

    /// Gets users
    async fn get_users(&self, filter: Option<&Params>) -> Result<Value, AppError>;

    /// Gets a user
    async fn get_user(&self, user_id: &str) -> Result<Value, AppError>;

    /// Gets a user by username
    async fn get_user_by_username(&self, username: &str) -> Result<Value, AppError>;

    /// Deletes a user
    async fn delete_user(&self, user_id: &str) -> Result<Value, AppError>;
}
