use crate::error::AppError;
use crate::model::params::Params;
use crate::model::requests::{CustomerTenantAgreement, CustomerTenantDetailed, SubscriptionDetailed};
use async_trait::async_trait;
use serde_json::Value;

/// Customer tenants, Azure plans and subscriptions
#[async_trait]
pub trait TenantService: Send + Sync {
    /// Gets the customer tenants of an organization
    async fn get_customer_tenants(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;

    /// Gets a customer tenant
    async fn get_customer_tenant(&self, tenant_id: i64) -> Result<Value, AppError>;

    /// Gets a customer tenant with profile and company details
    async fn get_customer_tenant_details(&self, tenant_id: i64) -> Result<Value, AppError>;

    /// Gets the Azure plan of a customer tenant
    async fn get_customer_tenant_azure_plan(&self, tenant_id: i64) -> Result<Value, AppError>;

    /// Creates a customer tenant
    ///
    /// The response holds the new tenant under `Tenant` and the generated
    /// admin credentials under `User`.
    async fn create_tenant(&self, tenant: &CustomerTenantDetailed) -> Result<Value, AppError>;

    /// Deletes a customer tenant
    async fn delete_customer_tenant(&self, tenant_id: i64) -> Result<Value, AppError>;

    /// Gets the agreements of a customer tenant
    async fn get_customer_tenant_agreements(
        &self,
        tenant_id: i64,
        agreement_type_consent: &str,
    ) -> Result<Value, AppError>;

    /// Accepts an agreement on behalf of a customer tenant
    async fn create_tenant_agreement(
        &self,
        tenant_id: i64,
        agreement: &CustomerTenantAgreement,
    ) -> Result<Value, AppError>;

    /// Gets an Azure plan
    async fn get_azure_plan(&self, azure_plan_id: i64) -> Result<Value, AppError>;

    /// Gets the subscriptions of an Azure plan
    async fn get_azure_subscriptions(
        &self,
        azure_plan_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;

    /// Renames a subscription of an Azure plan
    async fn rename_azure_subscription(
        &self,
        azure_plan_id: i64,
        subscription_id: i64,
        rename: &Value,
    ) -> Result<Value, AppError>;

    /// Creates a subscription for a product
    async fn create_subscription(
        &self,
        subscription: &SubscriptionDetailed,
    ) -> Result<Value, AppError>;

    /// Deletes the tags of a subscription
    async fn delete_subscription_tag(&self, subscription_id: i64) -> Result<Value, AppError>;

    /// Deletes the tags of an asset
    async fn delete_asset_tag(&self, asset_id: i64) -> Result<Value, AppError>;
}
