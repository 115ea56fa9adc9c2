use crate::error::AppError;
use crate::model::params::Params;
use async_trait::async_trait;
use serde_json::Value;

/// Organizations and the resources scoped to them
///
/// `filter` arguments are merged over the required query parameters; a key in
/// the filter wins over a required key of the same name.
#[async_trait]
pub trait OrganizationService: Send + Sync {
    /// Gets the activity log of an entity
    async fn get_activity_logs(
        &self,
        entity_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;

    /// Gets the addresses of an organization
    async fn get_addresses(&self, org_id: i64, filter: Option<&Params>)
    -> Result<Value, AppError>;

    /// Gets one address of an organization
    async fn get_address(
        &self,
        org_id: i64,
        address_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;

    /// Gets all organizations the account can see
    async fn get_organizations(&self, filter: Option<&Params>) -> Result<Value, AppError>;

    /// Gets an organization
    async fn get_organization(&self, org_id: i64) -> Result<Value, AppError>;

    /// Gets the sales contact of an organization
    async fn get_organization_sales_contact(&self, org_id: i64) -> Result<Value, AppError>;

    /// Checks whether the current credentials can access an organization
    async fn get_organization_has_access(&self, org_id: i64) -> Result<Value, AppError>;

    /// Gets organization access entries
    async fn get_organization_access(&self, filter: Option<&Params>) -> Result<Value, AppError>;

    /// Gets organization access grants
    async fn get_organization_access_grant(
        &self,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;

    /// Gets the invoice profiles of an organization
    async fn get_invoice_profiles(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;

    /// Gets an invoice profile
    async fn get_invoice_profile(&self, invoice_profile_id: i64) -> Result<Value, AppError>;

    /// Deletes an invoice profile
    async fn delete_invoice_profile(&self, invoice_profile_id: i64) -> Result<Value, AppError>;

    /// Gets the groupings of an organization
    async fn get_groupings(&self, org_id: i64, filter: Option<&Params>)
    -> Result<Value, AppError>;

    /// Gets a grouping
    async fn get_grouping(&self, grouping_id: i64) -> Result<Value, AppError>;

    /// Deletes a grouping
    async fn delete_grouping(&self, grouping_id: i64) -> Result<Value, AppError>;

    /// Gets the Crayon accounts of an organization
    async fn get_crayon_accounts(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;

    /// Gets a Crayon account
    async fn get_crayon_account(&self, account_id: i64) -> Result<Value, AppError>;

    /// Gets the consumers of an organization
    async fn get_consumers(&self, org_id: i64, filter: Option<&Params>)
    -> Result<Value, AppError>;

    /// Gets a consumer
    async fn get_consumer(&self, consumer_id: i64) -> Result<Value, AppError>;

    /// Deletes a consumer
    async fn delete_consumer(&self, consumer_id: i64) -> Result<Value, AppError>;

    /// Gets management links
    async fn get_management_links(&self, filter: Option<&Params>) -> Result<Value, AppError>;

    /// Gets management links grouped by publisher
    async fn get_grouped_management_links(
        &self,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;
}
