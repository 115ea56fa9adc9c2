/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::{Config, Credentials};
use crate::application::interfaces::billing::BillingService;
use crate::application::interfaces::catalog::CatalogService;
use crate::application::interfaces::identity::IdentityService;
use crate::application::interfaces::organization::OrganizationService;
use crate::application::interfaces::tenant::TenantService;
use crate::error::AppError;
use crate::model::auth::TokenResponse;
use crate::model::http::HttpClient;
use crate::model::params::{Params, require_non_empty};
use crate::model::requests::{CustomerTenantAgreement, CustomerTenantDetailed, SubscriptionDetailed};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// CloudIQ API client
///
/// Cheap to clone; clones share the HTTP connection pool and the cached token.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client that authenticates on its first request
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client and fetches a token right away
    ///
    /// Fails with [`AppError::Authentication`] when the credentials are rejected.
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::connect(config).await?);
        Ok(Self { http_client })
    }

    /// Creates a client against the production API from explicit credentials
    pub fn from_credentials(credentials: Credentials) -> Result<Self, AppError> {
        Self::new(Config::with_credentials(credentials))
    }

    /// Request layer, for endpoints without a typed wrapper
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    /// Unauthenticated health check
    pub async fn ping(&self) -> Result<Value, AppError> {
        self.http_client.ping().await
    }

    /// Gets the authenticated user
    pub async fn me(&self) -> Result<Value, AppError> {
        self.http_client.me().await
    }

    /// Requests a fresh token
    pub async fn get_token(&self) -> Result<TokenResponse, AppError> {
        self.http_client.get_token().await
    }

    /// Checks the cached token against the API
    pub async fn validate_token(&self) -> bool {
        self.http_client.validate_token().await
    }

    async fn get_for_organization(
        &self,
        path: &str,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        let params = Params::new().with("OrganizationId", org_id).merged(filter);
        self.http_client.get(path, Some(&params)).await
    }
}

#[async_trait]
impl OrganizationService for Client {
    async fn get_activity_logs(
        &self,
        entity_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting activity logs for entity {}", entity_id);
        let params = Params::new().with("Id", entity_id).merged(filter);
        self.http_client.get("ActivityLogs", Some(&params)).await
    }

    async fn get_addresses(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting addresses for organization {}", org_id);
        let path = format!("organizations/{org_id}/Addresses");
        self.http_client.get(&path, filter).await
    }

    async fn get_address(
        &self,
        org_id: i64,
        address_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting address {} of organization {}", address_id, org_id);
        let path = format!("organizations/{org_id}/Addresses/{address_id}");
        self.http_client.get(&path, filter).await
    }

    async fn get_organizations(&self, filter: Option<&Params>) -> Result<Value, AppError> {
        info!("Getting organizations");
        let organizations: Value = self.http_client.get("Organizations", filter).await?;
        let total_hits = organizations
            .get("TotalHits")
            .and_then(|hits| hits.as_i64())
            .unwrap_or_default();
        debug!("Organizations obtained: {}", total_hits);
        Ok(organizations)
    }

    async fn get_organization(&self, org_id: i64) -> Result<Value, AppError> {
        info!("Getting organization {}", org_id);
        self.http_client
            .get(&format!("Organizations/{org_id}"), None)
            .await
    }

    async fn get_organization_sales_contact(&self, org_id: i64) -> Result<Value, AppError> {
        info!("Getting sales contact of organization {}", org_id);
        self.http_client
            .get(&format!("Organizations/{org_id}/salescontact"), None)
            .await
    }

    async fn get_organization_has_access(&self, org_id: i64) -> Result<Value, AppError> {
        info!("Checking access to organization {}", org_id);
        self.http_client
            .get(&format!("Organizations/HasAccess/{org_id}"), None)
            .await
    }

    async fn get_organization_access(&self, filter: Option<&Params>) -> Result<Value, AppError> {
        info!("Getting organization access");
        self.http_client.get("OrganizationAccess", filter).await
    }

    async fn get_organization_access_grant(
        &self,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting organization access grants");
        self.http_client.get("OrganizationAccess/grant", filter).await
    }

    async fn get_invoice_profiles(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting invoice profiles for organization {}", org_id);
        self.get_for_organization("InvoiceProfiles", org_id, filter)
            .await
    }

    async fn get_invoice_profile(&self, invoice_profile_id: i64) -> Result<Value, AppError> {
        info!("Getting invoice profile {}", invoice_profile_id);
        self.http_client
            .get(&format!("InvoiceProfiles/{invoice_profile_id}"), None)
            .await
    }

    async fn delete_invoice_profile(&self, invoice_profile_id: i64) -> Result<Value, AppError> {
        info!("Deleting invoice profile {}", invoice_profile_id);
        self.http_client
            .delete(&format!("InvoiceProfiles/{invoice_profile_id}"), None)
            .await
    }

    async fn get_groupings(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting groupings for organization {}", org_id);
        self.get_for_organization("Groupings", org_id, filter).await
    }

    async fn get_grouping(&self, grouping_id: i64) -> Result<Value, AppError> {
        info!("Getting grouping {}", grouping_id);
        self.http_client
            .get(&format!("Groupings/{grouping_id}"), None)
            .await
    }

    async fn delete_grouping(&self, grouping_id: i64) -> Result<Value, AppError> {
        info!("Deleting grouping {}", grouping_id);
        self.http_client
            .delete(&format!("Groupings/{grouping_id}"), None)
            .await
    }

    async fn get_crayon_accounts(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting Crayon accounts for organization {}", org_id);
        self.get_for_organization("CrayonAccounts", org_id, filter)
            .await
    }

    async fn get_crayon_account(&self, account_id: i64) -> Result<Value, AppError> {
        info!("Getting Crayon account {}", account_id);
        self.http_client
            .get(&format!("CrayonAccounts/{account_id}"), None)
            .await
    }

    async fn get_consumers(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting consumers for organization {}", org_id);
        self.get_for_organization("Consumers", org_id, filter).await
    }

    async fn get_consumer(&self, consumer_id: i64) -> Result<Value, AppError> {
        info!("Getting consumer {}", consumer_id);
        self.http_client
            .get(&format!("Consumers/{consumer_id}"), None)
            .await
    }

    async fn delete_consumer(&self, consumer_id: i64) -> Result<Value, AppError> {
        info!("Deleting consumer {}", consumer_id);
        self.http_client
            .delete(&format!("Consumers/{consumer_id}"), None)
            .await
    }

    async fn get_management_links(&self, filter: Option<&Params>) -> Result<Value, AppError> {
        info!("Getting management links");
        self.http_client.get("ManagementLinks", filter).await
    }

    async fn get_grouped_management_links(
        &self,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting grouped management links");
        self.http_client.get("ManagementLinks/grouped", filter).await
    }
}

#[async_trait]
impl CatalogService for Client {
    async fn get_agreements(&self, filter: Option<&Params>) -> Result<Value, AppError> {
        info!("Getting agreements");
        self.http_client.get("Agreements", filter).await
    }

    async fn get_agreement_report(&self, product_container_id: i64) -> Result<Value, AppError> {
        info!("Getting agreement report for product container {}", product_container_id);
        self.http_client
            .get(&format!("AgreementReports/{product_container_id}"), None)
            .await
    }

    async fn get_agreement_products(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting agreement products for organization {}", org_id);
        let products = self
            .get_for_organization("AgreementProducts", org_id, filter)
            .await?;
        let count = products
            .get("Items")
            .and_then(|items| items.as_array())
            .map_or(0, Vec::len);
        debug!("Agreement products obtained: {}", count);
        Ok(products)
    }

    async fn get_supported_billing_cycles(
        &self,
        part_number: &str,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        require_non_empty("part number", part_number)?;
        info!("Getting supported billing cycles for {}", part_number);
        let url = self.http_client.url_with_segments(&[
            "AgreementProducts",
            part_number,
            "supportedbillingcycles",
        ])?;
        self.http_client.get(&url, filter).await
    }

    async fn get_billing_cycles(&self, include_unknown: bool) -> Result<Value, AppError> {
        info!("Getting billing cycles");
        let params = Params::new().with("includeUnknown", include_unknown);
        self.http_client.get("BillingCycles", Some(&params)).await
    }

    async fn get_product_variant_billing_cycles(
        &self,
        product_variant_id: i64,
    ) -> Result<Value, AppError> {
        info!("Getting billing cycles of product variant {}", product_variant_id);
        self.http_client
            .get(
                &format!("BillingCycles/productVariant/{product_variant_id}"),
                None,
            )
            .await
    }

    async fn get_billing_cycles_name_dictionary(&self) -> Result<Value, AppError> {
        info!("Getting billing cycle names");
        self.http_client
            .get("BillingCycles/cspNameDictionary", None)
            .await
    }

    async fn get_programs(&self, filter: Option<&Params>) -> Result<Value, AppError> {
        info!("Getting programs");
        self.http_client.get("Programs", filter).await
    }

    async fn get_program(&self, program_id: i64) -> Result<Value, AppError> {
        info!("Getting program {}", program_id);
        self.http_client
            .get(&format!("Programs/{program_id}"), None)
            .await
    }

    async fn get_publishers(&self, filter: Option<&Params>) -> Result<Value, AppError> {
        info!("Getting publishers");
        self.http_client.get("publishers", filter).await
    }

    async fn get_publisher(&self, publisher_id: i64) -> Result<Value, AppError> {
        info!("Getting publisher {}", publisher_id);
        self.http_client
            .get(&format!("publishers/{publisher_id}"), None)
            .await
    }

    async fn get_regions(&self, filter: Option<&Params>) -> Result<Value, AppError> {
        info!("Getting regions");
        self.http_client.get("Regions", filter).await
    }

    async fn get_region_by_code(&self, region_code: &str) -> Result<Value, AppError> {
        require_non_empty("region code", region_code)?;
        info!("Getting region {}", region_code);
        let params = Params::new().with("regionCode", region_code);
        self.http_client.get("Regions/bycode", Some(&params)).await
    }

    async fn get_product_containers(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting product containers for organization {}", org_id);
        self.get_for_organization("ProductContainers", org_id, filter)
            .await
    }

    async fn get_product_container(&self, product_container_id: i64) -> Result<Value, AppError> {
        info!("Getting product container {}", product_container_id);
        self.http_client
            .get(&format!("ProductContainers/{product_container_id}"), None)
            .await
    }

    async fn get_product_container_row_issues(
        &self,
        product_container_id: i64,
    ) -> Result<Value, AppError> {
        info!("Getting row issues of product container {}", product_container_id);
        self.http_client
            .get(
                &format!("ProductContainers/rowissues/{product_container_id}"),
                None,
            )
            .await
    }

    async fn get_product_container_shopping_cart(
        &self,
        org_id: i64,
    ) -> Result<Value, AppError> {
        info!("Getting shopping cart for organization {}", org_id);
        self.get_for_organization("ProductContainers/getorcreateshoppingcart", org_id, None)
            .await
    }

    async fn delete_product_container(
        &self,
        product_container_id: i64,
    ) -> Result<Value, AppError> {
        info!("Deleting product container {}", product_container_id);
        self.http_client
            .delete(&format!("ProductContainers/{product_container_id}"), None)
            .await
    }

    async fn patch_product_container_row(
        &self,
        product_container_id: i64,
        row_id: i64,
        row: &Value,
    ) -> Result<Value, AppError> {
        info!(
            "Updating row {} of product container {}",
            row_id, product_container_id
        );
        let path = format!("ProductContainers/{product_container_id}/row/{row_id}");
        self.http_client.patch(&path, row).await
    }

    async fn delete_reseller_sales_prices(
        &self,
        object_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Deleting reseller sales prices of object {}", object_id);
        let params = Params::new().with("objectID", object_id).merged(filter);
        self.http_client
            .delete("ResellerSalesPrices", Some(&params))
            .await
    }

    async fn get_blog_items(&self, filter: Option<&Params>) -> Result<Value, AppError> {
        info!("Getting blog items");
        self.http_client.get("BlogItems", filter).await
    }
}

#[async_trait]
impl BillingService for Client {
    async fn get_billing_statements(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting billing statements for organization {}", org_id);
        self.get_for_organization("BillingStatements", org_id, filter)
            .await
    }

    async fn get_grouped_billing_statements(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting grouped billing statements for organization {}", org_id);
        self.get_for_organization("BillingStatements/grouped", org_id, filter)
            .await
    }

    async fn get_billing_statement_excel(&self, statement_id: i64) -> Result<Vec<u8>, AppError> {
        info!("Downloading billing statement {} (Excel)", statement_id);
        self.http_client
            .get_bytes(&format!("BillingStatements/file/{statement_id}"), None)
            .await
    }

    async fn get_billing_statement_csv(&self, statement_id: i64) -> Result<Vec<u8>, AppError> {
        info!("Downloading reconciliation file of statement {}", statement_id);
        self.http_client
            .get_bytes(
                &format!("BillingStatements/{statement_id}/reconciliationfile"),
                None,
            )
            .await
    }

    async fn get_billing_statement_json(&self, statement_id: i64) -> Result<Vec<u8>, AppError> {
        info!("Downloading billing records file of statement {}", statement_id);
        self.http_client
            .get_bytes(
                &format!("BillingStatements/{statement_id}/billingrecordsfile"),
                None,
            )
            .await
    }

    async fn get_usage_cost(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting usage cost for organization {}", org_id);
        self.http_client
            .get(&format!("UsageCost/organization/{org_id}"), filter)
            .await
    }
}

#[async_trait]
impl TenantService for Client {
    async fn get_customer_tenants(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting customer tenants for organization {}", org_id);
        self.get_for_organization("CustomerTenants", org_id, filter)
            .await
    }

    async fn get_customer_tenant(&self, tenant_id: i64) -> Result<Value, AppError> {
        info!("Getting customer tenant {}", tenant_id);
        self.http_client
            .get(&format!("CustomerTenants/{tenant_id}"), None)
            .await
    }

    async fn get_customer_tenant_details(&self, tenant_id: i64) -> Result<Value, AppError> {
        info!("Getting details of customer tenant {}", tenant_id);
        self.http_client
            .get(&format!("CustomerTenants/{tenant_id}/detailed"), None)
            .await
    }

    async fn get_customer_tenant_azure_plan(&self, tenant_id: i64) -> Result<Value, AppError> {
        info!("Getting Azure plan of customer tenant {}", tenant_id);
        self.http_client
            .get(&format!("CustomerTenants/{tenant_id}/AzurePlan"), None)
            .await
    }

    async fn create_tenant(&self, tenant: &CustomerTenantDetailed) -> Result<Value, AppError> {
        tenant.validate()?;
        info!(
            "Creating customer tenant {} ({}.onmicrosoft.com)",
            tenant.tenant.name, tenant.tenant.domain_prefix
        );
        let created: Value = self.http_client.post("CustomerTenants", tenant).await?;
        let tenant_id = created
            .pointer("/Tenant/Id")
            .and_then(|id| id.as_i64())
            .unwrap_or_default();
        debug!("Customer tenant created with id {}", tenant_id);
        Ok(created)
    }

    async fn delete_customer_tenant(&self, tenant_id: i64) -> Result<Value, AppError> {
        info!("Deleting customer tenant {}", tenant_id);
        self.http_client
            .delete(&format!("CustomerTenants/{tenant_id}"), None)
            .await
    }

    async fn get_customer_tenant_agreements(
        &self,
        tenant_id: i64,
        agreement_type_consent: &str,
    ) -> Result<Value, AppError> {
        require_non_empty("agreement type consent", agreement_type_consent)?;
        info!("Getting agreements of customer tenant {}", tenant_id);
        let params = Params::new().with("AgreementTypeConsent", agreement_type_consent);
        self.http_client
            .get(&format!("CustomerTenants/{tenant_id}/Agreements"), Some(&params))
            .await
    }

    async fn create_tenant_agreement(
        &self,
        tenant_id: i64,
        agreement: &CustomerTenantAgreement,
    ) -> Result<Value, AppError> {
        agreement.validate()?;
        info!("Accepting customer agreement for tenant {}", tenant_id);
        self.http_client
            .post(&format!("customertenants/{tenant_id}/agreements"), agreement)
            .await
    }

    async fn get_azure_plan(&self, azure_plan_id: i64) -> Result<Value, AppError> {
        info!("Getting Azure plan {}", azure_plan_id);
        self.http_client
            .get(&format!("AzurePlans/{azure_plan_id}"), None)
            .await
    }

    async fn get_azure_subscriptions(
        &self,
        azure_plan_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError> {
        info!("Getting subscriptions of Azure plan {}", azure_plan_id);
        self.http_client
            .get(&format!("AzurePlans/{azure_plan_id}/azureSubscriptions"), filter)
            .await
    }

    async fn rename_azure_subscription(
        &self,
        azure_plan_id: i64,
        subscription_id: i64,
        rename: &Value,
    ) -> Result<Value, AppError> {
        info!(
            "Renaming subscription {} of Azure plan {}",
            subscription_id, azure_plan_id
        );
        let path =
            format!("AzurePlans/{azure_plan_id}/azureSubscriptions/{subscription_id}/rename");
        self.http_client.patch(&path, rename).await
    }

    async fn create_subscription(
        &self,
        subscription: &SubscriptionDetailed,
    ) -> Result<Value, AppError> {
        subscription.validate()?;
        info!(
            "Creating subscription {} x{} for tenant {}",
            subscription.product.part_number, subscription.quantity, subscription.customer_tenant.id
        );
        self.http_client.post("Subscriptions", subscription).await
    }

    async fn delete_subscription_tag(&self, subscription_id: i64) -> Result<Value, AppError> {
        info!("Deleting tags of subscription {}", subscription_id);
        self.http_client
            .delete(&format!("Subscriptions/{subscription_id}/tags"), None)
            .await
    }

    async fn delete_asset_tag(&self, asset_id: i64) -> Result<Value, AppError> {
        info!("Deleting tags of asset {}", asset_id);
        self.http_client
            .delete(&format!("Assets/{asset_id}/tags"), None)
            .await
    }
}

#[async_trait]
impl IdentityService for Client {
    async fn get_clients(&self, filter: Option<&Params>) -> Result<Value, AppError> {
        info!("Getting API clients");
        self.http_client.get("Clients", filter).await
    }

    async fn get_client(&self, client_id: &str) -> Result<Value, AppError> {
        require_non_empty("client id", client_id)?;
        info!("Getting API client {}", client_id);
        let url = self.http_client.url_with_segments(&["Clients", client_id])?;
        self.http_client.get(&url, None).await
    }

    async fn create_client(&self, client: &Value) -> Result<Value, AppError> {
        info!("Creating API client");
        self.http_client.post("Clients", client).await
    }

    async fn update_client(&self, client_id: &str, client: &Value) -> Result<Value, AppError> {
        require_non_empty("client id", client_id)?;
        info!("Updating API client {}", client_id);
        let url = self.http_client.url_with_segments(&["Clients", client_id])?;
        self.http_client.put(&url, client).await
    }

    async fn delete_client(&self, client_id: &str) -> Result<Value, AppError> {
        require_non_empty("client id", client_id)?;
        info!("Deleting API client {}", client_id);
        let url = self.http_client.url_with_segments(&["Clients", client_id])?;
        self.http_client.delete(&url, None).await
    }

    async fn create_secret(&self, secret: &Value) -> Result<Value, AppError> {
        info!("Creating client secret");
        self.http_client.post("Secrets", secret).await
    }

    async fn delete_secret(&self, client_id: &str, secret_id: &str) -> Result<Value, AppError> {
        require_non_empty("client id", client_id)?;
        require_non_empty("secret id", secret_id)?;
        info!("Deleting secret {} of API client {}", secret_id, client_id);
        let params = Params::new()
            .with("clientID", client_id)
            .with("secretID", secret_id);
        self.http_client.delete("Secrets", Some(&params)).await
    }

    async fn get_users(&self, filter: Option<&Params>) -> Result<Value, AppError> {
        info!("Getting users");
        self.http_client.get("Users", filter).await
    }

    async fn get_user(&self, user_id: &str) -> Result<Value, AppError> {
        require_non_empty("user id", user_id)?;
        info!("Getting user {}", user_id);
        let url = self.http_client.url_with_segments(&["Users", user_id])?;
        self.http_client.get(&url, None).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Value, AppError> {
        require_non_empty("username", username)?;
        info!("Getting user {}", username);
        let params = Params::new().with("userName", username);
        self.http_client.get("Users/user", Some(&params)).await
    }

    async fn delete_user(&self, user_id: &str) -> Result<Value, AppError> {
        require_non_empty("user id", user_id)?;
        info!("Deleting user {}", user_id);
        let url = self.http_client.url_with_segments(&["Users", user_id])?;
        self.http_client.delete(&url, None).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.http_client.config().rest_api.base_url)
            .finish()
    }
}
