use crate::error::AppError;
use crate::model::params::Params;
use async_trait::async_trait;
use serde_json::Value;

/// Agreements, products, billing cycles, programs, publishers and regions
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Gets agreements
    async fn get_agreements(&self, filter: Option<&Params>) -> Result<Value, AppError>;

    /// Gets the agreement report of a product container
    async fn get_agreement_report(&self, product_container_id: i64) -> Result<Value, AppError>;

    /// Gets the products available to an organization
    ///
    /// Filters such as `Include.ProductFamilyNames` narrow the result; the
    /// response is an `AgreementProductCollection`.
    async fn get_agreement_products(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;

    /// Gets the billing cycles a product supports
    async fn get_supported_billing_cycles(
        &self,
        part_number: &str,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;

    /// Gets billing cycles
    async fn get_billing_cycles(&self, include_unknown: bool) -> Result<Value, AppError>;

    /// Gets the billing cycles of a product variant
    async fn get_product_variant_billing_cycles(
        &self,
        product_variant_id: i64,
    ) -> Result<Value, AppError>;

    /// Gets the CSP name of every billing cycle
    async fn get_billing_cycles_name_dictionary(&self) -> Result<Value, AppError>;

    /// Gets programs
    async fn get_programs(&self, filter: Option<&Params>) -> Result<Value, AppError>;

    /// Gets a program
    async fn get_program(&self, program_id: i64) -> Result<Value, AppError>;

    /// Gets publishers
    async fn get_publishers(&self, filter: Option<&Params>) -> Result<Value, AppError>;

    /// Gets a publisher
    async fn get_publisher(&self, publisher_id: i64) -> Result<Value, AppError>;

    /// Gets regions
    async fn get_regions(&self, filter: Option<&Params>) -> Result<Value, AppError>;

    /// Gets a region by its code
    async fn get_region_by_code(&self, region_code: &str) -> Result<Value, AppError>;

    /// Gets the product containers of an organization
    async fn get_product_containers(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;

    /// Gets a product container
    async fn get_product_container(&self, product_container_id: i64) -> Result<Value, AppError>;

    /// Gets the row issues of a product container
    async fn get_product_container_row_issues(
        &self,
        product_container_id: i64,
    ) -> Result<Value, AppError>;

    /// Gets the shopping cart of an organization, creating it if needed
    async fn get_product_container_shopping_cart(&self, org_id: i64)
    -> Result<Value, AppError>;

    /// Deletes a product container
    async fn delete_product_container(&self, product_container_id: i64)
    -> Result<Value, AppError>;

    /// Updates a row of a product container
    async fn patch_product_container_row(
        &self,
        product_container_id: i64,
        row_id: i64,
        row: &Value,
    ) -> Result<Value, AppError>;

    /// Deletes the reseller sales prices of an object
    async fn delete_reseller_sales_prices(
        &self,
        object_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;

    /// Gets blog items
    async fn get_blog_items(&self, filter: Option<&Params>) -> Result<Value, AppError>;
}
