use crate::error::AppError;
use crate::model::params::Params;
use async_trait::async_trait;
use serde_json::Value;

/// Billing statements and usage cost
#[async_trait]
pub trait BillingService: Send + Sync {
    /// Gets the billing statements of an organization
    async fn get_billing_statements(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;

    /// Gets the billing statements of an organization grouped by period
    async fn get_grouped_billing_statements(
        &self,
        org_id: i64,
        filter: Option<&Params>,
    ) -> Result<Value, AppError>;

    /// Downloads a billing statement as an Excel workbook
    async fn get_billing_statement_excel(&self, statement_id: i64) -> Result<Vec<u8>, AppError>;

    /// Downloads the reconciliation CSV of a billing statement
    async fn get_billing_statement_csv(&self, statement_id: i64) -> Result<Vec<u8>, AppError>;

    /// Downloads the billing records file (JSON) of a billing statement
    async fn get_billing_statement_json(&self, statement_id: i64) -> Result<Vec<u8>, AppError>;

    /// Gets the usage cost of an organization
    async fn get_usage_cost(&self, org_id: i64, filter: Option<&Params>)
    -> Result<Value, AppError>;
}
