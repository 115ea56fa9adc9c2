use cloudiq_client::application::client::Client;
use cloudiq_client::application::config::Config;
use cloudiq_client::application::interfaces::catalog::CatalogService;
use cloudiq_client::model::params::Params;
use cloudiq_client::presentation::product::{ProductTable, product_families};
use cloudiq_client::utils::{get_env_or_default, setup_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let org_id: i64 = get_env_or_default("CLOUDIQ_ORG_ID", 0);
    let family: String = get_env_or_default("CLOUDIQ_PRODUCT_FAMILY", "Office 365".to_string());
    if org_id == 0 {
        return Err("CLOUDIQ_ORG_ID is required".into());
    }

    let client = Client::new(Config::new())?;

    let filter = Params::new().with("Include.ProductFamilyNames", family.as_str());
    info!("Getting {} products for organization {}", family, org_id);
    let collection = client.get_agreement_products(org_id, Some(&filter)).await?;

    info!("Product families: {:?}", product_families(&collection));
    let table = ProductTable::from_collection(&collection);
    println!("{table}");
    info!("{} products", table.len());

    Ok(())
}
