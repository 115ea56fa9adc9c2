use cloudiq_client::application::client::Client;
use cloudiq_client::application::config::Config;
use cloudiq_client::application::interfaces::organization::OrganizationService;
use cloudiq_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("Creating client and authenticating...");
    let client = Client::connect(Config::new()).await?;
    info!("✓ Client created and authenticated");

    let organizations = client.get_organizations(None).await?;
    let items = organizations
        .get("Items")
        .and_then(|items| items.as_array())
        .cloned()
        .unwrap_or_default();

    for organization in &items {
        let id = organization
            .get("Id")
            .and_then(|id| id.as_i64())
            .unwrap_or_default();
        let name = organization
            .get("Name")
            .and_then(|name| name.as_str())
            .unwrap_or("-");
        info!("{:>10}  {}", id, name);
    }
    info!("{} organizations", items.len());

    Ok(())
}
