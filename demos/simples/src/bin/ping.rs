use cloudiq_client::application::client::Client;
use cloudiq_client::application::config::Config;
use cloudiq_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // Credentials come from the environment or .env
    let client = Client::new(Config::new())?;

    let ping = client.ping().await?;
    info!("Ping: {}", serde_json::to_string_pretty(&ping)?);

    info!("Authenticating...");
    let me = client.me().await?;
    info!("✓ Authenticated as: {}", serde_json::to_string_pretty(&me)?);

    info!("Token still valid: {}", client.validate_token().await);

    Ok(())
}
