use relay_adapters::{
    config::{RelayConfig, RelaySetting},
    upstream::HttpSecurityCheck,
};
use relay_service_lib::RelayService;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    // Load configuration
    dotenvy::dotenv().ok();
    let setting = RelaySetting::from_sources()?;
    let config = RelayConfig::activate(setting);
    let active = config.load();

    // One pooled upstream client for the lifetime of the process
    let security_check = HttpSecurityCheck::from_settings(&active)?;

    let listener = tokio::net::TcpListener::bind(&active.app.address).await?;
    tracing::info!(address = %active.app.address, "Starting credential relay");

    RelayService::new(security_check, config.clone())
        .run_standalone(listener, active.allowed_origins())
        .await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(ErrorLayer::default())
        .init();
}
