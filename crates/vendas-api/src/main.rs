mod config;
mod error;
mod routes;

use std::sync::Arc;

use config::ApiConfig;
use routes::{app_router, AppState};
use tracing_subscriber::EnvFilter;

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("vendas_api=info"))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Deployed builds get their configuration from the host environment.
    #[cfg(debug_assertions)]
    dotenvy::dotenv().ok();

    init_tracing()?;

    let state = AppState::from_config(Arc::new(ApiConfig::from_env()?));
    tracing::debug!(config = ?state.config, "Loaded API configuration");

    let listener = tokio::net::TcpListener::bind(&state.config.bind_addr).await?;
    tracing::info!(addr = %state.config.bind_addr, "Serving sales dashboard diagnostics");
    axum::serve(listener, app_router(state)).await?;
    Ok(())
}
