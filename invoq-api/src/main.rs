//! invoq API server entry point

use invoq_api::{create_router, ApiConfig, AppState};
use invoq_llm::LlmConfig;
use invoq_storage::generate_invoices;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let llm_config = LlmConfig::from_env();
    tracing::info!(
        llm_enabled = llm_config.enabled,
        provider = llm_config.provider.as_str(),
        "loaded model gateway configuration"
    );

    let dataset = generate_invoices();
    tracing::info!(invoices = dataset.len(), "invoice dataset generated");

    let state = AppState::new(dataset, &llm_config);
    let app = create_router(state);

    let config = ApiConfig::from_env();
    let addr = config.bind_addr();
    tracing::info!(%addr, "starting invoq API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
