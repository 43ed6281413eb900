use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use company_data_service::api::{create_router, AppState};
use company_data_service::config::config::Config;
use company_data_service::data::query_engine::QueryEngine;
use company_data_service::data::store::CompanyStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("company_data_service=info,tower_http=info")),
        )
        .init();

    dotenv::dotenv().ok();

    let config = Config::load()?;
    info!("Serving company data from {}", config.data.file.display());

    // The dataset itself loads lazily on the first query
    let store = Arc::new(CompanyStore::new(config.data.file.clone()));
    let engine = Arc::new(QueryEngine::new(store));
    let app = create_router(AppState { engine });

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
