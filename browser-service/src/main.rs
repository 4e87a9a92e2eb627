use catalog_core::{CatalogClient, CatalogConfig, QueryController};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod models;
mod routes;

use routes::{router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("browser_service=info,catalog_core=info,tower_http=info")
        }))
        .init();

    let config = CatalogConfig::from_env();
    info!("Using catalog at {}", config.base_url);

    let state = AppState {
        catalog_url: config.base_url.clone(),
        controller: Arc::new(QueryController::new(CatalogClient::new(config))),
    };

    let app = router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "7004".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Browser service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
