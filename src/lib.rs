pub mod api;
pub mod catalog;
pub mod config;
pub mod models;
pub mod prediction;
pub mod proximity;
pub mod remedy;
pub mod screening;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::api::ApiContext;
use crate::catalog::Catalog;
use crate::prediction::ModelRegistry;

pub async fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("HealthGuard starting v{}", config::APP_VERSION);

    let catalog = match Catalog::load_embedded() {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(%err, "embedded catalog failed to load; cannot continue");
            std::process::exit(1);
        }
    };
    tracing::info!(
        facilities = catalog.facility_count(),
        cities = catalog.city_count(),
        "catalog loaded"
    );

    let models = ModelRegistry::load_dir(&config::models_dir());
    tracing::info!(available = ?models.available(), "classifiers loaded");

    let ctx = ApiContext::new(Arc::new(catalog), Arc::new(models));
    if let Err(err) = api::server::serve(config::bind_addr(), ctx).await {
        tracing::error!(%err, "API server failed");
        std::process::exit(1);
    }
}
