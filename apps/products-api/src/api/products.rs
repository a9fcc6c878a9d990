//! Products API routes

use axum::Router;
use domain_products::{handlers, MongoProductRepository, ProductService};
use tracing::info;

use crate::state::AppState;

fn repository(state: &AppState) -> MongoProductRepository {
    MongoProductRepository::with_collection(&state.db, &state.config.products_collection)
}

/// Create products router
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(repository(state));
    handlers::router(service)
}

/// Initialize products indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    repository(state)
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create product indexes: {}", e))?;
    info!(
        collection = %state.config.products_collection,
        "Product collection indexes ready"
    );
    Ok(())
}
