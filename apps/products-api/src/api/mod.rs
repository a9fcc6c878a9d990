//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .merge(health::router(state.clone()))
}

/// Initialize database indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    products::init_indexes(state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use database::mongodb::MongoConfig;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const UNREACHABLE: &str =
        "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200";

    /// State whose client never reaches a server; the driver connects lazily
    async fn unreachable_state() -> AppState {
        let config = Config {
            app: app_info!(),
            mongodb: MongoConfig::with_database(UNREACHABLE, "catalog"),
            server: ServerConfig::default(),
            environment: Environment::Development,
            products_collection: "products".to_string(),
        };
        let mongo_client = mongodb::Client::with_uri_str(UNREACHABLE).await.unwrap();
        let db = mongo_client.database("catalog");

        AppState {
            config,
            mongo_client,
            db,
        }
    }

    #[tokio::test]
    async fn test_ready_is_503_when_mongodb_is_down() {
        let app = routes(&unreachable_state().await);

        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "not ready");
        assert_eq!(json["mongodb"], "disconnected");
    }

    #[tokio::test]
    async fn test_products_store_failure_is_500() {
        let app = routes(&unreachable_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/products")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "DATABASE_ERROR");
    }
}
