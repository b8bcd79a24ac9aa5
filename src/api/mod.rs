use crate::classifier::Thresholds;
use crate::store::postgres::PgIncidentStore;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod zones;

#[derive(Clone)]
pub struct AppState {
    pub store: PgIncidentStore,
    pub thresholds: Thresholds,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/zones/zones", get(zones::list_zones))
        .route("/zones/zones/:id", get(zones::get_zone))
        .route("/zones/classify", post(zones::run_classification))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Json<serde_json::Value> {
    Json(json!({ "message": "Guardia Zones Service" }))
}
