use crate::models::responses::HealthResponse;
use crate::routes::AppState;
use axum::{extract::State, response::Json};
use chrono::Utc;

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "browser-service".to_string(),
        status: "running".to_string(),
        catalog: state.catalog_url.clone(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
