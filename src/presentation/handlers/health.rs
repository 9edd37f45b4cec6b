use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use super::responses::iso_timestamp;
use crate::presentation::state::AppState;

pub const HEALTH_MESSAGE: &str = "Chat service is running";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "OK".to_string(),
            message: HEALTH_MESSAGE.to_string(),
            timestamp: iso_timestamp(state.clock.now()),
        }),
    )
}
