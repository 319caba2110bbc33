use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::HealthDto,
    server::{service::health::HealthService, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report whether the server can reach its database.
///
/// Served at both `/api/health` and `/health`.
///
/// # Returns
/// - `200 OK` - `{"status": "ok"}`
/// - `500 Internal Server Error` - `{"status": "error", "message": ...}`
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Database reachable", body = HealthDto),
        (status = 500, description = "Database unreachable", body = HealthDto)
    ),
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match HealthService::new(&state.db).check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "ok".to_string(),
                message: None,
            }),
        ),
        Err(err) => {
            tracing::error!("Health check failed: {}", err);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthDto {
                    status: "error".to_string(),
                    message: Some("Database unreachable".to_string()),
                }),
            )
        }
    }
}
