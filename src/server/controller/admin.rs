use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, stats::AdminDashboardDto},
    server::{error::AppError, service::stats::StatsService, state::AppState},
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get the admin dashboard.
///
/// Returns every response newest first, the number of responses per time zone, and the
/// selected slots tallied at the reference offset and sorted by time of day.
///
/// # Arguments
/// - `state` - Application state containing the database connection and slot normalizer
///
/// # Returns
/// - `200 OK` - Dashboard data
/// - `500 Internal Server Error` - Database error, or a stored response whose time zone
///   or slots cannot be normalized
#[utoipa::path(
    get,
    path = "/api/admin",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Admin dashboard data", body = AdminDashboardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_dashboard(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let dashboard = StatsService::new(&state.db, state.normalizer)
        .dashboard()
        .await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
