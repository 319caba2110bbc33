use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        stats::{TimeRangeStatDto, TimeZoneStatDto},
        survey::{SubmitSurveyDto, SurveyOptionsDto, SurveyResponseDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::{
            catalog::SurveyOptions,
            stats::{TimeRangeCount, TimeZoneCount},
            survey::{CreateSurveyResponseParam, SurveyResponse},
        },
        service::{stats::StatsService, survey::SurveyService},
        state::AppState,
    },
};

/// Tag for grouping survey endpoints in OpenAPI documentation
pub static SURVEY_TAG: &str = "survey";

/// Submit a survey response.
///
/// Validates that the in-game name and time zone are present and at least one time slot
/// is selected, then stores the response with the current time.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Submission body, or the rejection if it is not valid JSON
///
/// # Returns
/// - `201 Created` - The stored survey response
/// - `400 Bad Request` - Missing field, no slots selected, or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/survey",
    tag = SURVEY_TAG,
    request_body = SubmitSurveyDto,
    responses(
        (status = 201, description = "Survey response stored", body = SurveyResponseDto),
        (status = 400, description = "Invalid submission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_survey(
    State(state): State<AppState>,
    payload: Result<Json<SubmitSurveyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))?;

    let param = CreateSurveyResponseParam::from_dto(payload)?;

    let response = SurveyService::new(&state.db).submit(param).await?;

    Ok((StatusCode::CREATED, Json(response.into_dto())))
}

/// List all survey responses, newest first.
///
/// # Returns
/// - `200 OK` - All stored responses
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/survey",
    tag = SURVEY_TAG,
    responses(
        (status = 200, description = "All survey responses", body = Vec<SurveyResponseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_survey_responses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let responses = SurveyService::new(&state.db).list().await?;

    let dtos: Vec<SurveyResponseDto> = responses
        .into_iter()
        .map(SurveyResponse::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the time slot and time zone options rendered by the survey form.
#[utoipa::path(
    get,
    path = "/api/survey/options",
    tag = SURVEY_TAG,
    responses(
        (status = 200, description = "Form option lists", body = SurveyOptionsDto)
    ),
)]
pub async fn get_survey_options(State(state): State<AppState>) -> impl IntoResponse {
    let options = SurveyOptions::new(&state.normalizer);

    (StatusCode::OK, Json(options.into_dto()))
}

/// Count responses per submitted time zone.
///
/// # Returns
/// - `200 OK` - One entry per distinct time zone, most common first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/survey/stats/timezones",
    tag = SURVEY_TAG,
    responses(
        (status = 200, description = "Responses per time zone", body = Vec<TimeZoneStatDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_time_zone_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stats = StatsService::new(&state.db, state.normalizer)
        .time_zone_stats()
        .await?;

    let dtos: Vec<TimeZoneStatDto> = stats.into_iter().map(TimeZoneCount::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Count selected time slots per label as submitted, without normalization.
///
/// # Returns
/// - `200 OK` - One entry per distinct label, most common first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/survey/stats/timeranges",
    tag = SURVEY_TAG,
    responses(
        (status = 200, description = "Slot selections per label", body = Vec<TimeRangeStatDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_time_range_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stats = StatsService::new(&state.db, state.normalizer)
        .time_range_stats()
        .await?;

    let dtos: Vec<TimeRangeStatDto> = stats.into_iter().map(TimeRangeCount::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
