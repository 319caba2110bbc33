use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        stats::{AdminDashboardDto, DashboardResponseDto, TimeRangeStatDto, TimeZoneStatDto},
        survey::{
            SubmitSurveyDto, SurveyOptionsDto, SurveyResponseDto, TimeSlotOptionDto,
            TimeZoneOptionDto,
        },
    },
    server::{
        controller::{
            admin::{self, get_admin_dashboard},
            health::{self, health_check},
            survey::{
                self, get_survey_options, get_survey_responses, get_time_range_stats,
                get_time_zone_stats, submit_survey,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Alliance Survey API"),
    paths(
        survey::submit_survey,
        survey::get_survey_responses,
        survey::get_survey_options,
        survey::get_time_zone_stats,
        survey::get_time_range_stats,
        admin::get_admin_dashboard,
        health::health_check,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        SubmitSurveyDto,
        SurveyResponseDto,
        SurveyOptionsDto,
        TimeSlotOptionDto,
        TimeZoneOptionDto,
        TimeZoneStatDto,
        TimeRangeStatDto,
        DashboardResponseDto,
        AdminDashboardDto,
    )),
    tags(
        (name = "survey", description = "Survey submission, listing and statistics"),
        (name = "admin", description = "Admin dashboard"),
        (name = "health", description = "Liveness and storage checks"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/survey", get(get_survey_responses).post(submit_survey))
        .route("/api/survey/options", get(get_survey_options))
        .route("/api/survey/stats/timezones", get(get_time_zone_stats))
        .route("/api/survey/stats/timeranges", get(get_time_range_stats))
        .route("/api/admin", get(get_admin_dashboard))
        .route("/api/health", get(health_check))
        .route("/health", get(health_check))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
