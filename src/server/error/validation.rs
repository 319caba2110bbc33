use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Survey submission rejected before reaching storage.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// A required field is absent, null or an empty string.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// `timeRanges` is present but holds no slots.
    #[error("At least one time slot must be selected")]
    EmptyTimeRanges,

    /// One of the submitted slot labels is an empty string.
    #[error("Time slots must not be blank")]
    BlankTimeRange,

    /// Body is not JSON or a field has the wrong JSON type.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

/// Converts validation errors into 400 Bad Request responses.
///
/// The message is safe to show to the player, so it is returned verbatim.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected survey submission: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
