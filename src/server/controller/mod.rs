//! HTTP request handlers.
//!
//! Controllers parse request bodies into DTOs, convert them to server models, call the
//! service layer, and convert the results back into DTOs for the response. Every handler
//! is annotated with `#[utoipa::path]` for the OpenAPI document served at `/api/docs`.

pub mod admin;
pub mod health;
pub mod survey;
