//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They convert entity models into domain models and hold the survey's business rules:
//! submission intake, listing, and the statistics derived from stored responses.

pub mod health;
pub mod stats;
pub mod survey;
