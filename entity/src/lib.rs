//! SeaORM entities for the survey database.

pub mod prelude;

pub mod survey_response;
