//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let response = factory::create_survey_response(&db).await?;
//!
//! // Using builder pattern for customization
//! let response = factory::survey_response::SurveyResponseFactory::new(&db)
//!     .time_zone("GMT-5_new_york")
//!     .time_ranges(["15:00", "16:00"])
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod survey_response;

pub use survey_response::create_survey_response;
