//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as default values for
//! factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let response = fixture::survey_response::entity_builder()
//!     .time_zone("GMT-5_new_york")
//!     .build();
//! ```

pub mod survey_response;
