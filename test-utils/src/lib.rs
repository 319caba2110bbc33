//! Alliance Survey Test Utils
//!
//! Provides shared testing utilities for the survey backend. This crate offers a builder
//! for creating test contexts backed by in-memory SQLite databases, plus fixtures and
//! factories for survey response rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture** / **factory**: In-memory models and inserted rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_responses() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_survey_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     test_utils::factory::create_survey_response(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
