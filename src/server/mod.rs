//! Survey REST backend.
//!
//! Stores submitted survey responses and serves them back together with per-zone and
//! per-slot statistics. Axum handles HTTP, SeaORM handles storage.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Submission intake, listing and statistics
//! - **Data Layer** (`data/`) - Database operations through SeaORM entities
//! - **Model Layer** (`model/`) - Domain models, parameters and the form option catalog
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Utilities** (`util/`) - Slot normalization and tallying, free of I/O
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, slot normalizer)
//! - **Startup** (`startup`) - Database connection, tracing, CORS and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
