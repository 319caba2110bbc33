//! Wire-level data transfer objects.
//!
//! These types define the JSON bodies exchanged with the survey form and the admin
//! dashboard. Field names are camelCase on the wire. Server-side domain models convert
//! into these at the controller boundary.

pub mod api;
pub mod stats;
pub mod survey;
