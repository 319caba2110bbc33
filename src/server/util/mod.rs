//! Pure helpers for slot normalization and tallying.

pub mod aggregate;
pub mod time_slot;
