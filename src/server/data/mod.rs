//! Database repository layer.
//!
//! Repositories wrap a borrowed `DatabaseConnection` and perform all queries through
//! SeaORM entities, returning entity models for the service layer to convert into
//! domain models.

pub mod survey_response;

#[cfg(test)]
mod test;
