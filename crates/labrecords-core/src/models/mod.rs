//! Domain models for the lab records system.

mod lab;
mod patient;
mod user;

pub use lab::*;
pub use lab_test::*;
pub use patient::*;
pub use user::*;

use thiserror::Error;

/// Rejected input on a new record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Fail with the camelCase field name when a required text field is blank.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// Timestamp used for `created_at` columns.
///
/// Fixed-width UTC so that text ordering in SQLite matches time ordering.
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}
