//! Service layer between the HTTP handlers and the repositories.
//!
//! Services own payload validation (through the DTO `TryFrom` conversions),
//! translate integrity failures raised at the save boundary into
//! [`CoreError::Constraint`], and decide when a lookup becomes a not-found
//! error. Handlers stay thin: extract, delegate, pick a status code.

pub mod category;
pub mod task;

use sqlx::error::ErrorKind;
use tasktrack_core::error::CoreError;

use crate::error::AppError;

/// Translate an integrity failure raised while saving into a 400-class
/// constraint error.
///
/// Only save-time failures are classified. The same violation raised
/// elsewhere (a delete blocked because the category still has tasks)
/// keeps surfacing as an internal error.
pub(crate) fn map_save_error(err: sqlx::Error) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        if matches!(
            db_err.kind(),
            ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
        ) {
            return AppError::Core(CoreError::Constraint(db_err.message().to_string()));
        }
    }
    AppError::Database(err)
}
