//! Pure functions for mapping domain errors to HTTP status codes.

use super::RepositoryError;
use crate::employee::EmployeeError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// `InvalidData` describes a stored item that cannot be decoded, which is a
/// server-side problem rather than a bad request.
///
/// # Examples
///
/// ```
/// use employeedb_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Employee",
///     id: "jdoe".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}

/// Maps an [`EmployeeError`] to an HTTP status code. Every variant is a client error.
pub fn employee_error_to_status_code(error: &EmployeeError) -> u16 {
    match error {
        EmployeeError::EmptyLoginAlias => 400,
        EmployeeError::IdMismatch { .. } => 400,
    }
}
