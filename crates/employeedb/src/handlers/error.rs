use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use employeedb_core::employee::EmployeeError;
use employeedb_core::storage::{
    employee_error_to_status_code, repository_error_to_status_code, RepositoryError,
};

/// Handler error wrapping `anyhow::Error`.
///
/// Validation errors are only recognized at the top of the chain: an invalid
/// seed record is a server fault, not a bad request. Repository errors are
/// searched through the whole chain so a failed seed write keeps its mapping.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = match self.0.downcast_ref::<EmployeeError>() {
            Some(err) => Some(employee_error_to_status_code(err)),
            None => self
                .0
                .chain()
                .find_map(|cause| cause.downcast_ref::<RepositoryError>())
                .map(repository_error_to_status_code),
        };

        code.and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        match status_code {
            StatusCode::NOT_FOUND => status_code.into_response(),
            code if code.is_client_error() => {
                tracing::warn!(error = %self.0, "Rejected request");
                (status_code, self.0.to_string()).into_response()
            }
            _ => {
                tracing::error!(error = ?self.0, "Request failed");
                (status_code, self.0.to_string()).into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::SetupError;
    use employeedb_core::employee::SeedError;

    #[test]
    fn test_validation_error_is_bad_request() {
        let response = AppError::from(EmployeeError::EmptyLoginAlias).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_repository_errors_use_mapping() {
        let not_found = AppError::from(RepositoryError::NotFound {
            entity_type: "Employee",
            id: "jdoe".to_string(),
        });
        let failed = AppError::from(RepositoryError::QueryFailed(
            "Table Employee is in use".into(),
        ));
        let unavailable = AppError::from(RepositoryError::ConnectionFailed("refused".into()));

        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            failed.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            unavailable.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_wrapped_repository_error_is_found_in_chain() {
        let err = AppError::from(SetupError::Write {
            login_alias: "jdoe".to_string(),
            source: RepositoryError::ConnectionFailed("refused".into()),
        });
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_seed_record_is_internal() {
        let err = AppError::from(SetupError::Seed(SeedError::InvalidRecord {
            index: 1,
            source: EmployeeError::EmptyLoginAlias,
        }));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_untyped_error_is_internal() {
        let err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
