use thiserror::Error;

/// Errors raised when an employee record fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmployeeError {
    #[error("Employee login alias cannot be empty")]
    EmptyLoginAlias,
    #[error("Path id '{path}' does not match login alias '{body}'")]
    IdMismatch { path: String, body: String },
}

/// Errors raised while reading the bulk-load seed file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("Seed data is not a JSON array of employees: {0}")]
    Parse(String),
    #[error("Seed record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: EmployeeError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_error_display() {
        assert_eq!(
            EmployeeError::EmptyLoginAlias.to_string(),
            "Employee login alias cannot be empty"
        );
        assert_eq!(
            EmployeeError::IdMismatch {
                path: "jdoe".to_string(),
                body: "bsmith".to_string(),
            }
            .to_string(),
            "Path id 'jdoe' does not match login alias 'bsmith'"
        );
    }

    #[test]
    fn test_seed_error_display() {
        let error = SeedError::InvalidRecord {
            index: 3,
            source: EmployeeError::EmptyLoginAlias,
        };
        assert_eq!(
            error.to_string(),
            "Seed record 3 is invalid: Employee login alias cannot be empty"
        );
    }
}
