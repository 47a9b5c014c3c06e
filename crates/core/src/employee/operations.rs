//! Pure validation and parsing functions for employee records.

use super::{Employee, EmployeeError, SeedError};

/// Checks the invariants a record must satisfy before it is written.
pub fn validate_employee(employee: &Employee) -> Result<(), EmployeeError> {
    if employee.login_alias.trim().is_empty() {
        return Err(EmployeeError::EmptyLoginAlias);
    }
    Ok(())
}

/// Checks that the id addressed by a request names the record in its body.
///
/// The comparison ignores case.
pub fn ensure_matching_id(path_id: &str, employee: &Employee) -> Result<(), EmployeeError> {
    if path_id.to_lowercase() != employee.login_alias.to_lowercase() {
        return Err(EmployeeError::IdMismatch {
            path: path_id.to_string(),
            body: employee.login_alias.clone(),
        });
    }
    Ok(())
}

/// Parses the contents of a seed file: a JSON array of employee objects.
///
/// Records are returned in file order. Every record is validated so that a
/// malformed file is rejected before anything is written.
pub fn parse_seed_data(contents: &str) -> Result<Vec<Employee>, SeedError> {
    let employees: Vec<Employee> =
        serde_json::from_str(contents).map_err(|e| SeedError::Parse(e.to_string()))?;

    for (index, employee) in employees.iter().enumerate() {
        validate_employee(employee).map_err(|source| SeedError::InvalidRecord { index, source })?;
    }

    Ok(employees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_non_empty_alias() {
        let employee = Employee::new("jdoe", "Jane", "Doe");
        assert_eq!(validate_employee(&employee), Ok(()));
    }

    #[test]
    fn test_validate_rejects_blank_alias() {
        let employee = Employee::new("  ", "Jane", "Doe");
        assert_eq!(
            validate_employee(&employee),
            Err(EmployeeError::EmptyLoginAlias)
        );
    }

    #[test]
    fn test_matching_id_ignores_case() {
        let employee = Employee::new("jdoe", "Jane", "Doe");

        assert!(ensure_matching_id("jdoe", &employee).is_ok());
        assert!(ensure_matching_id("JDoe", &employee).is_ok());
        assert!(ensure_matching_id("JDOE", &employee).is_ok());
    }

    #[test]
    fn test_mismatched_id_is_rejected() {
        let employee = Employee::new("jdoe", "Jane", "Doe");

        assert_eq!(
            ensure_matching_id("bsmith", &employee),
            Err(EmployeeError::IdMismatch {
                path: "bsmith".to_string(),
                body: "jdoe".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_seed_data_keeps_file_order() {
        let contents = r#"[
            {"login_alias": "bsmith", "first_name": "Bob", "last_name": "Smith"},
            {"login_alias": "jdoe", "first_name": "Jane", "last_name": "Doe", "manager_login_alias": "bsmith"}
        ]"#;

        let employees = parse_seed_data(contents).unwrap();

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].login_alias, "bsmith");
        assert_eq!(employees[1].login_alias, "jdoe");
        assert_eq!(employees[1].manager_login_alias.as_deref(), Some("bsmith"));
    }

    #[test]
    fn test_parse_seed_data_rejects_non_array() {
        let result = parse_seed_data(r#"{"login_alias": "jdoe"}"#);
        assert!(matches!(result, Err(SeedError::Parse(_))));
    }

    #[test]
    fn test_parse_seed_data_reports_invalid_record_index() {
        let contents = r#"[{"login_alias": "jdoe"}, {"login_alias": ""}]"#;

        assert_eq!(
            parse_seed_data(contents),
            Err(SeedError::InvalidRecord {
                index: 1,
                source: EmployeeError::EmptyLoginAlias,
            })
        );
    }

    #[test]
    fn test_parse_empty_seed_array() {
        assert_eq!(parse_seed_data("[]"), Ok(Vec::new()));
    }
}
