//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! employee records. These are testable in isolation without DynamoDB access.

use std::collections::{BTreeSet, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;
use employeedb_core::employee::{attributes, Employee};
use employeedb_core::storage::RepositoryError;

/// Builds the primary key of an employee item.
pub fn employee_key(login_alias: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(
        attributes::LOGIN_ALIAS.to_string(),
        AttributeValue::S(login_alias.to_string()),
    )])
}

/// Convert an Employee to a DynamoDB item.
///
/// Empty strings and an empty skill set are left out: DynamoDB rejects empty
/// values for index keys and empty sets.
pub fn employee_to_item(employee: &Employee) -> HashMap<String, AttributeValue> {
    let mut item = employee_key(&employee.login_alias);

    insert_non_empty(&mut item, attributes::FIRST_NAME, &employee.first_name);
    insert_non_empty(&mut item, attributes::LAST_NAME, &employee.last_name);
    if let Some(manager) = &employee.manager_login_alias {
        insert_non_empty(&mut item, attributes::MANAGER_LOGIN_ALIAS, manager);
    }
    insert_non_empty(&mut item, attributes::DESIGNATION, &employee.designation);

    if !employee.skills.is_empty() {
        item.insert(
            attributes::SKILLS.to_string(),
            AttributeValue::Ss(employee.skills.iter().cloned().collect()),
        );
    }

    item
}

/// Convert a DynamoDB item to an Employee.
pub fn item_to_employee(
    item: &HashMap<String, AttributeValue>,
) -> Result<Employee, RepositoryError> {
    Ok(Employee {
        login_alias: get_string(item, attributes::LOGIN_ALIAS)?,
        first_name: get_optional_string(item, attributes::FIRST_NAME).unwrap_or_default(),
        last_name: get_optional_string(item, attributes::LAST_NAME).unwrap_or_default(),
        manager_login_alias: get_optional_string(item, attributes::MANAGER_LOGIN_ALIAS),
        designation: get_optional_string(item, attributes::DESIGNATION).unwrap_or_default(),
        skills: get_string_set(item, attributes::SKILLS)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

fn insert_non_empty(item: &mut HashMap<String, AttributeValue>, key: &str, value: &str) {
    if !value.is_empty() {
        item.insert(key.to_string(), AttributeValue::S(value.to_string()));
    }
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a string set attribute. A missing attribute is the empty set.
///
/// Items written by other tools may hold the skills as a list of strings,
/// which is accepted as well.
fn get_string_set(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<BTreeSet<String>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(BTreeSet::new()),
        Some(AttributeValue::Ss(values)) => Ok(values.iter().cloned().collect()),
        Some(AttributeValue::L(values)) => values
            .iter()
            .map(|v| {
                v.as_s().map(|s| s.to_string()).map_err(|_| {
                    RepositoryError::InvalidData(format!("Non-string value in field: {}", key))
                })
            })
            .collect(),
        Some(_) => Err(RepositoryError::InvalidData(format!(
            "Missing or invalid field: {}",
            key
        ))),
    }
}
