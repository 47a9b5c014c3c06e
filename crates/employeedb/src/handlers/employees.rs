use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use employeedb_core::employee::{ensure_matching_id, validate_employee, Employee};
use employeedb_core::storage::{ReadConsistency, RepositoryError};

use crate::{handlers::AppError, state::AppState};

fn not_found(login_alias: &str) -> AppError {
    AppError::from(RepositoryError::NotFound {
        entity_type: "Employee",
        id: login_alias.to_string(),
    })
}

/// List all employees (GET /api/employee).
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = state.employee_repo.list_employees().await?;

    tracing::debug!(count = employees.len(), "Listed employees");

    Ok(Json(employees))
}

/// Get a single employee by login alias (GET /api/employee/{id}).
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, AppError> {
    state
        .employee_repo
        .get_employee(&id, ReadConsistency::Eventual)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

/// Create or replace an employee (POST /api/employee).
///
/// Responds with an empty body and the record's locator.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> Result<impl IntoResponse, AppError> {
    validate_employee(&employee)?;

    state.employee_repo.put_employee(&employee).await?;

    tracing::info!(login_alias = %employee.login_alias, "Created employee");

    let location = format!(
        "/api/employee/{}",
        urlencoding::encode(&employee.login_alias)
    );

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

/// Replace an employee (PUT /api/employee/{id}).
///
/// The whole record is overwritten: fields absent from the body are cleared.
/// The stored record is read back with a strongly consistent read.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(employee): Json<Employee>,
) -> Result<Json<Employee>, AppError> {
    ensure_matching_id(&id, &employee)?;
    validate_employee(&employee)?;

    state.employee_repo.put_employee(&employee).await?;

    tracing::info!(login_alias = %employee.login_alias, "Updated employee");

    state
        .employee_repo
        .get_employee(&employee.login_alias, ReadConsistency::Strong)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(&employee.login_alias))
}

/// Delete an employee (DELETE /api/employee/{id}).
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state
        .employee_repo
        .get_employee(&id, ReadConsistency::Eventual)
        .await?
        .is_none()
    {
        return Err(not_found(&id));
    }

    state.employee_repo.delete_employee(&id).await?;

    tracing::info!(login_alias = %id, "Deleted employee");

    Ok(StatusCode::NO_CONTENT)
}
