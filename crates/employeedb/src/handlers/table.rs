//! Table administration endpoints.

use axum::{extract::State, http::StatusCode};

use crate::{handlers::AppError, setup, state::AppState};

/// Create the employee table if it does not exist (GET /api/employee/table/create).
#[axum::debug_handler]
pub async fn create_table(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    setup::ensure_table(state.provisioner.as_ref(), &state.table_config).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bulk load the seed file into the table (GET /api/employee/table/load).
#[axum::debug_handler]
pub async fn load_table(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    setup::load_seed_data(state.employee_repo.as_ref(), &state.seed_file).await?;
    Ok(StatusCode::NO_CONTENT)
}
