//! Table provisioning and seed data loading.
//!
//! Both operations are driven from HTTP endpoints and run against the same
//! trait objects the CRUD handlers use.

use std::path::{Path, PathBuf};

use thiserror::Error;

use employeedb_core::employee::{parse_seed_data, SeedError};
use employeedb_core::schema::{
    calculate_provision_plan, format_provision_plan, ProvisionPlan, TableConfig,
    LIST_TABLES_PAGE_SIZE,
};
use employeedb_core::storage::{EmployeeRepository, RepositoryError, TableProvisioner};

/// Errors raised while loading seed data.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to read seed file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error("Failed to write seed record '{login_alias}': {source}")]
    Write {
        login_alias: String,
        #[source]
        source: RepositoryError,
    },
}

/// Ensures the table described by `config` exists.
///
/// Only the first page of table names is inspected. The create request is
/// not awaited to completion: the table may still be `CREATING` when this
/// returns.
pub async fn ensure_table(
    provisioner: &dyn TableProvisioner,
    config: &TableConfig,
) -> Result<ProvisionPlan, RepositoryError> {
    let existing = provisioner.list_table_names(LIST_TABLES_PAGE_SIZE).await?;
    let plan = calculate_provision_plan(&existing, config);

    for line in format_provision_plan(&plan) {
        tracing::info!("{}", line);
    }

    if let ProvisionPlan::CreateTable { config } = &plan {
        provisioner.create_table(config).await?;
        tracing::info!(table = %config.table_name, "Create table requested");
    }

    Ok(plan)
}

/// Writes every employee in the seed file, in file order.
///
/// The first failed write stops the load; records written before it stay.
/// Returns the number of records written.
pub async fn load_seed_data(
    repo: &dyn EmployeeRepository,
    path: &Path,
) -> Result<usize, SetupError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SetupError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let employees = parse_seed_data(&contents)?;

    for employee in &employees {
        repo.put_employee(employee)
            .await
            .map_err(|source| SetupError::Write {
                login_alias: employee.login_alias.clone(),
                source,
            })?;
        tracing::debug!(login_alias = %employee.login_alias, "Loaded seed record");
    }

    tracing::info!(count = employees.len(), path = %path.display(), "Seed data loaded");

    Ok(employees.len())
}
