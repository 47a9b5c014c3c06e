//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses repository trait objects for storage abstraction
//! and picks the backend via feature flags.

use std::{path::PathBuf, sync::Arc};

use employeedb_core::schema::{employee_table_config, TableConfig};
use employeedb_core::storage::{EmployeeRepository, TableProvisioner};

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler. Both trait objects usually point at the
/// same backend instance.
#[derive(Clone)]
pub struct AppState {
    /// Employee record storage.
    pub employee_repo: Arc<dyn EmployeeRepository>,
    /// Table lifecycle operations.
    pub provisioner: Arc<dyn TableProvisioner>,
    /// Description of the employee table.
    pub table_config: Arc<TableConfig>,
    /// Seed file read by the table load endpoint.
    pub seed_file: Arc<PathBuf>,
}

impl AppState {
    fn build(
        employee_repo: Arc<dyn EmployeeRepository>,
        provisioner: Arc<dyn TableProvisioner>,
        config: &Config,
    ) -> Self {
        Self {
            employee_repo,
            provisioner,
            table_config: Arc::new(employee_table_config()),
            seed_file: Arc::new(config.seed_file.clone()),
        }
    }

    /// Creates state backed by DynamoDB.
    ///
    /// The SDK client is built once here and shared by every request.
    #[cfg(feature = "dynamodb")]
    pub async fn new(config: &Config) -> Self {
        use crate::storage::dynamodb::create_client;
        use crate::storage::DynamoDbRepository;
        use employeedb_core::schema::TABLE_NAME;

        let client = create_client(config).await;
        let repo = Arc::new(DynamoDbRepository::new(client, TABLE_NAME));

        tracing::info!(table = repo.table_name(), "Using DynamoDB storage");

        Self::build(repo.clone(), repo, config)
    }

    /// Creates state backed by the in-memory store.
    #[cfg(feature = "inmemory")]
    pub async fn new(config: &Config) -> Self {
        use crate::storage::InMemoryRepository;

        tracing::info!("Using in-memory storage");

        let repo = Arc::new(InMemoryRepository::new());
        Self::build(repo.clone(), repo, config)
    }
}

#[cfg(test)]
impl AppState {
    /// State over a shared in-memory repository the test can inspect.
    pub fn with_repository(repo: Arc<crate::storage::InMemoryRepository>) -> Self {
        Self::build(repo.clone(), repo, &Config::default())
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::with_repository(Arc::default())
    }
}
