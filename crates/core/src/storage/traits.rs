use async_trait::async_trait;

use crate::employee::Employee;
use crate::schema::TableConfig;

use super::{ReadConsistency, Result};

/// Repository for employee records.
///
/// Writes are insert-or-replace: a record written under an existing
/// login alias fully overwrites the stored one.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Returns every stored employee, in no particular order.
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    /// Gets an employee by login alias.
    async fn get_employee(
        &self,
        login_alias: &str,
        consistency: ReadConsistency,
    ) -> Result<Option<Employee>>;

    /// Writes an employee, replacing any record with the same login alias.
    async fn put_employee(&self, employee: &Employee) -> Result<()>;

    /// Deletes an employee by login alias.
    async fn delete_employee(&self, login_alias: &str) -> Result<()>;
}

/// Table-level operations used to provision the store.
#[async_trait]
pub trait TableProvisioner: Send + Sync {
    /// Lists at most `limit` table names (a single page).
    async fn list_table_names(&self, limit: i32) -> Result<Vec<String>>;

    /// Issues a create-table request. Returns before the table is active.
    async fn create_table(&self, config: &TableConfig) -> Result<()>;
}
