//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use employeedb_core::employee::Employee;
use employeedb_core::schema::TableConfig;
use employeedb_core::storage::{
    EmployeeRepository, ReadConsistency, RepositoryError, Result, TableProvisioner,
};

/// In-memory storage backend.
///
/// Every read is trivially strongly consistent. Tables are only recorded so
/// that provisioning can be observed; employee storage does not depend on
/// them. Data is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    employees: Arc<RwLock<HashMap<String, Employee>>>,
    tables: Arc<RwLock<Vec<TableConfig>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configurations of all created tables, in creation order.
    pub async fn tables(&self) -> Vec<TableConfig> {
        self.tables.read().await.clone()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryRepository {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.values().cloned().collect())
    }

    async fn get_employee(
        &self,
        login_alias: &str,
        _consistency: ReadConsistency,
    ) -> Result<Option<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.get(login_alias).cloned())
    }

    async fn put_employee(&self, employee: &Employee) -> Result<()> {
        let mut employees = self.employees.write().await;
        employees.insert(employee.login_alias.clone(), employee.clone());
        Ok(())
    }

    async fn delete_employee(&self, login_alias: &str) -> Result<()> {
        let mut employees = self.employees.write().await;
        employees.remove(login_alias);
        Ok(())
    }
}

#[async_trait]
impl TableProvisioner for InMemoryRepository {
    async fn list_table_names(&self, limit: i32) -> Result<Vec<String>> {
        let tables = self.tables.read().await;
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(tables
            .iter()
            .take(limit)
            .map(|t| t.table_name.clone())
            .collect())
    }

    async fn create_table(&self, config: &TableConfig) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.iter().any(|t| t.table_name == config.table_name) {
            return Err(RepositoryError::QueryFailed(format!(
                "Table {} is in use",
                config.table_name
            )));
        }
        tables.push(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use employeedb_core::schema::employee_table_config;

    fn jdoe() -> Employee {
        Employee::new("jdoe", "Jane", "Doe")
            .with_manager("bsmith")
            .with_designation("Engineer")
            .with_skills(["go", "sql"])
    }

    #[tokio::test]
    async fn test_put_and_get_employee() {
        let repo = InMemoryRepository::new();
        let employee = jdoe();

        repo.put_employee(&employee).await.unwrap();

        let retrieved = repo
            .get_employee("jdoe", ReadConsistency::Eventual)
            .await
            .unwrap();
        assert_eq!(retrieved, Some(employee));
    }

    #[tokio::test]
    async fn test_get_nonexistent_employee() {
        let repo = InMemoryRepository::new();
        let result = repo
            .get_employee("nobody", ReadConsistency::Strong)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_whole_record() {
        let repo = InMemoryRepository::new();
        repo.put_employee(&jdoe()).await.unwrap();

        let replacement = Employee::new("jdoe", "Janet", "Doe");
        repo.put_employee(&replacement).await.unwrap();

        let retrieved = repo
            .get_employee("jdoe", ReadConsistency::Strong)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(retrieved, replacement);
        assert_eq!(retrieved.manager_login_alias, None);
        assert!(retrieved.skills.is_empty());
    }

    #[tokio::test]
    async fn test_delete_employee() {
        let repo = InMemoryRepository::new();
        repo.put_employee(&jdoe()).await.unwrap();

        repo.delete_employee("jdoe").await.unwrap();

        let retrieved = repo
            .get_employee("jdoe", ReadConsistency::Eventual)
            .await
            .unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_list_employees() {
        let repo = InMemoryRepository::new();
        for alias in ["a", "b", "c"] {
            repo.put_employee(&Employee::new(alias, "First", "Last"))
                .await
                .unwrap();
        }

        let mut aliases: Vec<String> = repo
            .list_employees()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.login_alias)
            .collect();
        aliases.sort();

        assert_eq!(aliases, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_create_table_twice_fails() {
        let repo = InMemoryRepository::new();
        let config = employee_table_config();

        repo.create_table(&config).await.unwrap();
        let result = repo.create_table(&config).await;

        assert!(matches!(
            result,
            Err(RepositoryError::QueryFailed(_))
        ));
        assert_eq!(repo.tables().await.len(), 1);
    }

    #[tokio::test]
    async fn test_list_table_names_respects_limit() {
        let repo = InMemoryRepository::new();
        for name in ["A", "B", "C"] {
            let config = TableConfig {
                table_name: name.to_string(),
                ..employee_table_config()
            };
            repo.create_table(&config).await.unwrap();
        }

        assert_eq!(repo.list_table_names(2).await.unwrap(), vec!["A", "B"]);
        assert_eq!(repo.list_table_names(10).await.unwrap().len(), 3);
    }
}
