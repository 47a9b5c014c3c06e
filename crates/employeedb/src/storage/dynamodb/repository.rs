//! DynamoDB repository implementation.
//!
//! Implements the repository and provisioner traits from
//! `employeedb_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, GlobalSecondaryIndex, KeySchemaElement, KeyType, Projection,
    ProjectionType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use employeedb_core::employee::Employee;
use employeedb_core::schema::{self, AttributeType, GsiConfig, KeyAttribute, TableConfig};
use employeedb_core::storage::{
    EmployeeRepository, ReadConsistency, RepositoryError, Result, TableProvisioner,
};

use super::conversions::{employee_key, employee_to_item, item_to_employee};
use super::error::{
    map_create_table_error, map_delete_item_error, map_get_item_error, map_list_tables_error,
    map_put_item_error, map_scan_error,
};

/// DynamoDB-based repository implementation.
///
/// Holds a shared SDK client; cloning the client is cheap and it is safe to
/// use from concurrent requests.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

// ============================================================================
// EmployeeRepository implementation
// ============================================================================

#[async_trait]
impl EmployeeRepository for DynamoDbRepository {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let mut employees = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in output.items() {
                employees.push(item_to_employee(item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        Ok(employees)
    }

    async fn get_employee(
        &self,
        login_alias: &str,
        consistency: ReadConsistency,
    ) -> Result<Option<Employee>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(employee_key(login_alias)))
            .consistent_read(consistency.is_strong())
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_employee(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_employee(&self, employee: &Employee) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(employee_to_item(employee)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete_employee(&self, login_alias: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(employee_key(login_alias)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}

// ============================================================================
// TableProvisioner implementation
// ============================================================================

#[async_trait]
impl TableProvisioner for DynamoDbRepository {
    async fn list_table_names(&self, limit: i32) -> Result<Vec<String>> {
        let output = self
            .client
            .list_tables()
            .limit(limit)
            .send()
            .await
            .map_err(map_list_tables_error)?;

        Ok(output.table_names().to_vec())
    }

    async fn create_table(&self, config: &TableConfig) -> Result<()> {
        let mut key_schema = vec![key_schema_element(&config.partition_key, KeyType::Hash)?];
        if let Some(sk) = &config.sort_key {
            key_schema.push(key_schema_element(sk, KeyType::Range)?);
        }

        let attribute_definitions = config
            .key_attributes()
            .into_iter()
            .map(attribute_definition)
            .collect::<Result<Vec<_>>>()?;

        let global_secondary_indexes = config
            .gsis
            .iter()
            .map(|gsi| global_secondary_index(config, gsi))
            .collect::<Result<Vec<_>>>()?;

        let mut request = self
            .client
            .create_table()
            .table_name(&config.table_name)
            .set_key_schema(Some(key_schema))
            .set_attribute_definitions(Some(attribute_definitions))
            .billing_mode(to_billing_mode(config.billing_mode));

        if !global_secondary_indexes.is_empty() {
            request = request.set_global_secondary_indexes(Some(global_secondary_indexes));
        }

        request
            .send()
            .await
            .map_err(|e| map_create_table_error(e, &config.table_name))?;

        Ok(())
    }
}

// ============================================================================
// Request builders
// ============================================================================

fn key_schema_element(key: &KeyAttribute, key_type: KeyType) -> Result<KeySchemaElement> {
    KeySchemaElement::builder()
        .attribute_name(&key.name)
        .key_type(key_type)
        .build()
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
}

fn attribute_definition(key: &KeyAttribute) -> Result<AttributeDefinition> {
    AttributeDefinition::builder()
        .attribute_name(&key.name)
        .attribute_type(to_scalar_type(key.attribute_type))
        .build()
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
}

fn global_secondary_index(table: &TableConfig, gsi: &GsiConfig) -> Result<GlobalSecondaryIndex> {
    let mut key_schema = vec![key_schema_element(&gsi.partition_key, KeyType::Hash)?];
    if let Some(sk) = &gsi.sort_key {
        key_schema.push(key_schema_element(sk, KeyType::Range)?);
    }

    GlobalSecondaryIndex::builder()
        .index_name(&gsi.name)
        .set_key_schema(Some(key_schema))
        .projection(to_projection(table, gsi))
        .build()
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
}

fn to_projection(table: &TableConfig, gsi: &GsiConfig) -> Projection {
    match &gsi.projection {
        schema::Projection::All => Projection::builder()
            .projection_type(ProjectionType::All)
            .build(),
        schema::Projection::Include(_) => {
            let non_key_attributes = gsi.non_key_attributes(table);
            if non_key_attributes.is_empty() {
                Projection::builder()
                    .projection_type(ProjectionType::KeysOnly)
                    .build()
            } else {
                Projection::builder()
                    .projection_type(ProjectionType::Include)
                    .set_non_key_attributes(Some(non_key_attributes))
                    .build()
            }
        }
    }
}

fn to_scalar_type(attr_type: AttributeType) -> ScalarAttributeType {
    match attr_type {
        AttributeType::String => ScalarAttributeType::S,
    }
}

fn to_billing_mode(billing_mode: schema::BillingMode) -> BillingMode {
    match billing_mode {
        schema::BillingMode::PayPerRequest => BillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use employeedb_core::schema::employee_table_config;

    #[test]
    fn test_name_index_projects_all() {
        let config = employee_table_config();
        let gsi = config.gsi("Name").unwrap();

        let projection = to_projection(&config, gsi);

        assert_eq!(projection.projection_type(), Some(&ProjectionType::All));
        assert!(projection.non_key_attributes().is_empty());
    }

    #[test]
    fn test_direct_reports_index_includes_names() {
        let config = employee_table_config();
        let gsi = config.gsi("DirectReports").unwrap();

        let projection = to_projection(&config, gsi);

        assert_eq!(projection.projection_type(), Some(&ProjectionType::Include));
        assert_eq!(
            projection.non_key_attributes(),
            &["first_name".to_string(), "last_name".to_string()]
        );
    }

    #[test]
    fn test_include_of_keys_only_becomes_keys_only() {
        let mut config = employee_table_config();
        config.gsis[1].projection = schema::Projection::Include(vec![
            "login_alias".to_string(),
            "manager_login_alias".to_string(),
        ]);

        let projection = to_projection(&config, &config.gsis[1]);

        assert_eq!(
            projection.projection_type(),
            Some(&ProjectionType::KeysOnly)
        );
    }

    #[test]
    fn test_gsi_key_schema() {
        let config = employee_table_config();
        let gsi = global_secondary_index(&config, config.gsi("Name").unwrap()).unwrap();

        assert_eq!(gsi.index_name(), "Name");
        let keys: Vec<(&str, &KeyType)> = gsi
            .key_schema()
            .iter()
            .map(|k| (k.attribute_name(), k.key_type()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("first_name", &KeyType::Hash),
                ("last_name", &KeyType::Range)
            ]
        );
    }

    #[test]
    fn test_attribute_definitions_cover_key_attributes() {
        let config = employee_table_config();
        let definitions: Vec<AttributeDefinition> = config
            .key_attributes()
            .into_iter()
            .map(attribute_definition)
            .collect::<Result<_>>()
            .unwrap();

        let names: Vec<&str> = definitions.iter().map(|d| d.attribute_name()).collect();
        assert_eq!(
            names,
            vec!["login_alias", "first_name", "last_name", "manager_login_alias"]
        );
        assert!(definitions
            .iter()
            .all(|d| d.attribute_type() == &ScalarAttributeType::S));
    }
}
