//! Table schema configuration (pure data).

use crate::employee::attributes;

/// Name of the employee table.
pub const TABLE_NAME: &str = "Employee";
/// Index keyed by first name then last name.
pub const NAME_INDEX: &str = "Name";
/// Index keyed by manager login alias.
pub const DIRECT_REPORTS_INDEX: &str = "DirectReports";

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
    pub gsis: Vec<GsiConfig>,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB scalar types usable as keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Global Secondary Index configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GsiConfig {
    pub name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
    pub projection: Projection,
}

/// Attributes copied into a secondary index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Every attribute of the item.
    All,
    /// Key attributes plus the listed attributes.
    Include(Vec<String>),
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl KeyAttribute {
    /// Creates a string-typed key attribute.
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute_type: AttributeType::String,
        }
    }
}

impl TableConfig {
    /// Returns the table's own key attributes.
    fn table_keys(&self) -> impl Iterator<Item = &KeyAttribute> {
        std::iter::once(&self.partition_key).chain(self.sort_key.as_ref())
    }

    /// Returns every attribute used as a key by the table or one of its
    /// indexes, without duplicates, table keys first.
    ///
    /// These are exactly the attributes that must be declared in a
    /// create-table request.
    pub fn key_attributes(&self) -> Vec<&KeyAttribute> {
        let mut keys: Vec<&KeyAttribute> = Vec::new();
        let index_keys = self.gsis.iter().flat_map(|gsi| gsi.keys());

        for key in self.table_keys().chain(index_keys) {
            if !keys.iter().any(|k| k.name == key.name) {
                keys.push(key);
            }
        }
        keys
    }

    /// Looks up an index by name.
    pub fn gsi(&self, name: &str) -> Option<&GsiConfig> {
        self.gsis.iter().find(|gsi| gsi.name == name)
    }
}

impl GsiConfig {
    /// Returns the index's key attributes.
    pub fn keys(&self) -> impl Iterator<Item = &KeyAttribute> {
        std::iter::once(&self.partition_key).chain(self.sort_key.as_ref())
    }

    /// Returns the included attributes that are not already projected as
    /// keys of the table or of this index.
    ///
    /// DynamoDB always projects those keys, so the result describes the
    /// same index content as the configured projection.
    pub fn non_key_attributes(&self, table: &TableConfig) -> Vec<String> {
        let Projection::Include(attributes) = &self.projection else {
            return Vec::new();
        };

        attributes
            .iter()
            .filter(|attribute| {
                !table
                    .table_keys()
                    .chain(self.keys())
                    .any(|key| &key.name == *attribute)
            })
            .cloned()
            .collect()
    }
}

/// Returns the canonical employee table configuration.
pub fn employee_table_config() -> TableConfig {
    TableConfig {
        table_name: TABLE_NAME.to_string(),
        partition_key: KeyAttribute::string(attributes::LOGIN_ALIAS),
        sort_key: None,
        gsis: vec![
            GsiConfig {
                name: NAME_INDEX.to_string(),
                partition_key: KeyAttribute::string(attributes::FIRST_NAME),
                sort_key: Some(KeyAttribute::string(attributes::LAST_NAME)),
                projection: Projection::All,
            },
            GsiConfig {
                name: DIRECT_REPORTS_INDEX.to_string(),
                partition_key: KeyAttribute::string(attributes::MANAGER_LOGIN_ALIAS),
                sort_key: None,
                projection: Projection::Include(vec![
                    attributes::LOGIN_ALIAS.to_string(),
                    attributes::FIRST_NAME.to_string(),
                    attributes::LAST_NAME.to_string(),
                ]),
            },
        ],
        billing_mode: BillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_table_keys() {
        let config = employee_table_config();

        assert_eq!(config.table_name, "Employee");
        assert_eq!(config.partition_key.name, "login_alias");
        assert_eq!(config.sort_key, None);
    }

    #[test]
    fn test_name_index() {
        let config = employee_table_config();
        let gsi = config.gsi("Name").unwrap();

        assert_eq!(gsi.partition_key.name, "first_name");
        assert_eq!(gsi.sort_key.as_ref().unwrap().name, "last_name");
        assert_eq!(gsi.projection, Projection::All);
    }

    #[test]
    fn test_direct_reports_index() {
        let config = employee_table_config();
        let gsi = config.gsi("DirectReports").unwrap();

        assert_eq!(gsi.partition_key.name, "manager_login_alias");
        assert_eq!(gsi.sort_key, None);
        assert_eq!(
            gsi.projection,
            Projection::Include(vec![
                "login_alias".to_string(),
                "first_name".to_string(),
                "last_name".to_string(),
            ])
        );
    }

    #[test]
    fn test_key_attributes_are_unique_and_ordered() {
        let config = employee_table_config();
        let names: Vec<&str> = config
            .key_attributes()
            .iter()
            .map(|k| k.name.as_str())
            .collect();

        assert_eq!(
            names,
            vec!["login_alias", "first_name", "last_name", "manager_login_alias"]
        );
    }

    #[test]
    fn test_non_key_attributes_drop_projected_keys() {
        let config = employee_table_config();
        let gsi = config.gsi("DirectReports").unwrap();

        assert_eq!(
            gsi.non_key_attributes(&config),
            vec!["first_name".to_string(), "last_name".to_string()]
        );
    }

    #[test]
    fn test_non_key_attributes_empty_for_all_projection() {
        let config = employee_table_config();
        let gsi = config.gsi("Name").unwrap();

        assert!(gsi.non_key_attributes(&config).is_empty());
    }
}
