//! Pure functions for deciding what provisioning has to do.

use super::config::TableConfig;

/// Number of table names fetched when checking whether the table exists.
///
/// Only the first page is inspected. An account with more tables than this
/// may hide an existing table from the check.
pub const LIST_TABLES_PAGE_SIZE: i32 = 10;

/// Planned provisioning action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionPlan {
    /// Table is absent from the listed page and will be created.
    CreateTable { config: TableConfig },
    /// Table is already listed, nothing to do.
    NoChanges { table_name: String },
}

/// Calculate the provisioning action from one page of existing table names.
pub fn calculate_provision_plan(existing: &[String], desired: &TableConfig) -> ProvisionPlan {
    if existing.iter().any(|name| name == &desired.table_name) {
        ProvisionPlan::NoChanges {
            table_name: desired.table_name.clone(),
        }
    } else {
        ProvisionPlan::CreateTable {
            config: desired.clone(),
        }
    }
}

/// Format a provision plan for display.
pub fn format_provision_plan(plan: &ProvisionPlan) -> Vec<String> {
    match plan {
        ProvisionPlan::CreateTable { config } => {
            let mut lines = vec![
                format!("+ Create table: {}", config.table_name),
                format!("  Partition key: {} (S)", config.partition_key.name),
            ];
            if let Some(sk) = &config.sort_key {
                lines.push(format!("  Sort key: {} (S)", sk.name));
            }
            for gsi in &config.gsis {
                lines.push(format!("  + GSI: {}", gsi.name));
                lines.push(format!("    Partition key: {} (S)", gsi.partition_key.name));
                if let Some(sk) = &gsi.sort_key {
                    lines.push(format!("    Sort key: {} (S)", sk.name));
                }
            }
            lines.push("  Billing: PAY_PER_REQUEST".to_string());
            lines
        }
        ProvisionPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' already exists", table_name)]
        }
    }
}
