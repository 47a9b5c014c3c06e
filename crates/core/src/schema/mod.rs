//! Declarative table description and provisioning planning.

mod config;
mod planning;

pub use config::{
    employee_table_config, AttributeType, BillingMode, GsiConfig, KeyAttribute, Projection,
    TableConfig, DIRECT_REPORTS_INDEX, NAME_INDEX, TABLE_NAME,
};
pub use planning::{
    calculate_provision_plan, format_provision_plan, ProvisionPlan, LIST_TABLES_PAGE_SIZE,
};
