pub mod attributes;
mod error;
mod operations;
mod types;

pub use error::{EmployeeError, SeedError};
pub use operations::{ensure_matching_id, parse_seed_data, validate_employee};
pub use types::Employee;
