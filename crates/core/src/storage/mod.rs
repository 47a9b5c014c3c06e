mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::{employee_error_to_status_code, repository_error_to_status_code};
pub use traits::{EmployeeRepository, TableProvisioner};
pub use types::ReadConsistency;
