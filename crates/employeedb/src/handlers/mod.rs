pub mod employees;
pub mod error;
pub mod health;
pub mod table;

pub use error::AppError;
