//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `employeedb_core::storage`. The implementation is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB (or DynamoDB Local) using `aws-sdk-dynamodb`
//! - `inmemory`: process-local storage, nothing is persisted
//!
//! These features are mutually exclusive.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p employeedb
//! ```
//!
//! Build with in-memory storage:
//! ```bash
//! cargo build -p employeedb --no-default-features --features inmemory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!(
    "Features 'dynamodb' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "dynamodb", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p employeedb --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryRepository;
