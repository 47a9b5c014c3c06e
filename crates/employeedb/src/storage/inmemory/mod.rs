//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository and
//! provisioner traits that keeps all data in maps wrapped in
//! `Arc<RwLock<_>>`. It is used by the handler tests and by the `inmemory`
//! feature for running without DynamoDB.
//!
//! # Example
//!
//! ```rust,ignore
//! use employeedb::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
