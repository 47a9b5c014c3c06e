//! Core types and pure functions for employeedb.
//!
//! Everything in this crate is free of I/O: the domain type, validation,
//! the declarative table description, provisioning planning and the
//! storage traits implemented by the server crate.

pub mod employee;
pub mod schema;
pub mod serde;
pub mod storage;
