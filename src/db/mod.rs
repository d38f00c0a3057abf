//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and schema bootstrap
//! - Repository layer opening one connection per operation

pub mod migrations;
pub mod repo;

pub use migrations::{connect_options, init_db};
pub use repo::Repository;
