//! SQLite storage implementation for fabriq.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in `fabriq-core`
//! and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for orders and proposals
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist; `fabriq-core` is database-agnostic and works with traits.
//!
//! The proposals table carries a unique index over `(target_id, bidder_id)`.
//! That index, not the service-level pre-check, is what guarantees a bidder
//! cannot end up with two proposals on one target under concurrent requests.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod orders;
pub mod proposals;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from fabriq-core for convenience
pub use fabriq_core::errors::{DatabaseError, Error, Result};
