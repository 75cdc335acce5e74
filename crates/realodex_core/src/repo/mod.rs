//! Persistence contracts and their SQLite implementations.
//!
//! # Responsibility
//! - Keep SQL out of the service and command layers.
//! - Re-validate stored rows so in-memory contacts always hold valid values.

pub mod contact_repo;

pub use contact_repo::{ContactRepository, RepoError, RepoResult, SqliteContactRepository};
