//! Core use-case services.
//!
//! # Responsibility
//! - Tie command parsing and execution to persistence.
//! - Keep the CLI decoupled from storage details.

pub mod contact_service;

pub use contact_service::{ContactService, ServiceError};
