//! Core domain logic for Realodex, a contact manager for real-estate agents.
//! This crate is the single source of truth for contact invariants.

pub mod command;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod parser;
pub mod repo;
pub mod service;

pub use command::{Command, CommandError, CommandResult, DeleteTarget, EditDescriptor};
pub use config::{load_config, AppConfig, ConfigError};
pub use db::{open_db, open_db_in_memory, DbError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::{ContactList, FieldError, FieldKind, Person, PersonPredicate};
pub use parser::{create_predicate, parse_command, FilterPrefix, ParseError, Prefix};
pub use repo::{ContactRepository, RepoError, RepoResult, SqliteContactRepository};
pub use service::{ContactService, ServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
