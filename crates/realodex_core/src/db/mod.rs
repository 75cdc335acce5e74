//! SQLite storage for the contact list.
//!
//! # Responsibility
//! - Open and configure connections to the Realodex data file.
//! - Bring the schema up to date before any contact is read.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A data file written by a newer build is refused, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The data file at `path` could not be opened or read as a contact store.
    DataFile { path: PathBuf, source: rusqlite::Error },
    UnsupportedSchemaVersion { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "storage error: {err}"),
            Self::DataFile { path, source } => write!(
                f,
                "cannot use data file `{}` as a contact store: {source}",
                path.display()
            ),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "data file schema version {found} is newer than supported version {supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::DataFile { source, .. } => Some(source),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl DbError {
    /// Attaches the data file path to bare SQLite failures.
    fn at_data_file(self, path: &Path) -> Self {
        match self {
            Self::Sqlite(source) => Self::DataFile {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
