//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Load the stored contact list in list order.
//! - Replace the stored list with the in-memory one after a mutation.
//!
//! # Invariants
//! - Every loaded value passes the same validator as user input.
//! - A NULL required column is reported as a missing field, not a blank value.
//! - `replace_all` is atomic: readers see the old list or the new one.

use crate::db::migrations::{latest_version, schema_version};
use crate::db::DbError;
use crate::model::{
    Address, Birthday, Email, Family, FieldError, FieldKind, HousingType, Income, Name, Person,
    Phone, Remark, Tag,
};
use rusqlite::{params, Connection, Row, TransactionBehavior};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Required column is NULL.
    MissingField { position: i64, field: FieldKind },
    /// Stored value fails its field validator.
    InvalidField { position: i64, source: FieldError },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingField { field, .. } => {
                write!(f, "Person's {} field is missing!", field.label())
            }
            Self::InvalidField { source, .. } => write!(f, "{source}"),
            Self::InvalidData(message) => write!(f, "invalid stored contacts: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidField { source, .. } => Some(source),
            Self::MissingField { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage for the whole contact list.
pub trait ContactRepository {
    /// All stored contacts, in list order.
    fn load_contacts(&self) -> RepoResult<Vec<Person>>;
    /// Overwrites the stored list with `persons`, keeping their order.
    fn replace_all(&mut self, persons: &[Person]) -> RepoResult<()>;
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`].
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        let version = schema_version(conn)?;
        if version != latest_version() {
            return Err(RepoError::InvalidData(format!(
                "connection schema version {version} is not migrated to {}",
                latest_version()
            )));
        }
        Ok(Self { conn })
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn load_contacts(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                position, name, phone, income, email, address,
                family, housing_type, remark, birthday
             FROM contacts
             ORDER BY position ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut persons: Vec<Person> = Vec::new();
        while let Some(row) = rows.next()? {
            let person = person_from_row(self.conn, row)?;
            if let Some(existing) = persons.iter().find(|p| p.is_same_person(&person)) {
                return Err(RepoError::InvalidData(format!(
                    "contacts list contains duplicate person `{}`",
                    existing.name
                )));
            }
            persons.push(person);
        }
        Ok(persons)
    }

    fn replace_all(&mut self, persons: &[Person]) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute("DELETE FROM contact_tags;", [])?;
        tx.execute("DELETE FROM contacts;", [])?;
        {
            let mut insert_contact = tx.prepare(
                "INSERT INTO contacts (
                    position, name, phone, income, email, address,
                    family, housing_type, remark, birthday
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            )?;
            let mut insert_tag = tx.prepare(
                "INSERT INTO contact_tags (contact_position, tag) VALUES (?1, ?2);",
            )?;
            for (position, person) in (0_i64..).zip(persons) {
                insert_contact.execute(params![
                    position,
                    person.name.as_str(),
                    person.phone.as_str(),
                    person.income.as_str(),
                    person.email.as_str(),
                    person.address.as_str(),
                    person.family.get().to_string(),
                    person.housing_type.as_str(),
                    person.remark.as_str(),
                    person.birthday.to_string(),
                ])?;
                for tag in &person.tags {
                    insert_tag.execute(params![position, tag.as_str()])?;
                }
            }
        }
        tx.commit()?;
        Ok(())
    }
}

fn person_from_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Person> {
    let position: i64 = row.get("position")?;
    let column = |name: &str, field: FieldKind| -> RepoResult<String> {
        row.get::<_, Option<String>>(name)?
            .ok_or(RepoError::MissingField { position, field })
    };
    let invalid = |source: FieldError| RepoError::InvalidField { position, source };

    Ok(Person {
        name: Name::new(&column("name", FieldKind::Name)?).map_err(invalid)?,
        phone: Phone::new(&column("phone", FieldKind::Phone)?).map_err(invalid)?,
        income: Income::new(&column("income", FieldKind::Income)?).map_err(invalid)?,
        email: Email::new(&column("email", FieldKind::Email)?).map_err(invalid)?,
        address: Address::new(&column("address", FieldKind::Address)?).map_err(invalid)?,
        family: Family::new(&column("family", FieldKind::Family)?).map_err(invalid)?,
        tags: load_tags(conn, position)?
            .iter()
            .map(|raw| Tag::new(raw))
            .collect::<Result<BTreeSet<_>, _>>()
            .map_err(invalid)?,
        housing_type: HousingType::new(&column("housing_type", FieldKind::HousingType)?)
            .map_err(invalid)?,
        remark: Remark::new(&column("remark", FieldKind::Remark)?).map_err(invalid)?,
        birthday: Birthday::new(&column("birthday", FieldKind::Birthday)?).map_err(invalid)?,
    })
}

fn load_tags(conn: &Connection, position: i64) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT tag FROM contact_tags WHERE contact_position = ?1 ORDER BY tag ASC;",
    )?;
    let tags = stmt
        .query_map([position], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tags)
}
