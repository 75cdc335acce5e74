//! Parsed commands and their execution against the contact list.
//!
//! # Responsibility
//! - Hold validated, immutable instructions produced by the parser.
//! - Apply them to a [`ContactList`] and report user feedback.
//!
//! # Invariants
//! - A command carries either a positional index or a validated field value
//!   as its target, never both.
//! - A failed command leaves the contact list unchanged.

pub mod edit;
pub mod usage;

pub use edit::EditDescriptor;

use crate::model::birthday::today;
use crate::model::{ContactList, Index, Name, Person, PersonPredicate};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Which contact a delete command removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// Position in the displayed list.
    Index(Index),
    /// Displayed contact whose name matches ignoring case.
    Name(Name),
}

/// Validated instruction ready for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Person),
    Delete(DeleteTarget),
    Edit {
        index: Index,
        changes: EditDescriptor,
    },
    Filter(PersonPredicate),
    List,
    Sort,
    Clear,
    Help,
    Exit,
}

/// Outcome shown to the user after a successful command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandResult {
    pub feedback: String,
    /// Caller should display the help text.
    pub show_help: bool,
    /// Caller should terminate the session.
    pub exit: bool,
}

impl CommandResult {
    pub fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

/// Execution failure; the contact list is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    InvalidIndex { index: Index, displayed: usize },
    PersonNotFound(Name),
    DuplicatePerson(Name),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { index, displayed } => write!(
                f,
                "The client index provided is invalid: {index} (displayed clients: {displayed})"
            ),
            Self::PersonNotFound(name) => {
                write!(f, "No client named `{name}` in the displayed list")
            }
            Self::DuplicatePerson(name) => {
                write!(f, "A client named `{name}` already exists in Realodex")
            }
        }
    }
}

impl Error for CommandError {}

impl Command {
    /// Command word, for logging and diagnostics.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => usage::ADD_WORD,
            Self::Delete(_) => usage::DELETE_WORD,
            Self::Edit { .. } => usage::EDIT_WORD,
            Self::Filter(_) => usage::FILTER_WORD,
            Self::List => usage::LIST_WORD,
            Self::Sort => usage::SORT_WORD,
            Self::Clear => usage::CLEAR_WORD,
            Self::Help => usage::HELP_WORD,
            Self::Exit => usage::EXIT_WORD,
        }
    }

    /// Whether a successful run changes stored contacts.
    pub fn mutates_contacts(&self) -> bool {
        matches!(
            self,
            Self::Add(_) | Self::Delete(_) | Self::Edit { .. } | Self::Sort | Self::Clear
        )
    }

    pub fn execute(&self, contacts: &mut ContactList) -> Result<CommandResult, CommandError> {
        match self {
            Self::Add(person) => {
                if !contacts.add(person.clone()) {
                    return Err(CommandError::DuplicatePerson(person.name.clone()));
                }
                Ok(CommandResult::message(format!("New client added: {person}")))
            }
            Self::Delete(target) => {
                let position = match target {
                    DeleteTarget::Index(index) => displayed_position(contacts, *index)?,
                    DeleteTarget::Name(name) => contacts
                        .position_of_displayed_name(name)
                        .ok_or_else(|| CommandError::PersonNotFound(name.clone()))?,
                };
                let removed = contacts
                    .remove(position)
                    .ok_or_else(|| invalid_index(contacts, Index::from_zero_based(position)))?;
                Ok(CommandResult::message(format!("Deleted client: {removed}")))
            }
            Self::Edit { index, changes } => {
                let position = displayed_position(contacts, *index)?;
                let current = contacts
                    .get(position)
                    .ok_or_else(|| invalid_index(contacts, *index))?;
                let edited = changes.apply(current);
                if !contacts.replace(position, edited.clone()) {
                    return Err(CommandError::DuplicatePerson(edited.name));
                }
                contacts.show_all();
                Ok(CommandResult::message(format!("Edited client: {edited}")))
            }
            Self::Filter(predicate) => {
                contacts.set_filter(predicate.clone());
                let shown = contacts.displayed().len();
                Ok(CommandResult::message(format!(
                    "{shown} clients listed! (filter: {predicate})"
                )))
            }
            Self::List => {
                contacts.show_all();
                Ok(CommandResult::message("Listed all clients"))
            }
            Self::Sort => {
                contacts.sort_by_upcoming_birthday(today());
                Ok(CommandResult::message(
                    "Sorted all clients by days until their next birthday",
                ))
            }
            Self::Clear => {
                contacts.clear();
                Ok(CommandResult::message("Realodex has been cleared!"))
            }
            Self::Help => Ok(CommandResult {
                feedback: usage::help_message(),
                show_help: true,
                exit: false,
            }),
            Self::Exit => Ok(CommandResult {
                feedback: "Exiting Realodex as requested ...".to_string(),
                show_help: false,
                exit: true,
            }),
        }
    }
}

fn displayed_position(contacts: &ContactList, index: Index) -> Result<usize, CommandError> {
    contacts
        .storage_position(index)
        .ok_or_else(|| invalid_index(contacts, index))
}

fn invalid_index(contacts: &ContactList, index: Index) -> CommandError {
    CommandError::InvalidIndex {
        index,
        displayed: contacts.displayed().len(),
    }
}
