//! Contact use-case service.
//!
//! # Responsibility
//! - Run one input line through parse, execute and persist.
//! - Own the in-memory contact list for the session.
//!
//! # Invariants
//! - A mutation that cannot be saved is rolled back in memory as well.
//! - Logs carry the command word and outcome only, never the input text.

use crate::command::{Command, CommandError, CommandResult};
use crate::model::ContactList;
use crate::parser::{parse_command, ParseError};
use crate::repo::{ContactRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for contact use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input line was rejected before execution.
    Parse(ParseError),
    /// Command could not be applied to the current list.
    Command(CommandError),
    /// Loading or saving failed.
    Repo(RepoError),
}

impl ServiceError {
    fn kind(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse",
            Self::Command(_) => "command",
            Self::Repo(_) => "repo",
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "Could not save or load contacts: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ParseError> for ServiceError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for ServiceError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Session facade over a contact repository.
pub struct ContactService<R: ContactRepository> {
    repo: R,
    contacts: ContactList,
}

impl<R: ContactRepository> ContactService<R> {
    /// Loads the stored contacts and starts a session.
    pub fn open(repo: R) -> Result<Self, ServiceError> {
        let persons = match repo.load_contacts() {
            Ok(persons) => persons,
            Err(err) => {
                warn!("event=contacts_load module=service status=error error={err}");
                return Err(err.into());
            }
        };
        info!(
            "event=contacts_load module=service status=ok count={}",
            persons.len()
        );
        Ok(Self {
            repo,
            contacts: ContactList::new(persons),
        })
    }

    pub fn contacts(&self) -> &ContactList {
        &self.contacts
    }

    /// Parses and runs one input line.
    pub fn execute_line(&mut self, line: &str) -> Result<CommandResult, ServiceError> {
        let command = parse_command(line).map_err(|err| {
            let err = ServiceError::from(err);
            log_rejected("unparsed", &err);
            err
        })?;
        self.execute(&command)
    }

    /// Runs an already parsed command, saving the list when it changed.
    pub fn execute(&mut self, command: &Command) -> Result<CommandResult, ServiceError> {
        let word = command.word();
        let snapshot = command.mutates_contacts().then(|| self.contacts.clone());

        let outcome = command
            .execute(&mut self.contacts)
            .map_err(ServiceError::from)
            .and_then(|result| match &snapshot {
                Some(_) => self
                    .repo
                    .replace_all(self.contacts.persons())
                    .map(|()| result)
                    .map_err(ServiceError::from),
                None => Ok(result),
            });

        match &outcome {
            Ok(_) => info!(
                "event=command_execute module=service status=ok command={word} displayed={}",
                self.contacts.displayed().len()
            ),
            Err(err) => {
                if let (ServiceError::Repo(_), Some(previous)) = (err, snapshot) {
                    self.contacts = previous;
                }
                log_rejected(word, err);
            }
        }
        outcome
    }
}

fn log_rejected(word: &str, err: &ServiceError) {
    warn!(
        "event=command_execute module=service status=rejected command={word} error_kind={}",
        err.kind()
    );
}

#[cfg(test)]
mod tests {
    use super::{ContactService, ServiceError};
    use crate::model::Person;
    use crate::repo::{ContactRepository, RepoError, RepoResult};

    #[derive(Default)]
    struct MemoryRepo {
        saved: Vec<Person>,
        fail_saves: bool,
        saves: usize,
    }

    impl ContactRepository for MemoryRepo {
        fn load_contacts(&self) -> RepoResult<Vec<Person>> {
            Ok(self.saved.clone())
        }

        fn replace_all(&mut self, persons: &[Person]) -> RepoResult<()> {
            self.saves += 1;
            if self.fail_saves {
                return Err(RepoError::InvalidData("disk full".to_string()));
            }
            self.saved = persons.to_vec();
            Ok(())
        }
    }

    const ADD_AMY: &str = "add n/Amy Bee p/11111111 i/1000 e/amy@example.com a/Blk 1 f/2 t/buyer h/HDB";

    #[test]
    fn mutation_is_saved_and_query_is_not() {
        let mut service = ContactService::open(MemoryRepo::default()).unwrap();
        service.execute_line(ADD_AMY).unwrap();
        service.execute_line("list").unwrap();
        service.execute_line("filter n/amy").unwrap();
        assert_eq!(service.repo.saves, 1);
        assert_eq!(service.repo.saved.len(), 1);
    }

    #[test]
    fn failed_save_rolls_back_memory() {
        let repo = MemoryRepo {
            fail_saves: true,
            ..MemoryRepo::default()
        };
        let mut service = ContactService::open(repo).unwrap();
        let err = service.execute_line(ADD_AMY).unwrap_err();
        assert!(matches!(err, ServiceError::Repo(_)));
        assert!(service.contacts().is_empty());
    }

    #[test]
    fn parse_and_command_errors_are_distinguished() {
        let mut service = ContactService::open(MemoryRepo::default()).unwrap();
        assert!(matches!(
            service.execute_line("delete").unwrap_err(),
            ServiceError::Parse(_)
        ));
        assert!(matches!(
            service.execute_line("delete 1").unwrap_err(),
            ServiceError::Command(_)
        ));
        assert_eq!(service.repo.saves, 0);
    }
}
