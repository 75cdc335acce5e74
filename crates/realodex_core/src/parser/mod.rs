//! Command-line parsing.
//!
//! # Responsibility
//! - Split the command word from its arguments and dispatch to the parser of
//!   that command.
//! - Turn every malformed line into a [`ParseError`] before any state changes.
//!
//! # Invariants
//! - Parsing is pure: no contact data is read or written here.
//! - Structural checks run before field validation in every parser.
//!
//! # See also
//! - [`crate::command`] for execution of the parsed commands.

pub mod add;
pub mod delete;
pub mod edit;
pub mod error;
pub mod filter;
pub mod parser_util;
pub mod predicate_producer;
pub mod prefix;
pub mod prefix_checker;
pub mod tokenizer;

pub use error::ParseError;
pub use predicate_producer::create_predicate;
pub use prefix::{FilterPrefix, Prefix};
pub use prefix_checker::PrefixChecker;
pub use tokenizer::{tokenize, ArgumentMultimap};

use crate::command::{usage, Command};

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format!";

/// Parses one full input line into a command.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::syntax(
            MESSAGE_INVALID_COMMAND_FORMAT,
            usage::HELP_USAGE,
        ));
    }
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split) => trimmed.split_at(split),
        None => (trimmed, ""),
    };

    match word {
        usage::ADD_WORD => add::parse_add(args),
        usage::DELETE_WORD => delete::parse_delete(args),
        usage::EDIT_WORD => edit::parse_edit(args),
        usage::FILTER_WORD => filter::parse_filter(args),
        usage::LIST_WORD => Ok(Command::List),
        usage::SORT_WORD => Ok(Command::Sort),
        usage::CLEAR_WORD => Ok(Command::Clear),
        usage::HELP_WORD => Ok(Command::Help),
        usage::EXIT_WORD => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}
