//! Parse-layer error type.

use super::prefix::Prefix;
use crate::model::FieldError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a command line could not become a [`crate::command::Command`].
///
/// Structural variants carry the usage text of the command being parsed;
/// `Field` carries the failing field's own constraint message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input has the wrong shape.
    Syntax {
        detail: &'static str,
        usage: &'static str,
    },
    /// Required prefixes are absent.
    MissingFields {
        fields: Vec<Prefix>,
        usage: &'static str,
    },
    /// Prefixes given more often than allowed.
    DuplicatePrefixes(Vec<Prefix>),
    /// A present value failed its field validator.
    Field(FieldError),
    /// First word is not a known command.
    UnknownCommand(String),
}

impl ParseError {
    pub(crate) fn syntax(detail: &'static str, usage: &'static str) -> Self {
        Self::Syntax { detail, usage }
    }

    /// Usage text to show alongside the message, if any.
    pub fn usage(&self) -> Option<&'static str> {
        match self {
            Self::Syntax { usage, .. } | Self::MissingFields { usage, .. } => Some(*usage),
            Self::DuplicatePrefixes(_) | Self::Field(_) | Self::UnknownCommand(_) => None,
        }
    }
}

/// Message for prefixes that appear more often than allowed.
pub fn duplicate_prefixes_message(prefixes: &[Prefix]) -> String {
    let markers = prefixes
        .iter()
        .map(|prefix| prefix.marker())
        .collect::<Vec<_>>();
    format!(
        "Multiple values specified for the following single-valued field(s): {}",
        markers.join(" ")
    )
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax { detail, usage } => write!(f, "{detail}\n{usage}"),
            Self::MissingFields { fields, usage } => {
                let names = fields
                    .iter()
                    .map(|prefix| format!("{} ({})", prefix.field().label(), prefix.marker()))
                    .collect::<Vec<_>>();
                write!(f, "Missing required field(s): {}\n{usage}", names.join(", "))
            }
            Self::DuplicatePrefixes(prefixes) => {
                f.write_str(&duplicate_prefixes_message(prefixes))
            }
            Self::Field(err) => write!(f, "{err}"),
            Self::UnknownCommand(word) => write!(f, "Unknown command: `{word}`"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for ParseError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}
