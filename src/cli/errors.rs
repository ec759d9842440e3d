//! Command line parse failures.

use thiserror::Error;

/// A command line that could not be turned into a [`Command`](super::Command).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// Nothing after the program name.
    #[error("No command given. Run 'evidence-research help' for usage.")]
    MissingCommand,

    /// First argument is not a known command.
    #[error("Unknown command '{0}'. Expected health, search, resolve, analyze or help.")]
    UnknownCommand(String),

    /// A `--flag` the command does not accept.
    #[error("Unrecognized option '{0}'")]
    UnknownFlag(String),

    /// A flag value or positional argument (`query`, `line`, `file`) was not supplied.
    #[error("Expected a value for '{0}'")]
    MissingValue(String),

    /// A flag value that does not parse as the expected number.
    #[error("'{value}' is not a valid number for '{flag}'")]
    InvalidValue {
        /// Flag the value was given for.
        flag: String,
        /// Value as typed.
        value: String,
    },
}
