//! Error types for the residence tracker.
//!
//! Parsing and execution failures are kept apart: a [`ParseError`] means no
//! command was built, a [`CommandError`] means a command ran and left the
//! registry untouched. Both render as the exact text shown to the user.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that abort building a command from user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A field value failed its constraint
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Structural problem; carries the usage text of the command
    #[error("Invalid command format! \n{0}")]
    InvalidFormat(String),

    /// Positional index is not a positive integer
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    /// Edit was given an index but no fields
    #[error("At least one field to edit must be provided.")]
    NotEdited,

    /// Command word is not recognised
    #[error("Unknown command")]
    UnknownCommand,
}

/// Errors raised by the registry's mutation API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Target of a replace or delete is not stored
    #[error("The residence could not be found in the residence tracker")]
    ResidenceNotFound,

    /// Insert or replace would create two residences with the same identity
    #[error("This residence already exists in the residence tracker")]
    DuplicateResidence,
}

/// Errors that abort executing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("This residence already exists in the residence tracker")]
    DuplicateResidence,

    #[error("The residence index provided is invalid")]
    InvalidResidenceIndex,

    #[error("The booking index provided is invalid")]
    InvalidBookingIndex,

    #[error("This booking overlaps with an existing booking of this residence")]
    OverlappingBooking,

    #[error("At least one field to edit must be provided.")]
    NotEdited,

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Any failure a single line of user input can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with CommandError
pub type ExecuteResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
