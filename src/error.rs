//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors produced by contact record and directory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A value failed validation (phone digits, birthday date, empty name)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced contact or phone number does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// A contact with the same name already exists
    #[error("Contact already exists: {0}")]
    Duplicate(String),
}

/// Errors raised while executing an assistant command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given fewer arguments than it needs
    #[error("Missing arguments for '{command}'. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// The underlying contact operation failed
    #[error(transparent)]
    Contact(#[from] ContactError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Contact(ContactError::Validation(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
