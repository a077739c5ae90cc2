//! Error types for identifier parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The identifier literal is empty.
    #[error("identifier literal cannot be empty")]
    Empty,

    /// The literal does not match the canonical hyphenated form.
    #[error("invalid identifier literal '{literal}': {reason}")]
    InvalidLiteral { literal: String, reason: String },

    /// A raw byte encoding has the wrong length.
    #[error("identifier encoding must be exactly {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A property identifier literal is missing the `/` separator.
    #[error("property identifier missing '/' separator")]
    MissingSeparator,

    /// The name portion of a property identifier is empty.
    #[error("property name cannot be empty")]
    EmptyName,
}

impl IdError {
    /// Returns true if this error indicates the input was empty or absent.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty | IdError::EmptyName)
    }
}
