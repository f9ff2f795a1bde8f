//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is blank.
    EmptyEmail,

    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "Email cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for ValidationError {}
