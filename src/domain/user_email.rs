//! UserEmail value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for user email addresses.
///
/// The address is trimmed and lower-cased at construction, which is what makes
/// email uniqueness and token subjects case-insensitive everywhere else: two
/// `UserEmail` values compare equal iff the addresses match ignoring case.
///
/// # Example
///
/// ```
/// use contact_manager_server::domain::UserEmail;
///
/// let email = UserEmail::new("Jo@Example.com").unwrap();
/// assert_eq!(email.as_str(), "jo@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserEmail(String);

impl UserEmail {
    /// Create a new UserEmail, trimming, lower-casing, and validating.
    ///
    /// # Validation Rules
    ///
    /// - Must not be blank
    /// - Must contain exactly one '@' symbol
    /// - Must have a non-empty local part and a non-empty domain part
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyEmail` for blank input and
    /// `ValidationError::InvalidEmail` for anything else that fails validation.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let email = email.as_ref().trim().to_lowercase();

        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Validate email format.
    fn is_valid(email: &str) -> bool {
        let parts: Vec<&str> = email.split('@').collect();

        if parts.len() != 2 {
            return false;
        }

        !parts[0].is_empty() && !parts[1].is_empty()
    }

    /// Get the normalized address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for UserEmail {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with normalization and validation
impl<'de> Deserialize<'de> for UserEmail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UserEmail::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for UserEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
