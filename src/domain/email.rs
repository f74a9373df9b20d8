//! Email value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:alnum:]!#$%&'*+/=?`{|}~^.\-]+@[[:alnum:]][[:alnum:].\-]*[[:alnum:]]$")
        .expect("Failed to compile email regex")
});

/// A residence's contact email address.
///
/// # Validation Rules
///
/// - Exactly one '@' separating a non-empty local part from the domain
/// - Local part: ASCII alphanumerics and ``!#$%&'*+/=?`{|}~^.-``
/// - Domain: at least 2 characters, starts and ends alphanumeric,
///   alphanumerics, periods or hyphens in between
///
/// # Example
///
/// ```
/// use residence_tracker::domain::Email;
///
/// let email = Email::new(" johnd@example.com ").unwrap();
/// assert_eq!(email.as_str(), "johnd@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: &str) -> Result<Self, ValidationError> {
        let email = email.trim();

        if !Self::is_valid(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self(email.to_string()))
    }

    /// Returns true if the (already trimmed) string is a valid email.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

// Serde support - serialize as string
impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
