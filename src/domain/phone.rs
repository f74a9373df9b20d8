//! Phone value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A phone number: digits only, at least three of them.
///
/// Used both for a residence's contact number and for a booking's visitor.
///
/// # Example
///
/// ```
/// use residence_tracker::domain::Phone;
///
/// let phone = Phone::new("98765432").unwrap();
/// assert_eq!(phone.as_str(), "98765432");
/// assert!(Phone::new("+65 9876").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is too short or
    /// contains anything other than ASCII digits.
    pub fn new(phone: &str) -> Result<Self, ValidationError> {
        let phone = phone.trim();

        if !Self::is_valid(phone) {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(Self(phone.to_string()))
    }

    /// Returns true if the (already trimmed) string is a valid phone number.
    pub fn is_valid(phone: &str) -> bool {
        phone.len() >= 3 && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
