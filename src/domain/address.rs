//! ResidenceAddress value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The street address of a residence. Any non-blank text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidenceAddress(String);

impl ResidenceAddress {
    /// Create a new ResidenceAddress, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAddress` if the address is blank.
    pub fn new(address: &str) -> Result<Self, ValidationError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ValidationError::InvalidAddress);
        }
        Ok(Self(address.to_string()))
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ResidenceAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ResidenceAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ResidenceAddress::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ResidenceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
