//! Name value objects for residences and booking visitors.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:alnum:]][[:alnum:] ]*$")
        .expect("Failed to compile name regex")
});

/// Returns true if the (already trimmed) string is a valid name.
///
/// Names start with an ASCII letter or digit and otherwise contain only
/// ASCII letters, digits and spaces.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// The display name of a residence.
///
/// # Example
///
/// ```
/// use residence_tracker::domain::ResidenceName;
///
/// let name = ResidenceName::new("  Clementi Loft ").unwrap();
/// assert_eq!(name.as_str(), "Clementi Loft");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidenceName(String);

impl ResidenceName {
    /// Create a new ResidenceName, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is blank or contains
    /// characters other than alphanumerics and spaces.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if !is_valid_name(name) {
            return Err(ValidationError::InvalidName);
        }
        Ok(Self(name.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if any whitespace-separated word of the name equals
    /// `keyword`, ignoring case.
    pub fn contains_word_ignore_case(&self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        !keyword.is_empty()
            && self
                .0
                .split_whitespace()
                .any(|word| word.to_lowercase() == keyword.to_lowercase())
    }
}

/// The name of a visitor holding a booking. Shares the residence name rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitorName(String);

impl VisitorName {
    /// Create a new VisitorName, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` under the same rules as
    /// [`ResidenceName::new`].
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if !is_valid_name(name) {
            return Err(ValidationError::InvalidName);
        }
        Ok(Self(name.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ResidenceName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ResidenceName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ResidenceName::new(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for VisitorName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VisitorName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        VisitorName::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ResidenceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for VisitorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
