//! Tag and CleanStatusTag value objects.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A free-form alphanumeric label attached to a residence.
///
/// Residences hold tags in a set, so ordering is by tag text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    /// Create a new Tag, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTag` if the tag is empty or contains
    /// anything other than ASCII letters and digits.
    pub fn new(tag: &str) -> Result<Self, ValidationError> {
        let tag = tag.trim();
        if tag.is_empty() || !tag.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidTag);
        }
        Ok(Self(tag.to_string()))
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Whether a residence has been cleaned since its last booking.
///
/// Written as the literal `y` (clean) or `n` (dirty) on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CleanStatusTag {
    Clean,
    Dirty,
}

impl CleanStatusTag {
    /// Parse a clean status, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCleanStatus` for anything other than
    /// exactly `y` or `n`.
    pub fn new(status: &str) -> Result<Self, ValidationError> {
        match status.trim() {
            "y" => Ok(Self::Clean),
            "n" => Ok(Self::Dirty),
            _ => Err(ValidationError::InvalidCleanStatus),
        }
    }

    /// The command-line literal for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clean => "y",
            Self::Dirty => "n",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clean => "Clean",
            Self::Dirty => "Dirty",
        }
    }
}

impl fmt::Display for CleanStatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CleanStatusTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CleanStatusTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CleanStatusTag::new(&s).map_err(serde::de::Error::custom)
    }
}
