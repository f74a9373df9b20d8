//! Command-line prefixes shared by the command parsers.

use std::fmt;

/// A literal marker such as `n/` that introduces a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_BOOKING_DETAILS: Prefix = Prefix::new("b/");
pub const PREFIX_CLEAN_STATUS: Prefix = Prefix::new("clean/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
