//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant renders as the fixed constraint message for its field so
/// callers can show it to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Residence or visitor name is blank or contains non-alphanumerics.
    InvalidName,

    /// Residence address is blank.
    InvalidAddress,

    /// Phone number is not at least three digits.
    InvalidPhone,

    /// Email address is not of the form `local-part@domain`.
    InvalidEmail,

    /// Clean status is neither `y` nor `n`.
    InvalidCleanStatus,

    /// Tag is not alphanumeric.
    InvalidTag,

    /// A booking date could not be read as `DDMMYY`.
    BookingDateFormat,

    /// A booking starts after it ends.
    BookingRange,
}

impl ValidationError {
    /// The constraint message shown to the user for this field.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidName => {
                "Names should only contain alphanumeric characters and spaces, \
                 and it should not be blank"
            }
            Self::InvalidAddress => "Addresses can take any values, and it should not be blank",
            Self::InvalidPhone => {
                "Phone numbers should only contain numbers, and it should be at least 3 digits long"
            }
            Self::InvalidEmail => {
                "Emails should be of the format local-part@domain \
                 and adhere to the following constraints:\n\
                 1. The local-part should only contain alphanumeric characters and these special \
                 characters, excluding the parentheses, (!#$%&'*+/=?`{|}~^.-) .\n\
                 2. This is followed by a '@' and then a domain name. The domain name must:\n    \
                 - be at least 2 characters long\n    \
                 - start and end with alphanumeric characters\n    \
                 - consist of alphanumeric characters, a period or a hyphen for the characters \
                 in between, if any."
            }
            Self::InvalidCleanStatus => "Clean status should be either y (clean) or n (dirty)",
            Self::InvalidTag => "Tags names should be alphanumeric",
            Self::BookingDateFormat => "Date is not in the expected format: DDMMYY",
            Self::BookingRange => "Booking start date must not be after its end date",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}
