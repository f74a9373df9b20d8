//! Booking model: a dated reservation of a residence by a visitor.

use crate::domain::{Phone, ValidationError, VisitorName};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display format for booking dates.
const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

/// A reservation of a residence for an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Who is staying
    pub visitor_name: VisitorName,

    /// How to reach the visitor
    pub visitor_phone: Phone,

    /// First night of the stay
    pub start: NaiveDate,

    /// Last day of the stay
    pub end: NaiveDate,
}

impl Booking {
    /// Create a booking from already parsed dates.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BookingRange` if `start` is after `end`.
    pub fn new(
        visitor_name: VisitorName,
        visitor_phone: Phone,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if !Self::is_valid_range(start, end) {
            return Err(ValidationError::BookingRange);
        }
        Ok(Self {
            visitor_name,
            visitor_phone,
            start,
            end,
        })
    }

    /// Create a booking from raw `DDMMYY` date strings.
    ///
    /// Both dates must parse before the range is checked, so a malformed date
    /// always reports `BookingDateFormat` even if the range is also wrong.
    pub fn from_raw_dates(
        visitor_name: VisitorName,
        visitor_phone: Phone,
        start: &str,
        end: &str,
    ) -> Result<Self, ValidationError> {
        let start = parse_booking_date(start)?;
        let end = parse_booking_date(end)?;
        Self::new(visitor_name, visitor_phone, start, end)
    }

    /// Returns true if a booking may run from `start` to `end`.
    pub fn is_valid_range(start: NaiveDate, end: NaiveDate) -> bool {
        start <= end
    }

    /// Returns true if the two bookings share at least one day.
    pub fn overlaps(&self, other: &Booking) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) from {} to {}",
            self.visitor_name,
            self.visitor_phone,
            self.start.format(DISPLAY_DATE_FORMAT),
            self.end.format(DISPLAY_DATE_FORMAT)
        )
    }
}

/// Parse a `DDMMYY` date in the 2000s.
///
/// Any failure collapses into `ValidationError::BookingDateFormat`.
pub fn parse_booking_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::BookingDateFormat);
    }

    let field = |range: std::ops::Range<usize>| -> Result<u32, ValidationError> {
        raw[range]
            .parse::<u32>()
            .map_err(|_| ValidationError::BookingDateFormat)
    };
    let day = field(0..2)?;
    let month = field(2..4)?;
    let year = field(4..6)?;

    // `year` is at most 99, so the cast cannot truncate
    NaiveDate::from_ymd_opt(2000 + year as i32, month, day)
        .ok_or(ValidationError::BookingDateFormat)
}
