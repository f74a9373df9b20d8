//! Helpers shared by the per-command parsers.

use crate::domain::{CleanStatusTag, Index, Phone, Tag, VisitorName};
use crate::error::{ParseError, ParseResult};
use crate::models::Booking;
use std::collections::BTreeSet;

/// Parse a one-based index, trimming surrounding whitespace.
///
/// Only plain decimal digits are accepted, so `+1`, `-1`, `0` and `1 2`
/// all fail with `ParseError::InvalidIndex`.
pub fn parse_index(one_based: &str) -> ParseResult<Index> {
    let trimmed = one_based.trim();
    if !is_non_zero_unsigned_integer(trimmed) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Parse exactly two whitespace-separated one-based indices.
pub fn parse_two_indices(args: &str) -> ParseResult<(Index, Index)> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    match parts.as_slice() {
        [first, second] => Ok((parse_index(first)?, parse_index(second)?)),
        _ => Err(ParseError::InvalidIndex),
    }
}

fn is_non_zero_unsigned_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && s.bytes().any(|b| b != b'0')
}

/// Parse every raw tag into a set, failing on the first invalid one.
pub fn parse_tags<S: AsRef<str>>(tags: &[S]) -> ParseResult<BTreeSet<Tag>> {
    tags.iter()
        .map(|tag| Tag::new(tag.as_ref()).map_err(ParseError::from))
        .collect()
}

/// Parse every raw clean status into a set, failing on the first invalid one.
pub fn parse_clean_statuses<S: AsRef<str>>(statuses: &[S]) -> ParseResult<BTreeSet<CleanStatusTag>> {
    statuses
        .iter()
        .map(|status| CleanStatusTag::new(status.as_ref()).map_err(ParseError::from))
        .collect()
}

/// Build a booking from raw visitor details and `DDMMYY` dates.
pub fn parse_booking(
    visitor_name: &str,
    visitor_phone: &str,
    start: &str,
    end: &str,
) -> ParseResult<Booking> {
    let visitor_name = VisitorName::new(visitor_name)?;
    let visitor_phone = Phone::new(visitor_phone)?;
    Ok(Booking::from_raw_dates(
        visitor_name,
        visitor_phone,
        start,
        end,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_parse_index_valid() {
        assert_eq!(parse_index("1").unwrap().zero_based(), 0);
        assert_eq!(parse_index("  10  ").unwrap().one_based(), 10);
        assert_eq!(parse_index("007").unwrap().one_based(), 7);
    }

    #[test]
    fn test_parse_index_invalid() {
        for raw in ["", "0", "000", "-1", "+1", "a", "1 2", "1.0", "99999999999999999999999"] {
            assert_eq!(parse_index(raw), Err(ParseError::InvalidIndex), "{raw:?}");
        }
    }

    #[test]
    fn test_parse_two_indices() {
        let (first, second) = parse_two_indices(" 2  3 ").unwrap();
        assert_eq!((first.one_based(), second.one_based()), (2, 3));
        assert!(parse_two_indices("2").is_err());
        assert!(parse_two_indices("2 3 4").is_err());
        assert!(parse_two_indices("2 0").is_err());
    }

    #[test]
    fn test_parse_tags_deduplicates() {
        let tags = parse_tags(&["friends", "friends", "family"]).unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_parse_tags_fails_on_first_invalid() {
        assert_eq!(
            parse_tags(&["friends", "#bad"]),
            Err(ParseError::Validation(ValidationError::InvalidTag))
        );
    }

    #[test]
    fn test_parse_booking_validates_visitor_before_dates() {
        assert_eq!(
            parse_booking("Jane*", "91234567", "bad", "bad"),
            Err(ParseError::Validation(ValidationError::InvalidName))
        );
        assert_eq!(
            parse_booking("Jane", "91234567", "32/13/24", "010125"),
            Err(ParseError::Validation(ValidationError::BookingDateFormat))
        );
    }
}
