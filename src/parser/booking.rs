use super::syntax::{PREFIX_BOOKING_DETAILS, PREFIX_NAME, PREFIX_PHONE};
use super::tokenizer::tokenize;
use super::util::{parse_booking, parse_index, parse_two_indices};
use crate::commands::booking::{ADD_MESSAGE_USAGE, DELETE_MESSAGE_USAGE};
use crate::commands::{AddBookingCommand, DeleteBookingCommand};
use crate::error::{ParseError, ParseResult};

/// Parse the arguments of `book` into an [`AddBookingCommand`].
///
/// `b/` carries both dates separated by whitespace.
pub fn parse_add_booking(args: &str) -> ParseResult<AddBookingCommand> {
    let usage = || ParseError::InvalidFormat(ADD_MESSAGE_USAGE.to_string());

    let map = tokenize(args, &[PREFIX_NAME, PREFIX_PHONE, PREFIX_BOOKING_DETAILS]);
    let index = parse_index(map.preamble()).map_err(|_| usage())?;

    let (Some(name), Some(phone), Some(details)) = (
        map.get_value(&PREFIX_NAME),
        map.get_value(&PREFIX_PHONE),
        map.get_value(&PREFIX_BOOKING_DETAILS),
    ) else {
        return Err(usage());
    };

    let dates: Vec<&str> = details.split_whitespace().collect();
    let [start, end] = dates.as_slice() else {
        return Err(usage());
    };

    let booking = parse_booking(name, phone, start, end)?;
    Ok(AddBookingCommand::new(index, booking))
}

/// Parse the arguments of `unbook` into a [`DeleteBookingCommand`].
pub fn parse_delete_booking(args: &str) -> ParseResult<DeleteBookingCommand> {
    let (residence_index, booking_index) = parse_two_indices(args)
        .map_err(|_| ParseError::InvalidFormat(DELETE_MESSAGE_USAGE.to_string()))?;
    Ok(DeleteBookingCommand::new(residence_index, booking_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Index, ValidationError};

    #[test]
    fn test_parse_add_booking() {
        assert!(parse_add_booking(" 1 n/Jane Tan p/91234567 b/010125 050125").is_ok());
    }

    #[test]
    fn test_add_booking_structure_errors() {
        let usage = Err(ParseError::InvalidFormat(ADD_MESSAGE_USAGE.to_string()));
        assert_eq!(parse_add_booking(" n/Jane p/91234567 b/010125 050125"), usage);
        assert_eq!(parse_add_booking(" 1 p/91234567 b/010125 050125"), usage);
        assert_eq!(parse_add_booking(" 1 n/Jane p/91234567 b/010125"), usage);
        assert_eq!(parse_add_booking(" 1 n/Jane p/91234567 b/010125 050125 060125"), usage);
    }

    #[test]
    fn test_add_booking_date_errors() {
        assert_eq!(
            parse_add_booking(" 1 n/Jane p/91234567 b/32/13/24 050125"),
            Err(ParseError::Validation(ValidationError::BookingDateFormat))
        );
        assert_eq!(
            parse_add_booking(" 1 n/Jane p/91234567 b/010125 32/13/24"),
            Err(ParseError::Validation(ValidationError::BookingDateFormat))
        );
        assert_eq!(
            parse_add_booking(" 1 n/Jane p/91234567 b/050125 010125"),
            Err(ParseError::Validation(ValidationError::BookingRange))
        );
    }

    #[test]
    fn test_parse_delete_booking() {
        assert_eq!(
            parse_delete_booking(" 1 2"),
            Ok(DeleteBookingCommand::new(
                Index::from_zero_based(0),
                Index::from_zero_based(1)
            ))
        );
        assert_eq!(
            parse_delete_booking(" 1"),
            Err(ParseError::InvalidFormat(DELETE_MESSAGE_USAGE.to_string()))
        );
    }
}
