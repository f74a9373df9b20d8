use super::syntax::{
    PREFIX_ADDRESS, PREFIX_BOOKING_DETAILS, PREFIX_CLEAN_STATUS, PREFIX_NAME, PREFIX_TAG,
};
use super::tokenizer::tokenize;
use super::util::{parse_clean_statuses, parse_index, parse_tags};
use crate::commands::{edit::MESSAGE_USAGE, EditCommand, EditResidenceDescriptor};
use crate::domain::{ResidenceAddress, ResidenceName};
use crate::error::{ParseError, ParseResult};
use std::collections::BTreeSet;

/// Parse the arguments of `edit` into an [`EditCommand`].
///
/// Booking details are recognised so they do not leak into another field's
/// value, but edit never applies them.
pub fn parse_edit(args: &str) -> ParseResult<EditCommand> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_ADDRESS,
            PREFIX_BOOKING_DETAILS,
            PREFIX_CLEAN_STATUS,
            PREFIX_TAG,
        ],
    );

    let index = parse_index(map.preamble())
        .map_err(|_| ParseError::InvalidFormat(MESSAGE_USAGE.to_string()))?;

    let mut descriptor = EditResidenceDescriptor::new();
    if let Some(name) = map.get_value(&PREFIX_NAME) {
        descriptor.name = Some(ResidenceName::new(name)?);
    }
    if let Some(address) = map.get_value(&PREFIX_ADDRESS) {
        descriptor.address = Some(ResidenceAddress::new(address)?);
    }
    if let Some(statuses) = map.get_all_values(&PREFIX_CLEAN_STATUS) {
        descriptor.clean_status = Some(if is_reset(statuses) {
            BTreeSet::new()
        } else {
            parse_clean_statuses(statuses)?
        });
    }
    if let Some(tags) = map.get_all_values(&PREFIX_TAG) {
        descriptor.tags = Some(if is_reset(tags) {
            BTreeSet::new()
        } else {
            parse_tags(tags)?
        });
    }

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }

    Ok(EditCommand::new(index, descriptor))
}

/// A single empty value clears a set-valued field.
fn is_reset(values: &[String]) -> bool {
    matches!(values, [only] if only.is_empty())
}
