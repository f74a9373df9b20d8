use super::syntax::{
    Prefix, PREFIX_ADDRESS, PREFIX_CLEAN_STATUS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_TAG,
};
use super::tokenizer::tokenize;
use super::util::{parse_clean_statuses, parse_tags};
use crate::commands::{add::MESSAGE_USAGE, AddCommand};
use crate::domain::{Email, Phone, ResidenceAddress, ResidenceName};
use crate::error::{ParseError, ParseResult};
use crate::models::Residence;
use std::collections::BTreeSet;

/// Parse the arguments of `add` into an [`AddCommand`].
///
/// `clean/` is optional and the last occurrence wins; without it the
/// residence has no clean status. `t/` may repeat.
pub fn parse_add(args: &str) -> ParseResult<AddCommand> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_CLEAN_STATUS,
            PREFIX_TAG,
        ],
    );

    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    if !map.contains_all(&required) || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(MESSAGE_USAGE.to_string()));
    }

    let value = |prefix: Prefix| map.get_value(&prefix).unwrap_or_default();
    let name = ResidenceName::new(value(PREFIX_NAME))?;
    let phone = Phone::new(value(PREFIX_PHONE))?;
    let email = Email::new(value(PREFIX_EMAIL))?;
    let address = ResidenceAddress::new(value(PREFIX_ADDRESS))?;

    let clean_status = match map.get_value(&PREFIX_CLEAN_STATUS) {
        Some(status) => parse_clean_statuses(&[status])?,
        None => BTreeSet::new(),
    };
    let tags = match map.get_all_values(&PREFIX_TAG) {
        Some(tags) => parse_tags(tags)?,
        None => BTreeSet::new(),
    };

    Ok(AddCommand::new(Residence::new(
        name,
        address,
        phone,
        email,
        clean_status,
        tags,
    )))
}
