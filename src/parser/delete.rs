use super::util::parse_index;
use crate::commands::{delete::MESSAGE_USAGE, DeleteCommand};
use crate::error::{ParseError, ParseResult};

/// Parse the arguments of `delete` into a [`DeleteCommand`].
pub fn parse_delete(args: &str) -> ParseResult<DeleteCommand> {
    parse_index(args)
        .map(DeleteCommand::new)
        .map_err(|_| ParseError::InvalidFormat(MESSAGE_USAGE.to_string()))
}
