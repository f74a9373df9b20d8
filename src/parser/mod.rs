//! Turns a line of user input into a [`Command`].
//!
//! The first whitespace-separated word selects the command; the rest of
//! the line, including its leading space, goes to that command's parser.
//! Parsers never touch the registry.

mod add;
mod booking;
mod delete;
mod edit;
mod find;
pub mod syntax;
pub mod tokenizer;
pub mod util;

pub use add::parse_add;
pub use booking::{parse_add_booking, parse_delete_booking};
pub use delete::parse_delete;
pub use edit::parse_edit;
pub use find::parse_find;
pub use syntax::Prefix;
pub use tokenizer::{tokenize, ArgumentMultimap};

use crate::commands::{self as cmd, general, Command};
use crate::error::{ParseError, ParseResult};

/// Parse one line of user input.
///
/// # Errors
///
/// - `InvalidFormat` with the help usage for blank input
/// - `UnknownCommand` for an unrecognised command word
/// - whatever the command's own parser reports otherwise
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat(
            general::HELP_MESSAGE_USAGE.to_string(),
        ));
    }

    let (word, args) = trimmed
        .find(char::is_whitespace)
        .map_or((trimmed, ""), |i| trimmed.split_at(i));

    tracing::trace!(command = word, "Parsing command");

    match word {
        cmd::add::COMMAND_WORD => parse_add(args).map(Command::Add),
        cmd::edit::COMMAND_WORD => parse_edit(args).map(Command::Edit),
        cmd::delete::COMMAND_WORD => parse_delete(args).map(Command::Delete),
        cmd::booking::ADD_COMMAND_WORD => parse_add_booking(args).map(Command::AddBooking),
        cmd::booking::DELETE_COMMAND_WORD => parse_delete_booking(args).map(Command::DeleteBooking),
        cmd::find::COMMAND_WORD => parse_find(args).map(Command::Find),
        general::LIST_COMMAND_WORD => Ok(Command::List),
        general::CLEAR_COMMAND_WORD => Ok(Command::Clear),
        general::HELP_COMMAND_WORD => Ok(Command::Help),
        general::EXIT_COMMAND_WORD => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand),
    }
}
