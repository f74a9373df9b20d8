//! Executable commands.
//!
//! Parsing produces a [`Command`]; executing it against a
//! [`ResidenceRepository`] either yields a [`CommandResult`] or a
//! [`CommandError`](crate::error::CommandError) with the registry left
//! unchanged.

pub mod add;
pub mod booking;
pub mod delete;
pub mod edit;
pub mod find;
pub mod general;

pub use add::AddCommand;
pub use booking::{AddBookingCommand, DeleteBookingCommand};
pub use delete::DeleteCommand;
pub use edit::{create_edited_residence, EditCommand, EditResidenceDescriptor};
pub use find::FindCommand;

use crate::domain::Index;
use crate::error::{CommandError, ExecuteResult};
use crate::models::Residence;
use crate::repositories::ResidenceRepository;

/// Feedback from a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,

    /// The session should end after showing the feedback
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: true,
        }
    }
}

/// Every command the tracker understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    AddBooking(AddBookingCommand),
    DeleteBooking(DeleteBookingCommand),
    Find(FindCommand),
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    /// Apply the command to `repo`.
    pub fn execute(&self, repo: &mut dyn ResidenceRepository) -> ExecuteResult<CommandResult> {
        match self {
            Self::Add(cmd) => cmd.execute(repo),
            Self::Edit(cmd) => cmd.execute(repo),
            Self::Delete(cmd) => cmd.execute(repo),
            Self::AddBooking(cmd) => cmd.execute(repo),
            Self::DeleteBooking(cmd) => cmd.execute(repo),
            Self::Find(cmd) => cmd.execute(repo),
            Self::List => Ok(general::list(repo)),
            Self::Clear => Ok(general::clear(repo)),
            Self::Help => Ok(general::help()),
            Self::Exit => Ok(general::exit()),
        }
    }

    /// The command word that produces this command.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => add::COMMAND_WORD,
            Self::Edit(_) => edit::COMMAND_WORD,
            Self::Delete(_) => delete::COMMAND_WORD,
            Self::AddBooking(_) => booking::ADD_COMMAND_WORD,
            Self::DeleteBooking(_) => booking::DELETE_COMMAND_WORD,
            Self::Find(_) => find::COMMAND_WORD,
            Self::List => general::LIST_COMMAND_WORD,
            Self::Clear => general::CLEAR_COMMAND_WORD,
            Self::Help => general::HELP_COMMAND_WORD,
            Self::Exit => general::EXIT_COMMAND_WORD,
        }
    }
}

/// Usage text of every command, in help order.
pub fn all_usages() -> [&'static str; 10] {
    [
        add::MESSAGE_USAGE,
        edit::MESSAGE_USAGE,
        delete::MESSAGE_USAGE,
        booking::ADD_MESSAGE_USAGE,
        booking::DELETE_MESSAGE_USAGE,
        find::MESSAGE_USAGE,
        general::LIST_MESSAGE_USAGE,
        general::CLEAR_MESSAGE_USAGE,
        general::HELP_MESSAGE_USAGE,
        general::EXIT_MESSAGE_USAGE,
    ]
}

/// Look up the residence at `index` in the filtered view.
fn resolve_residence(repo: &dyn ResidenceRepository, index: Index) -> ExecuteResult<Residence> {
    repo.filtered_residences()
        .get(index.zero_based())
        .map(|r| (*r).clone())
        .ok_or(CommandError::InvalidResidenceIndex)
}
