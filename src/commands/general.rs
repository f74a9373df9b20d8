//! Commands that take no arguments.

use super::CommandResult;
use crate::repositories::{ResidenceFilter, ResidenceRepository};

pub const LIST_COMMAND_WORD: &str = "list";
pub const LIST_MESSAGE_USAGE: &str = "list: Lists all residences.";

pub const CLEAR_COMMAND_WORD: &str = "clear";
pub const CLEAR_MESSAGE_USAGE: &str = "clear: Deletes every residence from the residence tracker.";

pub const HELP_COMMAND_WORD: &str = "help";
pub const HELP_MESSAGE_USAGE: &str = "help: Shows usage for every command.\nExample: help";

pub const EXIT_COMMAND_WORD: &str = "exit";
pub const EXIT_MESSAGE_USAGE: &str = "exit: Exits the program.";

pub fn list(repo: &mut dyn ResidenceRepository) -> CommandResult {
    repo.update_filter(ResidenceFilter::All);
    CommandResult::new("Listed all residences")
}

pub fn clear(repo: &mut dyn ResidenceRepository) -> CommandResult {
    repo.clear();
    CommandResult::new("Residence tracker has been cleared!")
}

pub fn help() -> CommandResult {
    CommandResult::new(super::all_usages().join("\n\n"))
}

pub fn exit() -> CommandResult {
    CommandResult::exit("Exiting Residence Tracker as requested ...")
}
