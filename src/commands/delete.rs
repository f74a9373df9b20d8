use super::{resolve_residence, CommandResult};
use crate::domain::Index;
use crate::error::ExecuteResult;
use crate::repositories::ResidenceRepository;

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete: Deletes the residence identified by the index number \
used in the displayed residence list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

/// Removes the residence at a position of the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    target_index: Index,
}

impl DeleteCommand {
    pub fn new(target_index: Index) -> Self {
        Self { target_index }
    }

    pub fn execute(&self, repo: &mut dyn ResidenceRepository) -> ExecuteResult<CommandResult> {
        let target = resolve_residence(repo, self.target_index)?;
        repo.delete_residence(&target)?;
        Ok(CommandResult::new(format!("Deleted Residence: {}", target)))
    }
}
