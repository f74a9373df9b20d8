use super::CommandResult;
use crate::error::{CommandError, ExecuteResult};
use crate::models::Residence;
use crate::repositories::ResidenceRepository;

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add: Adds a residence to the residence tracker. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [clean/y or n] [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
clean/y t/friends t/owesMoney";

/// Adds a residence to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: Residence,
}

impl AddCommand {
    pub fn new(residence: Residence) -> Self {
        Self { to_add: residence }
    }

    pub fn residence(&self) -> &Residence {
        &self.to_add
    }

    pub fn execute(&self, repo: &mut dyn ResidenceRepository) -> ExecuteResult<CommandResult> {
        if repo.has_residence(&self.to_add) {
            return Err(CommandError::DuplicateResidence);
        }

        repo.add_residence(self.to_add.clone())?;
        Ok(CommandResult::new(format!(
            "New residence added: {}",
            self.to_add
        )))
    }
}
