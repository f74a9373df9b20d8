use super::CommandResult;
use crate::error::ExecuteResult;
use crate::repositories::{ResidenceFilter, ResidenceRepository};

pub const COMMAND_WORD: &str = "find";

pub const MESSAGE_USAGE: &str = "find: Finds all residences whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find villa loft";

/// Narrows the filtered view to residences matching any keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn execute(&self, repo: &mut dyn ResidenceRepository) -> ExecuteResult<CommandResult> {
        repo.update_filter(ResidenceFilter::NameContainsKeywords(self.keywords.clone()));
        let shown = repo.filtered_residences().len();
        Ok(CommandResult::new(format!("{} residences listed!", shown)))
    }
}
