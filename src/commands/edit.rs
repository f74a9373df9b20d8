//! Edit command and the descriptor merge it relies on.

use super::{resolve_residence, CommandResult};
use crate::domain::{CleanStatusTag, Index, ResidenceAddress, ResidenceName, Tag};
use crate::error::{CommandError, ExecuteResult};
use crate::models::Residence;
use crate::repositories::{ResidenceFilter, ResidenceRepository};
use std::collections::BTreeSet;

pub const COMMAND_WORD: &str = "edit";

pub const MESSAGE_USAGE: &str = "edit: Edits the details of the residence identified \
by the index number used in the displayed residence list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [a/ADDRESS] [clean/y or n] [t/TAG]...\n\
Example: edit 1 a/Blk 30 Geylang Street 29, #06-40 clean/n";

/// The fields an edit may overwrite. `None` leaves a field unchanged.
///
/// For the set-valued fields `Some(empty set)` clears the field, which is
/// different from `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditResidenceDescriptor {
    pub name: Option<ResidenceName>,
    pub address: Option<ResidenceAddress>,
    pub clean_status: Option<BTreeSet<CleanStatusTag>>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditResidenceDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one field is set.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.address.is_some()
            || self.clean_status.is_some()
            || self.tags.is_some()
    }
}

/// Overlay `descriptor` onto `original`, returning a new residence.
///
/// Phone, email and bookings are always carried over from `original`.
pub fn create_edited_residence(
    original: &Residence,
    descriptor: &EditResidenceDescriptor,
) -> Residence {
    Residence {
        name: descriptor.name.clone().unwrap_or_else(|| original.name.clone()),
        address: descriptor
            .address
            .clone()
            .unwrap_or_else(|| original.address.clone()),
        phone: original.phone.clone(),
        email: original.email.clone(),
        clean_status: descriptor
            .clean_status
            .clone()
            .unwrap_or_else(|| original.clean_status.clone()),
        tags: descriptor
            .tags
            .clone()
            .unwrap_or_else(|| original.tags.clone()),
        bookings: original.bookings.clone(),
    }
}

/// Replaces the residence at a position of the filtered view with an edited
/// copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditResidenceDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditResidenceDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn descriptor(&self) -> &EditResidenceDescriptor {
        &self.descriptor
    }

    pub fn execute(&self, repo: &mut dyn ResidenceRepository) -> ExecuteResult<CommandResult> {
        let target = resolve_residence(repo, self.index)?;

        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::NotEdited);
        }

        let edited = create_edited_residence(&target, &self.descriptor);
        if !target.is_same_residence(&edited) && repo.has_residence(&edited) {
            return Err(CommandError::DuplicateResidence);
        }

        repo.set_residence(&target, edited.clone())?;
        repo.update_filter(ResidenceFilter::All);
        Ok(CommandResult::new(format!("Edited Residence: {}", edited)))
    }
}
