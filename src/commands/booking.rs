//! Commands that add or remove bookings on a residence.

use super::{resolve_residence, CommandResult};
use crate::domain::Index;
use crate::error::{CommandError, ExecuteResult};
use crate::models::Booking;
use crate::repositories::ResidenceRepository;

pub const ADD_COMMAND_WORD: &str = "book";

pub const ADD_MESSAGE_USAGE: &str = "book: Adds a booking to the residence identified \
by the index number used in the displayed residence list.\n\
Parameters: INDEX (must be a positive integer) n/VISITOR_NAME p/VISITOR_PHONE b/START_DATE END_DATE\n\
Dates are in DDMMYY format.\n\
Example: book 1 n/Jane Tan p/91234567 b/010125 050125";

pub const DELETE_COMMAND_WORD: &str = "unbook";

pub const DELETE_MESSAGE_USAGE: &str = "unbook: Deletes a booking of the residence identified \
by the index number used in the displayed residence list.\n\
Parameters: RESIDENCE_INDEX BOOKING_INDEX (both must be positive integers)\n\
Example: unbook 1 2";

/// Attaches a booking to the residence at a position of the filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBookingCommand {
    residence_index: Index,
    booking: Booking,
}

impl AddBookingCommand {
    pub fn new(residence_index: Index, booking: Booking) -> Self {
        Self {
            residence_index,
            booking,
        }
    }

    pub fn execute(&self, repo: &mut dyn ResidenceRepository) -> ExecuteResult<CommandResult> {
        let target = resolve_residence(repo, self.residence_index)?;

        if target.bookings.iter().any(|b| b.overlaps(&self.booking)) {
            return Err(CommandError::OverlappingBooking);
        }

        let updated = target.with_booking(self.booking.clone());
        repo.set_residence(&target, updated)?;
        Ok(CommandResult::new(format!(
            "New booking added to {}: {}",
            target.name, self.booking
        )))
    }
}

/// Removes one booking from the residence at a position of the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteBookingCommand {
    residence_index: Index,
    booking_index: Index,
}

impl DeleteBookingCommand {
    pub fn new(residence_index: Index, booking_index: Index) -> Self {
        Self {
            residence_index,
            booking_index,
        }
    }

    pub fn execute(&self, repo: &mut dyn ResidenceRepository) -> ExecuteResult<CommandResult> {
        let target = resolve_residence(repo, self.residence_index)?;

        let removed = target
            .bookings
            .get(self.booking_index.zero_based())
            .cloned()
            .ok_or(CommandError::InvalidBookingIndex)?;
        let updated = target
            .without_booking(self.booking_index.zero_based())
            .ok_or(CommandError::InvalidBookingIndex)?;

        repo.set_residence(&target, updated)?;
        Ok(CommandResult::new(format!(
            "Deleted booking from {}: {}",
            target.name, removed
        )))
    }
}
