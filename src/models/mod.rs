//! Data models for the residence tracker.
//!
//! A [`Residence`] is the aggregate root; it owns its [`Booking`]s.

pub mod booking;
pub mod residence;

pub use booking::{parse_booking_date, Booking};
pub use residence::Residence;
