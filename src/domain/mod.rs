//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a residence and its bookings.
//! Each constructor trims its input and validates it, so an invalid value
//! can never be represented once constructed.

pub mod address;
pub mod email;
pub mod errors;
pub mod index;
pub mod name;
pub mod phone;
pub mod tag;

pub use address::ResidenceAddress;
pub use email::Email;
pub use errors::ValidationError;
pub use index::Index;
pub use name::{ResidenceName, VisitorName};
pub use phone::Phone;
pub use tag::{CleanStatusTag, Tag};
