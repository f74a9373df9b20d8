//! Residence model, the aggregate root of the tracker.

use super::booking::Booking;
use crate::domain::{CleanStatusTag, Email, Phone, ResidenceAddress, ResidenceName, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A tracked residence with its contact details and bookings.
///
/// `PartialEq` compares every field. Duplicate detection uses the weaker
/// [`Residence::is_same_residence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Residence {
    pub name: ResidenceName,
    pub address: ResidenceAddress,
    pub phone: Phone,
    pub email: Email,

    /// Zero or one entries in practice
    #[serde(default)]
    pub clean_status: BTreeSet<CleanStatusTag>,

    #[serde(default)]
    pub tags: BTreeSet<Tag>,

    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl Residence {
    /// Create a residence with no bookings.
    pub fn new(
        name: ResidenceName,
        address: ResidenceAddress,
        phone: Phone,
        email: Email,
        clean_status: BTreeSet<CleanStatusTag>,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            address,
            phone,
            email,
            clean_status,
            tags,
            bookings: Vec::new(),
        }
    }

    /// Returns true if both residences have the same name and address.
    pub fn is_same_residence(&self, other: &Residence) -> bool {
        self.name == other.name && self.address == other.address
    }

    /// Returns true only when the residence is explicitly marked clean.
    pub fn is_clean(&self) -> bool {
        self.clean_status.contains(&CleanStatusTag::Clean)
            && !self.clean_status.contains(&CleanStatusTag::Dirty)
    }

    /// A copy of this residence with `booking` appended.
    pub fn with_booking(&self, booking: Booking) -> Residence {
        let mut updated = self.clone();
        updated.bookings.push(booking);
        updated
    }

    /// A copy of this residence without the booking at zero-based `index`.
    ///
    /// Returns `None` if there is no such booking.
    pub fn without_booking(&self, index: usize) -> Option<Residence> {
        if index >= self.bookings.len() {
            return None;
        }
        let mut updated = self.clone();
        updated.bookings.remove(index);
        Some(updated)
    }
}

impl fmt::Display for Residence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Address: {}; Phone: {}; Email: {}",
            self.name, self.address, self.phone, self.email
        )?;

        let status = if self.clean_status.is_empty() {
            "Unset".to_string()
        } else {
            self.clean_status
                .iter()
                .map(CleanStatusTag::label)
                .collect::<Vec<_>>()
                .join("/")
        };
        write!(f, "; Clean Status: {}", status)?;

        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{}]", tag)?;
            }
        }

        if !self.bookings.is_empty() {
            write!(f, "; Bookings: {}", self.bookings.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residence(name: &str, address: &str, tags: &[&str]) -> Residence {
        Residence::new(
            ResidenceName::new(name).unwrap(),
            ResidenceAddress::new(address).unwrap(),
            Phone::new("98765432").unwrap(),
            Email::new("johnd@example.com").unwrap(),
            BTreeSet::new(),
            tags.iter().map(|t| Tag::new(t).unwrap()).collect(),
        )
    }

    #[test]
    fn test_same_residence_ignores_other_fields() {
        let a = residence("Seaside Villa", "1 Beach Road", &["friends"]);
        let mut b = residence("Seaside Villa", "1 Beach Road", &[]);
        b.phone = Phone::new("11111111").unwrap();
        assert!(a.is_same_residence(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_name_different_address_is_distinct() {
        let a = residence("Seaside Villa", "1 Beach Road", &[]);
        let b = residence("Seaside Villa", "2 Beach Road", &[]);
        assert!(!a.is_same_residence(&b));
    }

    #[test]
    fn test_is_clean() {
        let mut r = residence("Loft", "3 Hill St", &[]);
        assert!(!r.is_clean());
        r.clean_status.insert(CleanStatusTag::Clean);
        assert!(r.is_clean());
    }

    #[test]
    fn test_without_booking_out_of_range() {
        let r = residence("Loft", "3 Hill St", &[]);
        assert!(r.without_booking(0).is_none());
    }

    #[test]
    fn test_display() {
        let mut r = residence("Loft", "3 Hill St", &["owesMoney", "friends"]);
        r.clean_status.insert(CleanStatusTag::Clean);
        assert_eq!(
            r.to_string(),
            "Loft; Address: 3 Hill St; Phone: 98765432; Email: johnd@example.com; \
             Clean Status: Clean; Tags: [friends][owesMoney]"
        );
    }
}
