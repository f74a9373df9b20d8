//! Sample residences shared by the integration tests.

#![allow(dead_code)]

use residence_tracker::domain::{
    CleanStatusTag, Email, Phone, ResidenceAddress, ResidenceName, Tag, VisitorName,
};
use residence_tracker::models::{Booking, Residence};

/// Build a residence from raw strings, panicking on invalid input.
pub fn sample_residence(
    name: &str,
    address: &str,
    clean: Option<&str>,
    tags: &[&str],
) -> Residence {
    Residence::new(
        ResidenceName::new(name).unwrap(),
        ResidenceAddress::new(address).unwrap(),
        Phone::new("98765432").unwrap(),
        Email::new("owner@example.com").unwrap(),
        clean
            .map(|c| CleanStatusTag::new(c).unwrap())
            .into_iter()
            .collect(),
        tags.iter().map(|t| Tag::new(t).unwrap()).collect(),
    )
}

/// Build a booking from raw `DDMMYY` dates.
pub fn sample_booking(visitor: &str, start: &str, end: &str) -> Booking {
    Booking::from_raw_dates(
        VisitorName::new(visitor).unwrap(),
        Phone::new("91234567").unwrap(),
        start,
        end,
    )
    .unwrap()
}

pub fn seaside_villa() -> Residence {
    sample_residence(
        "Seaside Villa",
        "1 Beach Road",
        Some("y"),
        &["friends", "owesMoney"],
    )
}

pub fn city_loft() -> Residence {
    let mut loft = sample_residence("City Loft", "22 Main Street", Some("n"), &[]);
    loft.bookings.push(sample_booking("Jane Tan", "010125", "050125"));
    loft
}

pub fn hill_cottage() -> Residence {
    sample_residence("Hill Cottage", "5 Hill Road", None, &["quiet"])
}

/// Three residences in a fixed order.
pub fn typical_residences() -> Vec<Residence> {
    vec![seaside_villa(), city_loft(), hill_cottage()]
}
