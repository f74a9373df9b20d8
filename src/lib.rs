//! Residence Tracker - a command-line registry of residences and their bookings.
//!
//! Each line of input is a command such as
//! `add n/Seaside Villa p/98765432 e/owner@example.com a/1 Beach Road`.
//! It is tokenized, validated, turned into a [`Command`] and executed
//! against an in-memory [`ResidenceRepository`].
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone, email, tags)
//! - **models**: Residences and bookings
//! - **parser**: Prefix tokenizer and per-command parsers
//! - **commands**: Command execution and the edit merge
//! - **repositories**: Registry trait and in-memory store
//! - **shell**: Session loop over any async reader/writer
//! - **config** / **error**: Configuration and error types

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod parser;
pub mod repositories;
pub mod shell;

pub use commands::{Command, CommandResult, EditResidenceDescriptor};
pub use config::Config;
pub use error::{CommandError, ConfigError, ParseError, RegistryError, TrackerError};
pub use models::{Booking, Residence};
pub use parser::parse_command;
pub use repositories::{InMemoryResidenceRepository, ResidenceFilter, ResidenceRepository};
