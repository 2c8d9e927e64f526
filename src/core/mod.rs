//! Core engine types: participants, phases, commands, RNG, configuration, errors.
//!
//! This module contains the building blocks every other module uses.
//! Rules live in `rules`, the aggregate in `session`.

pub mod action;
pub mod config;
pub mod error;
pub mod participant;
pub mod phase;
pub mod rng;

pub use action::{ActionRecord, Command};
pub use config::{HouseRules, SessionConfig};
pub use error::{ConfigError, GameError};
pub use participant::{Ballot, Participant, Role, Team};
pub use phase::Phase;
pub use rng::GameRng;
