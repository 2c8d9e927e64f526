//! Policy cards.

use serde::{Deserialize, Serialize};

use crate::core::Team;

/// A policy card. Cards have no identity beyond their type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    Liberal,
    Fascist,
}

impl Policy {
    /// The team whose track this card advances.
    #[must_use]
    pub const fn team(self) -> Team {
        match self {
            Policy::Liberal => Team::Liberal,
            Policy::Fascist => Team::Fascist,
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Liberal => write!(f, "Liberal"),
            Policy::Fascist => write!(f, "Fascist"),
        }
    }
}
