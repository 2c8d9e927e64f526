//! Win conditions.
//!
//! Checked after every enactment and every execution, in order; the
//! first condition that holds decides the game:
//!
//! 1. 5 liberal policies: liberals win
//! 2. 6 fascist policies: fascists win
//! 3. 3+ fascist policies and Hitler is the sitting chancellor: fascists win
//! 4. Hitler has been executed: liberals win

use serde::{Deserialize, Serialize};

use crate::core::config::{
    FASCIST_POLICIES_TO_WIN, HITLER_CHANCELLOR_THRESHOLD, LIBERAL_POLICIES_TO_WIN,
};
use crate::core::Team;

/// Why a team won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    LiberalPolicies,
    FascistPolicies,
    HitlerElected,
    HitlerExecuted,
}

/// A decided game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Victory {
    pub team: Team,
    pub reason: WinReason,
}

impl Victory {
    #[must_use]
    pub const fn new(team: Team, reason: WinReason) -> Self {
        Self { team, reason }
    }
}

/// The facts the win check depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinCheck {
    pub liberal_policies: u8,
    pub fascist_policies: u8,
    /// Hitler is the nominated chancellor and holds the office this round.
    pub hitler_is_chancellor: bool,
    pub hitler_executed: bool,
}

/// Decide whether the game is over.
#[must_use]
pub fn evaluate(check: &WinCheck) -> Option<Victory> {
    if check.liberal_policies >= LIBERAL_POLICIES_TO_WIN {
        return Some(Victory::new(Team::Liberal, WinReason::LiberalPolicies));
    }
    if check.fascist_policies >= FASCIST_POLICIES_TO_WIN {
        return Some(Victory::new(Team::Fascist, WinReason::FascistPolicies));
    }
    if check.fascist_policies >= HITLER_CHANCELLOR_THRESHOLD && check.hitler_is_chancellor {
        return Some(Victory::new(Team::Fascist, WinReason::HitlerElected));
    }
    if check.hitler_executed {
        return Some(Victory::new(Team::Liberal, WinReason::HitlerExecuted));
    }
    None
}
