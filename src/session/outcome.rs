//! What an accepted operation reports back to the command layer.

use serde::{Deserialize, Serialize};

use crate::cards::{Hand, Policy};
use crate::core::{Phase, Team};
use crate::rules::{ExecutivePower, PowerToken, Victory};

/// Result of an accepted operation: what happened and where the session is now.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Phase after the operation.
    pub phase: Phase,

    pub event: Event,

    /// Set when this operation decided the game.
    pub winner: Option<Victory>,
}

impl Outcome {
    pub(crate) fn new(phase: Phase, event: Event, winner: Option<Victory>) -> Self {
        Self {
            phase,
            event,
            winner,
        }
    }
}

/// The state change an operation made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    ParticipantJoined {
        name: String,
    },
    ParticipantLeft {
        name: String,
    },
    ParticipantReady {
        name: String,
        /// Every living seat was ready; the flags have been cleared.
        all_ready: bool,
    },
    GameStarted {
        president: String,
    },
    ChancellorNominated {
        president: String,
        chancellor: String,
    },
    VoteCast {
        voter: String,
        /// Living participants still to vote.
        outstanding: usize,
    },
    ElectionPassed {
        president: String,
        chancellor: String,
    },
    ElectionFailed {
        /// Consecutive failures after this one (0 if the tracker just fired).
        tracker: u8,
        /// Policy force-enacted by the third consecutive failure.
        forced_policy: Option<Policy>,
    },
    PolicyDiscarded {
        president: String,
    },
    PolicyEnacted {
        policy: Policy,
        /// Executive power unlocked by this enactment.
        power: Option<PowerToken>,
    },
    PowerResolved {
        power: ExecutivePower,
        target: Option<String>,
    },
}

/// The most recently resolved executive power. Public knowledge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutiveAction {
    pub power: ExecutivePower,
    pub target: Option<String>,
}

/// What an investigation revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionReport {
    pub target: String,
    /// `Fascist` for both fascists and Hitler.
    pub team: Team,
}

/// Private knowledge held for exactly one participant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Disclosure {
    Inspection {
        recipient: String,
        report: InspectionReport,
    },
    Peek {
        recipient: String,
        cards: Hand,
    },
}
