//! Commands and the action history.
//!
//! A `Command` is one participant's intent during play. The command layer
//! decodes its wire messages into commands and hands `(actor, command)`
//! pairs to `GameSession::apply`. Accepted commands are recorded as
//! `ActionRecord`s for replay and debugging.

use serde::{Deserialize, Serialize};

use super::participant::Ballot;
use crate::rules::ExecutivePower;

/// An in-game intent, issued by a named actor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    /// President proposes a chancellor.
    Nominate { nominee: String },

    /// Vote on the proposed government.
    Vote { ballot: Ballot },

    /// Tally the votes once everyone living has voted.
    ResolveElection,

    /// President discards one of the three drawn cards.
    Discard { index: usize },

    /// Chancellor enacts one of the two remaining cards.
    Enact { index: usize },

    /// President uses the unlocked executive power.
    Executive {
        power: ExecutivePower,
        #[serde(default)]
        target: Option<String>,
    },

    /// Acknowledge the current screen.
    Ready,
}

/// A recorded command with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The participant who issued the command.
    pub actor: String,

    /// The command that was accepted.
    pub command: Command,

    /// Round number when the command was accepted (starts at 1).
    pub round: u32,

    /// Sequence number within the round (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(actor: impl Into<String>, command: Command, round: u32, sequence: u32) -> Self {
        Self {
            actor: actor.into(),
            command,
            round,
            sequence,
        }
    }
}
