//! Per-participant projections of a session.
//!
//! Every participant sees a different rendering of the same state. The
//! `projector` decides what each viewer may know; this module holds the
//! serializable shapes the transport layer sends out.
//!
//! Private payloads (investigation results, peeks) never appear here.
//! They are fetched separately through `GameSession::inspection_result`
//! and `GameSession::deck_peek`.

pub mod projector;

pub use projector::{project, role_visible};

use serde::{Deserialize, Serialize};

use crate::cards::Policy;
use crate::core::{Ballot, Phase, Role};
use crate::rules::{PowerToken, Victory};
use crate::session::ExecutiveAction;

/// One seat as a given viewer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantView {
    pub name: String,
    pub alive: bool,
    pub executed: bool,
    pub is_president: bool,
    pub is_chancellor: bool,
    pub bot: bool,
    pub ready: bool,

    /// Whether this participant has voted in the current election.
    pub has_voted: bool,

    /// The ballot itself. Hidden from other viewers while voting is open.
    pub ballot: Option<Ballot>,

    /// Present only when the viewer is entitled to know it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// The whole session as a given viewer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedView {
    pub viewer: String,
    pub phase: Phase,
    pub game_started: bool,
    pub participants: Vec<ParticipantView>,

    pub liberal_policies: u8,
    pub fascist_policies: u8,
    pub election_tracker: u8,

    pub current_president: Option<String>,
    pub nominated_chancellor: Option<String>,
    pub last_president: Option<String>,
    pub last_chancellor: Option<String>,

    pub draw_pile_size: usize,
    pub discard_pile_size: usize,

    /// The president's three drawn cards, for the president only.
    pub president_hand: Option<Vec<Policy>>,

    /// The chancellor's two cards, for the nominated chancellor only.
    pub chancellor_hand: Option<Vec<Policy>>,

    pub pending_power: Option<PowerToken>,
    pub executive_action: Option<ExecutiveAction>,
    pub winner: Option<Victory>,
}

impl ProjectedView {
    /// Look up one seat by name.
    #[must_use]
    pub fn participant(&self, name: &str) -> Option<&ParticipantView> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Names whose roles this viewer can see, the viewer included.
    #[must_use]
    pub fn known_roles(&self) -> Vec<(&str, Role)> {
        self.participants
            .iter()
            .filter_map(|p| p.role.map(|role| (p.name.as_str(), role)))
            .collect()
    }
}
