//! Game phases.
//!
//! ```text
//! Lobby ──start──▶ Election ──nominate──▶ Voting ──pass──▶ Legislative
//!                     ▲                     │                  │
//!                     └────────fail─────────┘                  │ enact
//!                     ▲                                        ▼
//!                     └──────────resolve────────── Executive ◀─┘ (power unlocked)
//! ```
//!
//! Any enactment or execution may end the game in `GameOver`.

use serde::{Deserialize, Serialize};

/// The phase a session is in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting participants; roles not assigned.
    #[default]
    Lobby,
    /// Waiting for the presiding leader to nominate a chancellor.
    Election,
    /// Waiting for every living participant to vote.
    Voting,
    /// The elected pair is passing policy cards.
    Legislative,
    /// The presiding leader must use an unlocked executive power.
    Executive,
    /// A team has won. Terminal.
    GameOver,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Lobby => "Lobby",
            Phase::Election => "Election",
            Phase::Voting => "Voting",
            Phase::Legislative => "Legislative",
            Phase::Executive => "Executive",
            Phase::GameOver => "Game_Over",
        };
        f.write_str(name)
    }
}
