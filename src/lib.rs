//! # hidden-council
//!
//! Authoritative rules engine for a hidden-role social-deduction game for
//! 5-10 participants.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: a `GameSession` is the only thing that mutates game
//!    state. The transport layer sends commands in and reads views out.
//!
//! 2. **All-or-Nothing Operations**: an operation that returns `Err`
//!    changed nothing. Fallible work (deck draws) runs before any commit.
//!
//! 3. **Information Asymmetry**: every participant gets a different
//!    `ProjectedView` of the same session, and private results are
//!    delivered only to the participant who earned them.
//!
//! 4. **Deterministic When Seeded**: all randomness flows through
//!    `GameRng`, so a seeded session replays identically.
//!
//! ## Modules
//!
//! - `core`: participants, roles, phases, commands, RNG, configuration, errors
//! - `cards`: policy cards and the draw/discard deck
//! - `rules`: role distribution, executive powers, win conditions
//! - `session`: the `GameSession` aggregate, its phase operations, and bot seats
//! - `view`: per-participant projections
//! - `store`: thread-safe registry of live sessions
//!
//! ## Example
//!
//! ```
//! use hidden_council::{Ballot, GameSession, Phase, SessionConfig};
//!
//! let mut session = GameSession::new("table-1", SessionConfig::new().with_seed(7));
//! for name in ["Alice", "Bob", "Carol", "Dave", "Eve"] {
//!     session.add_participant(name).unwrap();
//! }
//! session.start_game().unwrap();
//!
//! session.nominate("Alice", "Bob").unwrap();
//! for name in ["Alice", "Bob", "Carol", "Dave", "Eve"] {
//!     session.vote(name, Ballot::Ja).unwrap();
//! }
//! let outcome = session.resolve_election().unwrap();
//!
//! assert_eq!(outcome.phase, Phase::Legislative);
//! assert_eq!(session.project("Alice").president_hand.map(|h| h.len()), Some(3));
//! assert_eq!(session.project("Carol").president_hand, None);
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Ballot, Command, ConfigError, GameError, GameRng, HouseRules, Participant, Phase,
    Role, SessionConfig, Team,
};

pub use crate::cards::{DeckError, Hand, Policy, PolicyDeck};

pub use crate::rules::{ExecutivePower, PowerToken, Victory, WinReason};

pub use crate::session::{
    BotPolicy, Event, ExecutiveAction, GameSession, InspectionReport, Outcome, RandomBot,
    RoleAwareBot, Turn,
};

pub use crate::view::{ParticipantView, ProjectedView};

pub use crate::store::{SessionId, SessionStore, SharedSession, StoreError};
