//! Error types.
//!
//! Every rejected operation returns a `GameError` and leaves the session
//! untouched. Apart from `DeckExhausted`, every variant is a caller
//! precondition failure that is safe to retry with corrected input.

use thiserror::Error;

use super::phase::Phase;
use crate::cards::DeckError;
use crate::rules::ExecutivePower;

/// Why an operation on a session was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("operation requires phase {expected}, session is in {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("the game is over")]
    GameOver,

    #[error("the game has already started")]
    AlreadyStarted,

    #[error("the game has not started")]
    NotStarted,

    #[error("participant name must not be empty")]
    EmptyName,

    #[error("name {0:?} is already taken")]
    NameTaken(String),

    #[error("the table is full ({max} participants)")]
    TableFull { max: usize },

    #[error("a game needs {min}-{max} participants, have {count}")]
    InvalidParticipantCount { count: usize, min: usize, max: usize },

    #[error("no participant named {0:?}")]
    UnknownParticipant(String),

    #[error("participant {0:?} is dead")]
    DeadParticipant(String),

    #[error("{0:?} is not the presiding president")]
    NotPresident(String),

    #[error("{0:?} is not the nominated chancellor")]
    NotChancellor(String),

    #[error("the president cannot nominate themselves")]
    SelfNomination,

    #[error("{0:?} was the last elected chancellor and is term-limited")]
    TermLimited(String),

    #[error("no chancellor has been nominated")]
    NoNomination,

    #[error("{outstanding} living participants have not voted")]
    VotesOutstanding { outstanding: usize },

    #[error("there is no hand to play from")]
    EmptyHand,

    #[error("card index {index} out of range for a hand of {hand_size}")]
    InvalidCardIndex { index: usize, hand_size: usize },

    #[error("executive power {0:?} is not available")]
    PowerNotAvailable(ExecutivePower),

    #[error("executive power {0:?} requires a target")]
    MissingTarget(ExecutivePower),

    #[error("deck bookkeeping violated: {0}")]
    DeckExhausted(#[from] DeckError),
}

impl GameError {
    /// True for errors that indicate a bug rather than a bad request.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, GameError::DeckExhausted(_))
    }
}

/// Failed to load a `SessionConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid session config: {0}")]
    Parse(#[from] toml::de::Error),
}
