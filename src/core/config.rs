//! Session configuration and fixed rule constants.
//!
//! Sessions are configured at creation by providing a `SessionConfig`:
//! - Optional RNG seed (reproducible games for tests and replays)
//! - `HouseRules`: optional rule variants
//!
//! Configs can be built in code or parsed from TOML:
//!
//! ```
//! use hidden_council::core::SessionConfig;
//!
//! let config = SessionConfig::from_toml_str(r#"
//!     seed = 7
//!
//!     [rules]
//!     show_role_on_death = true
//! "#).unwrap();
//!
//! assert_eq!(config.seed, Some(7));
//! assert!(config.rules.show_role_on_death);
//! assert!(!config.rules.random_first_president);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::rng::GameRng;

/// Smallest table that can start a game.
pub const MIN_PARTICIPANTS: usize = 5;

/// Largest table; joins beyond this are rejected.
pub const MAX_PARTICIPANTS: usize = 10;

/// Liberal cards in a fresh deck.
pub const LIBERAL_POLICY_COUNT: usize = 6;

/// Fascist cards in a fresh deck.
pub const FASCIST_POLICY_COUNT: usize = 11;

/// Total cards in play for the whole game.
pub const TOTAL_POLICY_COUNT: usize = LIBERAL_POLICY_COUNT + FASCIST_POLICY_COUNT;

/// Liberal policies needed for a liberal win.
pub const LIBERAL_POLICIES_TO_WIN: u8 = 5;

/// Fascist policies needed for a fascist win.
pub const FASCIST_POLICIES_TO_WIN: u8 = 6;

/// Fascist policies after which a sitting Hitler chancellor wins.
pub const HITLER_CHANCELLOR_THRESHOLD: u8 = 3;

/// Consecutive failed elections that force the top policy.
pub const ELECTION_TRACKER_LIMIT: u8 = 3;

/// Cards drawn by the president each legislative session.
pub const PRESIDENT_HAND_SIZE: usize = 3;

/// Cards revealed by a policy peek.
pub const PEEK_SIZE: usize = 3;

/// Tables with at most this many living participants ignore the
/// chancellor term limit.
pub const TERM_LIMIT_EXEMPT_TABLE: usize = 5;

/// Optional rule variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseRules {
    /// Reveal a dead participant's role to everyone.
    pub show_role_on_death: bool,

    /// Pick the first president at random instead of seat 0.
    pub random_first_president: bool,
}

/// Complete session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    pub rules: HouseRules,
}

impl SessionConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the house rules.
    #[must_use]
    pub fn with_rules(mut self, rules: HouseRules) -> Self {
        self.rules = rules;
        self
    }

    /// Build the session RNG this config describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
