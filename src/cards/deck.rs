//! The shared policy deck and its discard pile.
//!
//! ## Reshuffle Rule
//!
//! Whenever `n` cards are needed and the draw pile holds fewer than `n`,
//! the discard pile is emptied into the draw pile and the whole draw pile
//! is shuffled before the draw proceeds. If the combined pool is still
//! short the request fails and nothing moves.
//!
//! ## Usage
//!
//! ```
//! use hidden_council::cards::{Policy, PolicyDeck};
//! use hidden_council::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = PolicyDeck::standard(&mut rng);
//! assert_eq!(deck.len(), 17);
//!
//! let hand = deck.draw(3, &mut rng).unwrap();
//! assert_eq!(hand.len(), 3);
//! assert_eq!(deck.draw_pile_len(), 14);
//!
//! for card in hand {
//!     deck.discard(card);
//! }
//! assert_eq!(deck.discard_len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use super::policy::Policy;
use crate::core::config::{FASCIST_POLICY_COUNT, LIBERAL_POLICY_COUNT};
use crate::core::GameRng;

/// A handful of cards. Never more than three in play.
pub type Hand = SmallVec<[Policy; 3]>;

/// The deck could not supply the requested cards even after reshuffling.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("requested {requested} cards but only {available} remain in draw and discard piles")]
    Exhausted { requested: usize, available: usize },
}

/// Draw pile (top = index 0) plus an unordered discard pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDeck {
    draw_pile: Vec<Policy>,
    discard_pile: Vec<Policy>,
}

impl PolicyDeck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard 6 liberal + 11 fascist deck, shuffled.
    #[must_use]
    pub fn standard(rng: &mut GameRng) -> Self {
        let mut draw_pile = Vec::with_capacity(LIBERAL_POLICY_COUNT + FASCIST_POLICY_COUNT);
        draw_pile.extend(std::iter::repeat(Policy::Liberal).take(LIBERAL_POLICY_COUNT));
        draw_pile.extend(std::iter::repeat(Policy::Fascist).take(FASCIST_POLICY_COUNT));
        rng.shuffle(&mut draw_pile);

        Self {
            draw_pile,
            discard_pile: Vec::new(),
        }
    }

    /// Build a deck with an exact draw order and discard pile.
    #[must_use]
    pub fn from_piles(draw_pile: Vec<Policy>, discard_pile: Vec<Policy>) -> Self {
        Self {
            draw_pile,
            discard_pile,
        }
    }

    /// Cards in the draw pile, top first.
    #[must_use]
    pub fn draw_pile(&self) -> &[Policy] {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Policy] {
        &self.discard_pile
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards in both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return the top `n` cards, reshuffling if short.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Result<Hand, DeckError> {
        self.ensure(n, rng)?;
        Ok(self.draw_pile.drain(..n).collect())
    }

    /// Return the top `n` cards without removing them.
    ///
    /// Applies the same reshuffle-if-short rule as `draw`, so a peek can
    /// change the order of future draws.
    pub fn peek_top(&mut self, n: usize, rng: &mut GameRng) -> Result<Hand, DeckError> {
        self.ensure(n, rng)?;
        Ok(self.draw_pile[..n].iter().copied().collect())
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: Policy) {
        self.discard_pile.push(card);
    }

    /// Make sure the draw pile holds at least `n` cards.
    fn ensure(&mut self, n: usize, rng: &mut GameRng) -> Result<(), DeckError> {
        if self.draw_pile.len() >= n {
            return Ok(());
        }

        let available = self.len();
        if available < n {
            return Err(DeckError::Exhausted {
                requested: n,
                available,
            });
        }

        debug!(
            draw_pile = self.draw_pile.len(),
            discard_pile = self.discard_pile.len(),
            "Reshuffling discard pile into draw pile"
        );
        self.draw_pile.append(&mut self.discard_pile);
        rng.shuffle(&mut self.draw_pile);
        Ok(())
    }
}
