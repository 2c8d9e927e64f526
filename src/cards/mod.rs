//! Card system: policy cards and the shared deck.
//!
//! ## Key Types
//!
//! - `Policy`: A card's type (the only identity a card has)
//! - `PolicyDeck`: Draw pile + discard pile with reshuffle-on-exhaustion
//! - `Hand`: A small inline buffer of cards held by a leader

pub mod deck;
pub mod policy;

pub use deck::{DeckError, Hand, PolicyDeck};
pub use policy::Policy;
