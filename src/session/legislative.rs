//! The two-step policy hand-off.
//!
//! The president discards one of three drawn cards and passes the other
//! two; the chancellor enacts one and discards the last. Enactment is
//! where the win check runs and where fascist policies unlock powers.

use tracing::{info, instrument};

use super::{Event, GameSession, Outcome};
use crate::cards::{Hand, Policy};
use crate::core::{GameError, Phase};
use crate::rules;

impl GameSession {
    /// President discards the card at `index`; the rest go to the chancellor.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn discard(&mut self, actor: &str, index: usize) -> Result<Outcome, GameError> {
        self.require_phase(Phase::Legislative)?;
        self.require_president(actor)?;
        self.check_index(&self.president_hand, index)?;

        let discarded = self.president_hand.remove(index);
        self.deck.discard(discarded);
        self.chancellor_hand = std::mem::take(&mut self.president_hand);

        info!(president = actor, "President discarded a policy");
        Ok(self.outcome(Event::PolicyDiscarded {
            president: actor.to_string(),
        }))
    }

    /// Chancellor enacts the card at `index` and discards the other.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn enact(&mut self, actor: &str, index: usize) -> Result<Outcome, GameError> {
        self.require_phase(Phase::Legislative)?;
        if self.nominated_chancellor.as_deref() != Some(actor) {
            return Err(self.reject(GameError::NotChancellor(actor.to_string())));
        }
        self.check_index(&self.chancellor_hand, index)?;

        let policy = self.chancellor_hand.remove(index);
        for card in self.chancellor_hand.drain(..) {
            self.deck.discard(card);
        }
        self.count_policy(policy);
        info!(
            chancellor = actor,
            policy = %policy,
            liberal = self.liberal_policies,
            fascist = self.fascist_policies,
            "Policy enacted"
        );

        if self.check_winner().is_some() {
            return Ok(self.outcome(Event::PolicyEnacted {
                policy,
                power: None,
            }));
        }

        let power = match policy {
            Policy::Fascist => rules::unlocked_power(self.fascist_policies),
            Policy::Liberal => None,
        };
        if let Some(token) = power {
            info!(power = ?token, "Executive power unlocked");
        }
        self.reset_round(power, true);

        Ok(self.outcome(Event::PolicyEnacted { policy, power }))
    }

    fn check_index(&self, hand: &Hand, index: usize) -> Result<(), GameError> {
        if hand.is_empty() {
            return Err(self.reject(GameError::EmptyHand));
        }
        if index >= hand.len() {
            return Err(self.reject(GameError::InvalidCardIndex {
                index,
                hand_size: hand.len(),
            }));
        }
        Ok(())
    }
}
