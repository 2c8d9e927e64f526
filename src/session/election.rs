//! Nomination and voting.
//!
//! `Election` waits for the president to nominate, `Voting` waits for
//! every living participant's ballot. A strict majority of `Ja` seats the
//! government and moves to `Legislative`; anything else fails the
//! election, bumps the tracker, and rotates the presidency. The third
//! consecutive failure enacts the top policy directly.

use tracing::{info, instrument};

use super::{Event, GameSession, Outcome};
use crate::core::config::{ELECTION_TRACKER_LIMIT, PRESIDENT_HAND_SIZE, TERM_LIMIT_EXEMPT_TABLE};
use crate::core::{Ballot, GameError, Phase};

impl GameSession {
    /// President proposes `nominee` as chancellor.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn nominate(&mut self, actor: &str, nominee: &str) -> Result<Outcome, GameError> {
        self.require_phase(Phase::Election)?;
        let president_seat = self.require_president(actor)?;
        let nominee_seat = self.require_living(nominee)?;

        if nominee_seat == president_seat {
            return Err(self.reject(GameError::SelfNomination));
        }
        if self.term_limited(nominee) {
            return Err(self.reject(GameError::TermLimited(nominee.to_string())));
        }

        for participant in &mut self.participants {
            participant.vote = None;
        }
        self.nominated_chancellor = Some(nominee.to_string());
        self.executive_action = None;
        self.phase = Phase::Voting;

        info!(president = actor, chancellor = nominee, "Chancellor nominated");
        Ok(self.outcome(Event::ChancellorNominated {
            president: actor.to_string(),
            chancellor: nominee.to_string(),
        }))
    }

    /// Living participants the presiding president may nominate right now.
    #[must_use]
    pub fn eligible_nominees(&self) -> Vec<&str> {
        if !self.started {
            return Vec::new();
        }
        self.participants
            .iter()
            .enumerate()
            .filter(|&(seat, p)| {
                p.alive && seat != self.president_seat && !self.term_limited(&p.name)
            })
            .map(|(_, p)| p.name.as_str())
            .collect()
    }

    /// The last chancellor sits out unless the table is down to five.
    fn term_limited(&self, nominee: &str) -> bool {
        self.last_chancellor.as_deref() == Some(nominee)
            && self.living_count() > TERM_LIMIT_EXEMPT_TABLE
    }

    /// Record (or overwrite) a living participant's ballot.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn vote(&mut self, actor: &str, ballot: Ballot) -> Result<Outcome, GameError> {
        self.require_phase(Phase::Voting)?;
        let seat = self.require_living(actor)?;

        self.participants[seat].vote = Some(ballot);
        let outstanding = self.votes_outstanding();

        info!(voter = actor, outstanding, "Vote cast");
        Ok(self.outcome(Event::VoteCast {
            voter: actor.to_string(),
            outstanding,
        }))
    }

    /// Tally the ballots. Legal once every living participant has voted.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn resolve_election(&mut self) -> Result<Outcome, GameError> {
        self.require_phase(Phase::Voting)?;
        let outstanding = self.votes_outstanding();
        if outstanding > 0 {
            return Err(self.reject(GameError::VotesOutstanding { outstanding }));
        }

        let living = self.living_count();
        let ja = self
            .participants
            .iter()
            .filter(|p| p.alive && p.vote == Some(Ballot::Ja))
            .count();
        let nein = living - ja;

        if ja > nein {
            self.pass_election(ja, nein)
        } else {
            self.fail_election(ja, nein)
        }
    }

    fn pass_election(&mut self, ja: usize, nein: usize) -> Result<Outcome, GameError> {
        let chancellor = self
            .nominated_chancellor
            .clone()
            .ok_or_else(|| self.reject(GameError::NoNomination))?;
        let chancellor_seat = self.require_seat(&chancellor)?;
        let hand = self
            .deck
            .draw(PRESIDENT_HAND_SIZE, &mut self.rng)
            .map_err(|e| self.deck_failure(e))?;

        let president_seat = self.president_seat;
        self.participants[president_seat].is_president = true;
        self.participants[chancellor_seat].is_chancellor = true;
        let president = self.participants[president_seat].name.clone();

        self.election_tracker = 0;
        self.last_president = Some(president.clone());
        self.last_chancellor = Some(chancellor.clone());
        self.president_hand = hand;
        self.phase = Phase::Legislative;

        info!(ja, nein, president = %president, chancellor = %chancellor, "Election passed");
        Ok(self.outcome(Event::ElectionPassed {
            president,
            chancellor,
        }))
    }

    fn fail_election(&mut self, ja: usize, nein: usize) -> Result<Outcome, GameError> {
        let tracker = self.election_tracker + 1;
        let forced_policy = if tracker >= ELECTION_TRACKER_LIMIT {
            let drawn = self
                .deck
                .draw(1, &mut self.rng)
                .map_err(|e| self.deck_failure(e))?;
            drawn.first().copied()
        } else {
            None
        };

        for participant in &mut self.participants {
            participant.is_president = false;
            participant.is_chancellor = false;
        }
        self.nominated_chancellor = None;
        self.election_tracker = if forced_policy.is_some() { 0 } else { tracker };
        info!(ja, nein, tracker, "Election failed");

        if let Some(policy) = forced_policy {
            self.count_policy(policy);
            info!(policy = %policy, "Election tracker forced the top policy");
            if let Some(victory) = self.check_winner() {
                return Ok(Outcome::new(
                    self.phase,
                    Event::ElectionFailed {
                        tracker: 0,
                        forced_policy,
                    },
                    Some(victory),
                ));
            }
        }

        self.advance_president();
        self.begin_round();
        Ok(self.outcome(Event::ElectionFailed {
            tracker: self.election_tracker,
            forced_policy,
        }))
    }
}
