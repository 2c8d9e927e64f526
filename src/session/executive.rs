//! Executive power resolution and the private results it produces.
//!
//! A pending `PowerToken` holds the session in `Executive` until the
//! president picks one of the powers it allows. Investigation and peek
//! results are stored as a `Disclosure` readable only by that president.

use tracing::{info, instrument};

use super::{Disclosure, Event, ExecutiveAction, GameSession, InspectionReport, Outcome};
use crate::cards::Policy;
use crate::core::config::PEEK_SIZE;
use crate::core::{GameError, Phase};
use crate::rules::ExecutivePower;

impl GameSession {
    /// President uses `power`, which must be allowed by the pending token.
    ///
    /// `target` names a living participant and is required by every power
    /// except `PolicyPeek`, which ignores it.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn resolve_power(
        &mut self,
        actor: &str,
        power: ExecutivePower,
        target: Option<&str>,
    ) -> Result<Outcome, GameError> {
        self.require_phase(Phase::Executive)?;
        self.require_president(actor)?;
        if !self.pending_power.is_some_and(|token| token.allows(power)) {
            return Err(self.reject(GameError::PowerNotAvailable(power)));
        }

        let target_seat = if power.needs_target() {
            let name = target.ok_or_else(|| self.reject(GameError::MissingTarget(power)))?;
            Some(self.require_living(name)?)
        } else {
            None
        };
        let target_name = target_seat.map(|seat| self.participants[seat].name.clone());

        let mut rotate = true;
        match (power, target_seat) {
            (ExecutivePower::PolicyPeek, _) => {
                let cards = self
                    .deck
                    .peek_top(PEEK_SIZE, &mut self.rng)
                    .map_err(|e| self.deck_failure(e))?;
                self.disclosure = Some(Disclosure::Peek {
                    recipient: actor.to_string(),
                    cards,
                });
            }
            (ExecutivePower::Investigate, Some(seat)) => {
                let suspect = &self.participants[seat];
                let Some(role) = suspect.role else {
                    return Err(self.reject(GameError::NotStarted));
                };
                let report = InspectionReport {
                    target: suspect.name.clone(),
                    team: role.team(),
                };
                self.disclosure = Some(Disclosure::Inspection {
                    recipient: actor.to_string(),
                    report,
                });
            }
            (ExecutivePower::SpecialElection, Some(seat)) => {
                self.president_seat = seat;
                rotate = false;
            }
            (ExecutivePower::Execution, Some(seat)) => {
                self.participants[seat].execute();
            }
            (_, None) => return Err(self.reject(GameError::MissingTarget(power))),
        }

        info!(power = ?power, target = ?target_name, "Executive power resolved");
        self.executive_action = Some(ExecutiveAction {
            power,
            target: target_name.clone(),
        });
        let event = Event::PowerResolved {
            power,
            target: target_name,
        };

        if power == ExecutivePower::Execution && self.check_winner().is_some() {
            return Ok(self.outcome(event));
        }

        self.reset_round(None, rotate);
        Ok(self.outcome(event))
    }

    /// The investigation result, for the president who ran it only.
    #[must_use]
    pub fn inspection_result(&self, viewer: &str) -> Option<&InspectionReport> {
        match &self.disclosure {
            Some(Disclosure::Inspection { recipient, report }) if recipient == viewer => Some(report),
            _ => None,
        }
    }

    /// The peeked top cards, for the president who peeked only.
    #[must_use]
    pub fn deck_peek(&self, viewer: &str) -> Option<&[Policy]> {
        match &self.disclosure {
            Some(Disclosure::Peek { recipient, cards }) if recipient == viewer => Some(cards.as_slice()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::cards::PolicyDeck;
    use crate::core::config::TOTAL_POLICY_COUNT;
    use crate::core::{Role, Team};
    use crate::rules::{PowerToken, WinReason};

    const ROLES: [Role; 7] = [
        Role::Liberal,
        Role::Fascist,
        Role::Hitler,
        Role::Liberal,
        Role::Fascist,
        Role::Liberal,
        Role::Liberal,
    ];

    /// Seven seats, Alice presiding over `token`.
    fn executive(token: PowerToken) -> GameSession {
        let mut session = started(7);
        session.set_roles(&ROLES);
        session.pending_power = Some(token);
        session.phase = Phase::Executive;
        session
    }

    #[test]
    fn test_power_must_be_on_offer() {
        let mut session = executive(PowerToken::Investigate);

        assert_eq!(
            session.resolve_power("Alice", ExecutivePower::Execution, Some("Bob")),
            Err(GameError::PowerNotAvailable(ExecutivePower::Execution))
        );
        assert_eq!(
            session.resolve_power("Bob", ExecutivePower::Investigate, Some("Carol")),
            Err(GameError::NotPresident("Bob".into()))
        );
        assert_eq!(
            session.resolve_power("Alice", ExecutivePower::Investigate, None),
            Err(GameError::MissingTarget(ExecutivePower::Investigate))
        );
        assert_eq!(session.phase(), Phase::Executive);
    }

    #[test]
    fn test_investigate_reports_team_privately() {
        let mut session = executive(PowerToken::Investigate);

        let outcome = session
            .resolve_power("Alice", ExecutivePower::Investigate, Some("Carol"))
            .unwrap();

        assert_eq!(outcome.phase, Phase::Election);
        let report = session.inspection_result("Alice").unwrap();
        assert_eq!(report.target, "Carol");
        assert_eq!(report.team, Team::Fascist);
        assert_eq!(session.inspection_result("Bob"), None);
        assert_eq!(session.inspection_result("Carol"), None);
        assert_eq!(session.president().unwrap().name, "Bob");
        assert_eq!(session.pending_power(), None);
    }

    #[test]
    fn test_special_election_overrides_rotation() {
        let mut session = executive(PowerToken::InvestigateOrSpecialElection);

        session
            .resolve_power("Alice", ExecutivePower::SpecialElection, Some("Eve"))
            .unwrap();

        assert_eq!(session.president().unwrap().name, "Eve");
        assert_eq!(session.phase(), Phase::Election);

        // Rotation resumes from the special president.
        let president = session.president_name();
        session.nominate(&president, "Alice").unwrap();
        for voter in NAMES[..7].iter() {
            session.vote(voter, crate::core::Ballot::Nein).unwrap();
        }
        session.resolve_election().unwrap();
        assert_eq!(session.president().unwrap().name, "Frank");
    }

    #[test]
    fn test_policy_peek_is_private_and_non_destructive() {
        let mut session = executive(PowerToken::InvestigateOrSpecialElectionOrPolicyPeek);
        let top: Vec<Policy> = session.deck().draw_pile()[..3].to_vec();

        let outcome = session
            .resolve_power("Alice", ExecutivePower::PolicyPeek, None)
            .unwrap();

        assert_eq!(
            outcome.event,
            Event::PowerResolved {
                power: ExecutivePower::PolicyPeek,
                target: None
            }
        );
        assert_eq!(session.deck_peek("Alice"), Some(top.as_slice()));
        assert_eq!(session.deck_peek("Bob"), None);
        assert_eq!(session.deck().draw_pile_len(), TOTAL_POLICY_COUNT);
    }

    #[test]
    fn test_peek_reshuffles_when_short() {
        let mut session = executive(PowerToken::InvestigateOrSpecialElectionOrPolicyPeek);
        session.set_deck(PolicyDeck::from_piles(
            vec![Policy::Liberal],
            vec![Policy::Fascist; 16],
        ));

        session
            .resolve_power("Alice", ExecutivePower::PolicyPeek, None)
            .unwrap();

        assert_eq!(session.deck_peek("Alice").map(<[Policy]>::len), Some(3));
        assert_eq!(session.deck().discard_len(), 0);
        assert_eq!(session.deck().draw_pile_len(), 17);
    }

    #[test]
    fn test_execution_kills_and_rotates() {
        let mut session = executive(PowerToken::InvestigateOrSpecialElectionOrExecution);

        let outcome = session
            .resolve_power("Alice", ExecutivePower::Execution, Some("Dave"))
            .unwrap();

        assert_eq!(outcome.winner, None);
        let dave = session.participant("Dave").unwrap();
        assert!(!dave.alive);
        assert!(dave.executed);
        assert_eq!(session.living_count(), 6);
        assert_eq!(session.president().unwrap().name, "Bob");
        assert_eq!(
            session.executive_action(),
            Some(&ExecutiveAction {
                power: ExecutivePower::Execution,
                target: Some("Dave".into())
            })
        );
    }

    #[test]
    fn test_rotation_skips_executed_seat() {
        let mut session = executive(PowerToken::InvestigateOrSpecialElectionOrExecution);
        session
            .resolve_power("Alice", ExecutivePower::Execution, Some("Bob"))
            .unwrap();

        assert_eq!(session.president().unwrap().name, "Carol");
        assert_eq!(
            session.nominate("Carol", "Bob"),
            Err(GameError::DeadParticipant("Bob".into()))
        );
    }

    #[test]
    fn test_president_may_execute_themselves() {
        let mut session = executive(PowerToken::InvestigateOrSpecialElectionOrExecution);

        let outcome = session
            .resolve_power("Alice", ExecutivePower::Execution, Some("Alice"))
            .unwrap();

        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.phase, Phase::Election);
        assert!(session.participant("Alice").unwrap().executed);
        assert_eq!(session.president().unwrap().name, "Bob");
        assert!(session.nominate("Bob", "Carol").is_ok());
    }

    #[test]
    fn test_president_may_special_elect_themselves() {
        let mut session = executive(PowerToken::InvestigateOrSpecialElection);

        session
            .resolve_power("Alice", ExecutivePower::SpecialElection, Some("Alice"))
            .unwrap();

        assert_eq!(session.president().unwrap().name, "Alice");
        assert!(session.nominate("Alice", "Bob").is_ok());
    }

    #[test]
    fn test_rotation_follows_seats_after_earlier_seat_dies() {
        let mut session = executive(PowerToken::InvestigateOrSpecialElectionOrExecution);
        session.president_seat = 2;

        session
            .resolve_power("Carol", ExecutivePower::Execution, Some("Alice"))
            .unwrap();

        assert_eq!(session.president().unwrap().name, "Dave");
        assert!(session.nominate("Dave", "Eve").is_ok());
    }

    #[test]
    fn test_executing_hitler_ends_game() {
        let mut session = executive(PowerToken::InvestigateOrSpecialElectionOrExecution);

        let outcome = session
            .resolve_power("Alice", ExecutivePower::Execution, Some("Carol"))
            .unwrap();

        assert_eq!(outcome.phase, Phase::GameOver);
        let victory = outcome.winner.unwrap();
        assert_eq!(victory.team, Team::Liberal);
        assert_eq!(victory.reason, WinReason::HitlerExecuted);
        assert_eq!(session.president().unwrap().name, "Alice");
        assert_eq!(
            session.resolve_power("Alice", ExecutivePower::Investigate, Some("Bob")),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn test_dead_target_rejected() {
        let mut session = executive(PowerToken::InvestigateOrSpecialElectionOrExecution);
        session.participants[4].execute();

        assert_eq!(
            session.resolve_power("Alice", ExecutivePower::Investigate, Some("Eve")),
            Err(GameError::DeadParticipant("Eve".into()))
        );
    }
}
