//! Bot seats.
//!
//! A bot is an ordinary participant whose moves the session picks. A
//! `BotPolicy` reads the session from one bot's seat and answers with the
//! `Command` that bot would send, or `None` when it owes nothing. The
//! command then goes through `GameSession::apply` like anyone else's, so
//! bots obey the same rules and land in the same history.
//!
//! ## Policies
//!
//! - `RoleAwareBot`: plays for its team. Fascists mostly vote yes, keep
//!   fascist policies and execute seats they do not know as teammates.
//!   Liberals vote at random and keep liberal policies.
//! - `RandomBot`: uniform over the legal choices.
//!
//! A policy only uses what its seat may know: its own role, its own hand,
//! the public board, and the teammates `view::role_visible` grants it.
//!
//! ## Driving bots
//!
//! `step_bots` plays the first bot (in seat order) that owes a move and
//! `run_bots` repeats until none does. Choices draw from a bot stream
//! derived from the session seed, so a seeded all-bot game replays
//! identically.

use tracing::debug;

use super::{GameSession, Outcome};
use crate::cards::Policy;
use crate::core::{Ballot, Command, GameError, GameRng, Participant, Phase, Team};
use crate::rules::{ExecutivePower, PowerToken};
use crate::view::role_visible;

/// How often a fascist-team bot backs a proposed government.
const FASCIST_YES_RATE: f64 = 0.8;

/// What a seat is expected to do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Nominate,
    Vote,
    /// Everyone living has voted; any living seat may tally.
    ResolveElection,
    Discard,
    Enact,
    Executive(PowerToken),
}

/// Chooses moves for bot seats.
pub trait BotPolicy: Send + Sync {
    /// The command `bot` sends next, or `None` if it owes no move.
    fn decide(&self, session: &GameSession, bot: &str, rng: &mut GameRng) -> Option<Command>;
}

/// Team-minded play.
#[derive(Clone, Debug, Default)]
pub struct RoleAwareBot;

impl BotPolicy for RoleAwareBot {
    fn decide(&self, session: &GameSession, bot: &str, rng: &mut GameRng) -> Option<Command> {
        let me = session.participant(bot)?;
        let fascist = me.role.is_some_and(|role| role.team() == Team::Fascist);
        let keep = if fascist { Policy::Fascist } else { Policy::Liberal };

        let command = match session.turn_of(bot)? {
            Turn::Nominate => Command::Nominate {
                nominee: random_nominee(session, rng)?,
            },
            Turn::Vote => {
                let rate = if fascist { FASCIST_YES_RATE } else { 0.5 };
                Command::Vote {
                    ballot: Ballot::from_yes(rng.gen_bool(rate)),
                }
            }
            Turn::ResolveElection => Command::ResolveElection,
            Turn::Discard => Command::Discard {
                index: pick_card(session.president_hand(), |card| card != keep, rng)?,
            },
            Turn::Enact => Command::Enact {
                index: pick_card(session.chancellor_hand(), |card| card == keep, rng)?,
            },
            Turn::Executive(token) => {
                let power = preferred_power(token, rng)?;
                let target = if power.needs_target() {
                    let candidates = targets(session, me);
                    let strangers: Vec<&str> = if fascist && power == ExecutivePower::Execution {
                        candidates
                            .iter()
                            .copied()
                            .filter(|name| !knows_teammate(session, me, name))
                            .collect()
                    } else {
                        Vec::new()
                    };
                    let pool = if strangers.is_empty() { &candidates } else { &strangers };
                    Some(rng.choose(pool)?.to_string())
                } else {
                    None
                };
                Command::Executive { power, target }
            }
        };
        Some(command)
    }
}

/// Uniformly random legal play.
#[derive(Clone, Debug, Default)]
pub struct RandomBot;

impl BotPolicy for RandomBot {
    fn decide(&self, session: &GameSession, bot: &str, rng: &mut GameRng) -> Option<Command> {
        let me = session.participant(bot)?;
        let command = match session.turn_of(bot)? {
            Turn::Nominate => Command::Nominate {
                nominee: random_nominee(session, rng)?,
            },
            Turn::Vote => Command::Vote {
                ballot: Ballot::from_yes(rng.gen_bool(0.5)),
            },
            Turn::ResolveElection => Command::ResolveElection,
            Turn::Discard => Command::Discard {
                index: pick_card(session.president_hand(), |_| false, rng)?,
            },
            Turn::Enact => Command::Enact {
                index: pick_card(session.chancellor_hand(), |_| false, rng)?,
            },
            Turn::Executive(token) => {
                let power = *rng.choose(token.powers())?;
                let target = if power.needs_target() {
                    Some(rng.choose(&targets(session, me))?.to_string())
                } else {
                    None
                };
                Command::Executive { power, target }
            }
        };
        Some(command)
    }
}

/// Execution first, then investigation, otherwise anything on offer.
fn preferred_power(token: PowerToken, rng: &mut GameRng) -> Option<ExecutivePower> {
    let powers = token.powers();
    [ExecutivePower::Execution, ExecutivePower::Investigate]
        .into_iter()
        .find(|power| powers.contains(power))
        .or_else(|| rng.choose(powers).copied())
}

/// First card matching `wanted`, else a random index. `None` for an empty hand.
fn pick_card(hand: &[Policy], wanted: impl Fn(Policy) -> bool, rng: &mut GameRng) -> Option<usize> {
    if hand.is_empty() {
        return None;
    }
    let index = hand
        .iter()
        .position(|&card| wanted(card))
        .unwrap_or_else(|| rng.gen_range_usize(0..hand.len()));
    Some(index)
}

fn random_nominee(session: &GameSession, rng: &mut GameRng) -> Option<String> {
    rng.choose(&session.eligible_nominees())
        .map(|name| name.to_string())
}

/// Living seats other than `me`.
fn targets<'a>(session: &'a GameSession, me: &Participant) -> Vec<&'a str> {
    session
        .participants()
        .iter()
        .filter(|p| p.alive && p.name != me.name)
        .map(|p| p.name.as_str())
        .collect()
}

/// `me` can see that `name` plays for the fascists.
fn knows_teammate(session: &GameSession, me: &Participant, name: &str) -> bool {
    session.participant(name).is_some_and(|p| {
        role_visible(Some(me), p, &session.config().rules)
            && p.role.is_some_and(|role| role.team() == Team::Fascist)
    })
}

impl GameSession {
    /// The move `name` owes right now, if any.
    ///
    /// `None` for unknown or dead seats, before the start, and after the
    /// game is decided.
    #[must_use]
    pub fn turn_of(&self, name: &str) -> Option<Turn> {
        if self.winner.is_some() || !self.started {
            return None;
        }
        let seat = self.seat_of(name)?;
        let participant = &self.participants[seat];
        if !participant.alive {
            return None;
        }
        let presiding = seat == self.president_seat;
        let chancellor = self.nominated_chancellor.as_deref() == Some(name);

        match self.phase {
            Phase::Election if presiding => Some(Turn::Nominate),
            Phase::Voting if participant.vote.is_none() => Some(Turn::Vote),
            Phase::Voting if self.votes_outstanding() == 0 => Some(Turn::ResolveElection),
            Phase::Legislative if presiding && !self.president_hand.is_empty() => Some(Turn::Discard),
            Phase::Legislative if chancellor && !self.chancellor_hand.is_empty() => Some(Turn::Enact),
            Phase::Executive if presiding => self.pending_power.map(Turn::Executive),
            _ => None,
        }
    }

    /// Play the first bot that owes a move. `Ok(None)` when no bot does.
    ///
    /// A rejected bot command leaves the session untouched, bot stream included.
    pub fn step_bots(&mut self, policy: &dyn BotPolicy) -> Result<Option<Outcome>, GameError> {
        let bots: Vec<String> = self
            .participants
            .iter()
            .filter(|p| p.bot && p.alive)
            .map(|p| p.name.clone())
            .collect();

        let mut rng = self.bot_rng.clone();
        let session: &GameSession = self;
        let next = bots.into_iter().find_map(|name| {
            policy
                .decide(session, &name, &mut rng)
                .map(|command| (name, command))
        });
        let Some((actor, command)) = next else {
            return Ok(None);
        };

        debug!(session_id = %self.id, bot = %actor, command = ?command, "Bot move");
        let previous = std::mem::replace(&mut self.bot_rng, rng);
        match self.apply(&actor, command) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(error) => {
                self.bot_rng = previous;
                Err(error)
            }
        }
    }

    /// Play bot moves until a person must act or the game is decided.
    pub fn run_bots(&mut self, policy: &dyn BotPolicy) -> Result<Vec<Outcome>, GameError> {
        let mut outcomes = Vec::new();
        while let Some(outcome) = self.step_bots(policy)? {
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }
}
