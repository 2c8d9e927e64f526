//! Shared helpers for integration tests.
//!
//! Roles and the deck are dealt by the seeded RNG, so helpers here either
//! look participants up by role or search seeds for a deal with the shape
//! a test needs.

#![allow(dead_code)]

use hidden_council::{
    Ballot, ExecutivePower, GameRng, GameSession, Outcome, Phase, Policy, Role, SessionConfig,
};

pub const NAMES: [&str; 10] = [
    "Alice", "Bob", "Carol", "Dave", "Eve", "Frank", "Grace", "Heidi", "Ivan", "Judy",
];

/// Install a test subscriber. Controlled by `TEST_LOG`, then `RUST_LOG`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(tracing_subscriber::EnvFilter::new)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub fn lobby(count: usize, config: SessionConfig) -> GameSession {
    let mut session = GameSession::new("it", config);
    for name in &NAMES[..count] {
        session.add_participant(name).unwrap();
    }
    session
}

pub fn started(count: usize, seed: u64) -> GameSession {
    let mut session = lobby(count, SessionConfig::new().with_seed(seed));
    session.start_game().unwrap();
    session
}

/// First seed (from 0) whose started session satisfies `accept`.
pub fn started_where(count: usize, accept: impl Fn(&GameSession) -> bool) -> GameSession {
    (0..10_000)
        .map(|seed| started(count, seed))
        .find(|session| accept(session))
        .expect("no seed produced the requested deal")
}

pub fn names_with_role(session: &GameSession, role: Role) -> Vec<String> {
    session
        .participants()
        .iter()
        .filter(|p| p.role == Some(role))
        .map(|p| p.name.clone())
        .collect()
}

pub fn president(session: &GameSession) -> String {
    session.president().unwrap().name.clone()
}

pub fn living(session: &GameSession) -> Vec<String> {
    session
        .participants()
        .iter()
        .filter(|p| p.alive)
        .map(|p| p.name.clone())
        .collect()
}

/// A living participant the president may legally nominate.
pub fn eligible_nominee(session: &GameSession) -> String {
    let president = president(session);
    let term_limited = session.living_count() > 5;
    living(session)
        .into_iter()
        .find(|name| {
            *name != president && !(term_limited && session.last_chancellor() == Some(name.as_str()))
        })
        .unwrap()
}

/// Living participants vote; the first `ja` of them vote Ja.
pub fn vote_all(session: &mut GameSession, ja: usize) {
    for (i, name) in living(session).iter().enumerate() {
        session.vote(name, Ballot::from_yes(i < ja)).unwrap();
    }
}

/// Nominate `chancellor`, vote with `ja` yes ballots, resolve.
pub fn elect(session: &mut GameSession, chancellor: &str, ja: usize) -> Outcome {
    let president = president(session);
    session.nominate(&president, chancellor).unwrap();
    vote_all(session, ja);
    session.resolve_election().unwrap()
}

/// Discard and enact, steering toward `wanted` whenever the hand allows.
pub fn legislate(session: &mut GameSession, wanted: Policy) -> Outcome {
    let president = president(session);
    let hand = session.president_hand().to_vec();
    let discard = hand.iter().position(|&c| c != wanted).unwrap_or(0);
    session.discard(&president, discard).unwrap();

    let chancellor = session.nominated_chancellor().unwrap().to_string();
    let hand = session.chancellor_hand().to_vec();
    let enact = hand.iter().position(|&c| c == wanted).unwrap_or(0);
    session.enact(&chancellor, enact).unwrap()
}

/// Cards across both piles, both hands, and the enacted tracks.
pub fn total_cards(session: &GameSession) -> usize {
    session.deck().len()
        + session.president_hand().len()
        + session.chancellor_hand().len()
        + usize::from(session.liberal_policies())
        + usize::from(session.fascist_policies())
}

/// Take one random legal step. Returns `false` once the game is over.
pub fn random_step(session: &mut GameSession, rng: &mut GameRng) -> bool {
    match session.phase() {
        Phase::Election => {
            let president = president(session);
            let term_limited = session.living_count() > 5;
            let candidates: Vec<String> = living(session)
                .into_iter()
                .filter(|name| {
                    *name != president
                        && !(term_limited && session.last_chancellor() == Some(name.as_str()))
                })
                .collect();
            let nominee = &candidates[rng.gen_range_usize(0..candidates.len())];
            session.nominate(&president, nominee).unwrap();
        }
        Phase::Voting => {
            for name in living(session) {
                let ballot = Ballot::from_yes(rng.gen_range_usize(0..2) == 0);
                session.vote(&name, ballot).unwrap();
            }
            session.resolve_election().unwrap();
        }
        Phase::Legislative => {
            if session.president_hand().is_empty() {
                let chancellor = session.nominated_chancellor().unwrap().to_string();
                let index = rng.gen_range_usize(0..session.chancellor_hand().len());
                session.enact(&chancellor, index).unwrap();
            } else {
                let president = president(session);
                let index = rng.gen_range_usize(0..session.president_hand().len());
                session.discard(&president, index).unwrap();
            }
        }
        Phase::Executive => {
            let president = president(session);
            let powers = session.pending_power().unwrap().powers();
            let power = powers[rng.gen_range_usize(0..powers.len())];
            let targets = living(session);
            let target = match power {
                ExecutivePower::PolicyPeek => None,
                _ => Some(targets[rng.gen_range_usize(0..targets.len())].clone()),
            };
            session
                .resolve_power(&president, power, target.as_deref())
                .unwrap();
        }
        Phase::Lobby | Phase::GameOver => return false,
    }
    session.winner().is_none()
}
