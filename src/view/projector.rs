//! The visibility rules.
//!
//! ## Roles
//!
//! - Everyone sees their own role.
//! - A `Fascist` also sees every other `Fascist` and `Hitler`.
//! - `Hitler` sees nobody else, even at small tables.
//! - With `HouseRules::show_role_on_death`, dead participants' roles are public.
//!
//! ## Hands and ballots
//!
//! The president's drawn cards are shown to the presiding president only,
//! the chancellor's cards to the nominated chancellor only. While voting
//! is open a viewer sees their own ballot and, for everyone else, only
//! whether they have voted.

use super::{ParticipantView, ProjectedView};
use crate::core::{HouseRules, Participant, Phase, Role};
use crate::session::GameSession;

/// May `viewer` (`None` for a spectator) see `subject`'s role?
#[must_use]
pub fn role_visible(viewer: Option<&Participant>, subject: &Participant, rules: &HouseRules) -> bool {
    if rules.show_role_on_death && !subject.alive {
        return true;
    }
    let Some(viewer) = viewer else {
        return false;
    };
    if viewer.name == subject.name {
        return true;
    }
    matches!(
        (viewer.role, subject.role),
        (Some(Role::Fascist), Some(Role::Fascist | Role::Hitler))
    )
}

/// Render `session` for `viewer`. Unknown names get a spectator view.
#[must_use]
pub fn project(session: &GameSession, viewer: &str) -> ProjectedView {
    let rules = session.config().rules;
    let me = session.participant(viewer);
    let voting_open = session.phase() == Phase::Voting;

    let participants = session
        .participants()
        .iter()
        .map(|p| {
            let own = p.name == viewer;
            ParticipantView {
                name: p.name.clone(),
                alive: p.alive,
                executed: p.executed,
                is_president: p.is_president,
                is_chancellor: p.is_chancellor,
                bot: p.bot,
                ready: p.ready,
                has_voted: p.vote.is_some(),
                ballot: if voting_open && !own { None } else { p.vote },
                role: if role_visible(me, p, &rules) { p.role } else { None },
            }
        })
        .collect();

    let current_president = session.president().map(|p| p.name.clone());
    let is_president = me.is_some() && current_president.as_deref() == Some(viewer);
    let is_chancellor = me.is_some() && session.nominated_chancellor() == Some(viewer);

    let president_hand = session.president_hand();
    let chancellor_hand = session.chancellor_hand();

    ProjectedView {
        viewer: viewer.to_string(),
        phase: session.phase(),
        game_started: session.is_started(),
        participants,
        liberal_policies: session.liberal_policies(),
        fascist_policies: session.fascist_policies(),
        election_tracker: session.election_tracker(),
        current_president,
        nominated_chancellor: session.nominated_chancellor().map(str::to_string),
        last_president: session.last_president().map(str::to_string),
        last_chancellor: session.last_chancellor().map(str::to_string),
        draw_pile_size: session.deck().draw_pile_len(),
        discard_pile_size: session.deck().discard_len(),
        president_hand: (is_president && !president_hand.is_empty())
            .then(|| president_hand.to_vec()),
        chancellor_hand: (is_chancellor && !chancellor_hand.is_empty())
            .then(|| chancellor_hand.to_vec()),
        pending_power: session.pending_power(),
        executive_action: session.executive_action().cloned(),
        winner: session.winner(),
    }
}
