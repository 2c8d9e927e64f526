//! Role assignment by table size.
//!
//! | Participants | Liberal | Fascist | Hitler |
//! |--------------|---------|---------|--------|
//! | 5            | 3       | 1       | 1      |
//! | 6            | 4       | 1       | 1      |
//! | 7            | 4       | 2       | 1      |
//! | 8            | 5       | 2       | 1      |
//! | 9            | 5       | 3       | 1      |
//! | 10           | 6       | 3       | 1      |

use crate::core::config::{MAX_PARTICIPANTS, MIN_PARTICIPANTS};
use crate::core::{GameRng, Role};

/// Number of plain `Fascist` roles (Hitler excluded) for a table size.
#[must_use]
pub fn fascist_count(participants: usize) -> Option<usize> {
    match participants {
        5 | 6 => Some(1),
        7 | 8 => Some(2),
        9 | 10 => Some(3),
        _ => None,
    }
}

/// The unshuffled role multiset for a table size.
///
/// Returns `None` outside the supported table sizes.
#[must_use]
pub fn role_distribution(participants: usize) -> Option<Vec<Role>> {
    if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&participants) {
        return None;
    }
    let fascists = fascist_count(participants)?;

    let mut roles = Vec::with_capacity(participants);
    roles.push(Role::Hitler);
    roles.extend(std::iter::repeat(Role::Fascist).take(fascists));
    roles.extend(std::iter::repeat(Role::Liberal).take(participants - fascists - 1));
    Some(roles)
}

/// Shuffle the role multiset for a table size; index `i` goes to seat `i`.
#[must_use]
pub fn assign_roles(participants: usize, rng: &mut GameRng) -> Option<Vec<Role>> {
    let mut roles = role_distribution(participants)?;
    rng.shuffle(&mut roles);
    Some(roles)
}
