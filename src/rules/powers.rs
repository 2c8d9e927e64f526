//! Executive powers unlocked by fascist policies.
//!
//! After each fascist enactment the cumulative fascist count selects a
//! `PowerToken`: the set of powers the president may choose from.
//!
//! | Fascist policies | Token                                      |
//! |------------------|--------------------------------------------|
//! | 1                | Investigate                                |
//! | 2                | Investigate / Special election             |
//! | 3                | Investigate / Special election / Peek      |
//! | 4, 5             | Investigate / Special election / Execution |
//! | 6+               | none (the fascists have already won)       |
//!
//! The same thresholds apply at every table size.

use serde::{Deserialize, Serialize};

/// A single executive action the president can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutivePower {
    /// Privately learn a living participant's team.
    Investigate,
    /// Choose the next president.
    SpecialElection,
    /// Privately see the top three policies.
    PolicyPeek,
    /// Kill a living participant.
    Execution,
}

impl ExecutivePower {
    /// Does this power act on a named participant?
    #[must_use]
    pub const fn needs_target(self) -> bool {
        !matches!(self, ExecutivePower::PolicyPeek)
    }
}

/// The powers on offer after a fascist enactment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerToken {
    Investigate,
    InvestigateOrSpecialElection,
    InvestigateOrSpecialElectionOrPolicyPeek,
    InvestigateOrSpecialElectionOrExecution,
}

impl PowerToken {
    /// Powers this token lets the president choose from.
    #[must_use]
    pub const fn powers(self) -> &'static [ExecutivePower] {
        use ExecutivePower::*;
        match self {
            PowerToken::Investigate => &[Investigate],
            PowerToken::InvestigateOrSpecialElection => &[Investigate, SpecialElection],
            PowerToken::InvestigateOrSpecialElectionOrPolicyPeek => {
                &[Investigate, SpecialElection, PolicyPeek]
            }
            PowerToken::InvestigateOrSpecialElectionOrExecution => {
                &[Investigate, SpecialElection, Execution]
            }
        }
    }

    #[must_use]
    pub fn allows(self, power: ExecutivePower) -> bool {
        self.powers().contains(&power)
    }
}

/// The token unlocked at a given cumulative fascist-policy count.
#[must_use]
pub fn unlocked_power(fascist_policies: u8) -> Option<PowerToken> {
    match fascist_policies {
        1 => Some(PowerToken::Investigate),
        2 => Some(PowerToken::InvestigateOrSpecialElection),
        3 => Some(PowerToken::InvestigateOrSpecialElectionOrPolicyPeek),
        4 | 5 => Some(PowerToken::InvestigateOrSpecialElectionOrExecution),
        _ => None,
    }
}
