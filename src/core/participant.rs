//! Participants, their hidden roles, and ballots.
//!
//! ## Participant
//!
//! A seat at the table, identified by a display name that is unique
//! within one session. Insertion order is turn order. A seat is either
//! held by a person or by a bot that the session plays itself (see
//! `session::bot`).
//!
//! ## Role
//!
//! Every participant holds exactly one role once the game starts:
//! - `Liberal`: rank-and-file member of the majority team
//! - `Fascist`: minority team member who knows the rest of the team
//! - `Hitler`: the minority team's figurehead, who knows nobody

use serde::{Deserialize, Serialize};

/// The two competing teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Liberal,
    Fascist,
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Liberal => write!(f, "Liberal"),
            Team::Fascist => write!(f, "Fascist"),
        }
    }
}

/// Hidden role held by a participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Liberal,
    Fascist,
    Hitler,
}

impl Role {
    /// The team this role plays for.
    ///
    /// This is also exactly what an investigation discloses: `Hitler`
    /// reads as `Fascist`, never as itself.
    #[must_use]
    pub const fn team(self) -> Team {
        match self {
            Role::Liberal => Team::Liberal,
            Role::Fascist | Role::Hitler => Team::Fascist,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Liberal => write!(f, "Liberal"),
            Role::Fascist => write!(f, "Fascist"),
            Role::Hitler => write!(f, "Hitler"),
        }
    }
}

/// A recorded vote on a proposed government.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ballot {
    Ja,
    Nein,
}

impl Ballot {
    /// Build a ballot from a yes/no answer.
    #[must_use]
    pub const fn from_yes(yes: bool) -> Self {
        if yes {
            Ballot::Ja
        } else {
            Ballot::Nein
        }
    }

    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Ballot::Ja)
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, unique within the session.
    pub name: String,

    /// Hidden role. `None` until the game starts.
    pub role: Option<Role>,

    pub alive: bool,

    /// Holds the presidency for the current round (set once elected).
    pub is_president: bool,

    /// Holds the chancellorship for the current round (set once elected).
    pub is_chancellor: bool,

    /// Ballot in the current election, `None` if not yet voted.
    pub vote: Option<Ballot>,

    pub executed: bool,

    /// Seat played by the engine rather than a connected person.
    #[serde(default)]
    pub bot: bool,

    /// Acknowledged the current screen. Cleared once every living seat is ready.
    #[serde(default)]
    pub ready: bool,
}

impl Participant {
    /// Create a living participant with no role yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
            alive: true,
            is_president: false,
            is_chancellor: false,
            vote: None,
            executed: false,
            bot: false,
            ready: false,
        }
    }

    /// Create a bot seat.
    pub fn bot(name: impl Into<String>) -> Self {
        Self {
            bot: true,
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn is_hitler(&self) -> bool {
        self.role == Some(Role::Hitler)
    }

    /// Clear leadership flags and ballot at the end of a round.
    pub fn reset_round(&mut self) {
        self.is_president = false;
        self.is_chancellor = false;
        self.vote = None;
    }

    /// Mark this participant dead by execution.
    pub fn execute(&mut self) {
        self.alive = false;
        self.executed = true;
        self.is_president = false;
        self.is_chancellor = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_team() {
        assert_eq!(Role::Liberal.team(), Team::Liberal);
        assert_eq!(Role::Fascist.team(), Team::Fascist);
        assert_eq!(Role::Hitler.team(), Team::Fascist);
    }

    #[test]
    fn test_ballot_from_yes() {
        assert_eq!(Ballot::from_yes(true), Ballot::Ja);
        assert_eq!(Ballot::from_yes(false), Ballot::Nein);
        assert!(Ballot::Ja.is_yes());
        assert!(!Ballot::Nein.is_yes());
    }

    #[test]
    fn test_new_participant() {
        let p = Participant::new("Alice");

        assert_eq!(p.name, "Alice");
        assert!(p.alive);
        assert!(!p.executed);
        assert_eq!(p.role, None);
        assert_eq!(p.vote, None);
        assert!(!p.bot);
        assert!(!p.ready);
    }

    #[test]
    fn test_bot_participant() {
        let p = Participant::bot("Robo");

        assert_eq!(p.name, "Robo");
        assert!(p.bot);
        assert!(p.alive);
    }

    #[test]
    fn test_bot_flag_defaults_when_missing() {
        let json = r#"{"name":"Dana","role":null,"alive":true,"is_president":false,
            "is_chancellor":false,"vote":null,"executed":false}"#;
        let p: Participant = serde_json::from_str(json).unwrap();

        assert!(!p.bot);
        assert!(!p.ready);
    }

    #[test]
    fn test_reset_round_clears_flags() {
        let mut p = Participant::new("Bob");
        p.is_president = true;
        p.is_chancellor = true;
        p.vote = Some(Ballot::Ja);

        p.reset_round();

        assert!(!p.is_president);
        assert!(!p.is_chancellor);
        assert_eq!(p.vote, None);
    }

    #[test]
    fn test_execute() {
        let mut p = Participant::new("Carol");
        p.role = Some(Role::Hitler);
        p.execute();

        assert!(!p.alive);
        assert!(p.executed);
        assert!(p.is_hitler());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Hitler).unwrap();
        assert_eq!(json, "\"Hitler\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Hitler);
    }
}
