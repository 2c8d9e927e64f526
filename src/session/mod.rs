//! The game aggregate.
//!
//! `GameSession` owns one game's complete state and is the only thing
//! that mutates it. Every operation:
//!
//! 1. checks the terminal guard and the phase it requires,
//! 2. validates the actor and arguments,
//! 3. performs anything that can still fail (deck draws) first,
//! 4. then commits.
//!
//! A returned `Err` therefore always means nothing changed.
//!
//! ## Operations
//!
//! - Lobby: `add_participant`, `add_bot`, `remove_participant`, `start_game`
//! - Election: `nominate`, `vote`, `resolve_election` (see `election`)
//! - Legislative: `discard`, `enact` (see `legislative`)
//! - Executive: `resolve_power`, `inspection_result`, `deck_peek` (see `executive`)
//! - Any phase: `apply` dispatches a `Command`, `project` renders a view,
//!   `mark_ready` records an acknowledgement
//! - Bots: `turn_of`, `step_bots`, `run_bots` (see `bot`)
//!
//! ## Concurrency
//!
//! Sessions are single-writer: all mutation takes `&mut self`. Wrap a
//! session in one lock (see `store::SessionStore`) to share it.

mod bot;
mod election;
mod executive;
mod legislative;
mod outcome;

pub use bot::{BotPolicy, RandomBot, RoleAwareBot, Turn};
pub use outcome::{Event, ExecutiveAction, InspectionReport, Outcome};

use im::Vector;
use tracing::{debug, info, instrument};

use crate::cards::{Hand, Policy, PolicyDeck};
use crate::core::config::{MAX_PARTICIPANTS, MIN_PARTICIPANTS};
use crate::core::{
    ActionRecord, Command, GameError, GameRng, Participant, Phase, Role, SessionConfig,
};
use crate::rules::{self, PowerToken, Victory, WinCheck};
use crate::view::{self, ProjectedView};
use outcome::Disclosure;

/// One game, from lobby to game over.
#[derive(Clone, Debug)]
pub struct GameSession {
    id: String,
    config: SessionConfig,
    rng: GameRng,
    /// Separate stream for bot choices, so bots never disturb the deck order.
    bot_rng: GameRng,

    /// Seats in join order, which is also turn order.
    participants: Vec<Participant>,
    deck: PolicyDeck,

    liberal_policies: u8,
    fascist_policies: u8,
    /// Consecutive failed elections (0-2 between operations).
    election_tracker: u8,

    phase: Phase,
    /// Seat of the presiding president. Always a living seat once started.
    president_seat: usize,

    last_president: Option<String>,
    last_chancellor: Option<String>,
    nominated_chancellor: Option<String>,

    president_hand: Hand,
    chancellor_hand: Hand,

    pending_power: Option<PowerToken>,
    executive_action: Option<ExecutiveAction>,
    disclosure: Option<Disclosure>,

    winner: Option<Victory>,
    started: bool,

    round: u32,
    sequence: u32,
    history: Vector<ActionRecord>,
}

impl GameSession {
    /// Create an empty lobby.
    pub fn new(id: impl Into<String>, config: SessionConfig) -> Self {
        let id = id.into();
        info!(session_id = %id, "Creating game session");
        let rng = config.rng();
        let bot_rng = rng.for_context("bots");
        Self {
            id,
            config,
            rng,
            bot_rng,
            participants: Vec::new(),
            deck: PolicyDeck::new(),
            liberal_policies: 0,
            fascist_policies: 0,
            election_tracker: 0,
            phase: Phase::Lobby,
            president_seat: 0,
            last_president: None,
            last_chancellor: None,
            nominated_chancellor: None,
            president_hand: Hand::new(),
            chancellor_hand: Hand::new(),
            pending_power: None,
            executive_action: None,
            disclosure: None,
            winner: None,
            started: false,
            round: 0,
            sequence: 0,
            history: Vector::new(),
        }
    }

    // === Lobby ===

    /// Seat a new participant. Lobby only.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn add_participant(&mut self, name: &str) -> Result<Outcome, GameError> {
        self.seat(Participant::new(name))
    }

    /// Seat a bot that the session plays itself. Lobby only.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn add_bot(&mut self, name: &str) -> Result<Outcome, GameError> {
        self.seat(Participant::bot(name))
    }

    fn seat(&mut self, participant: Participant) -> Result<Outcome, GameError> {
        self.ensure_lobby()?;
        if participant.name.trim().is_empty() {
            return Err(self.reject(GameError::EmptyName));
        }
        if self.seat_of(&participant.name).is_some() {
            return Err(self.reject(GameError::NameTaken(participant.name)));
        }
        if self.participants.len() >= MAX_PARTICIPANTS {
            return Err(self.reject(GameError::TableFull {
                max: MAX_PARTICIPANTS,
            }));
        }

        let name = participant.name.clone();
        info!(
            participant = %name,
            bot = participant.bot,
            seated = self.participants.len() + 1,
            "Participant joined"
        );
        self.participants.push(participant);
        Ok(self.outcome(Event::ParticipantJoined { name }))
    }

    /// Remove a participant, e.g. on disconnect. Lobby only.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn remove_participant(&mut self, name: &str) -> Result<Outcome, GameError> {
        self.ensure_lobby()?;
        let seat = self.require_seat(name)?;

        self.participants.remove(seat);
        info!(participant = name, "Participant left");
        Ok(self.outcome(Event::ParticipantLeft {
            name: name.to_string(),
        }))
    }

    /// Assign roles, shuffle the deck and open the first election.
    ///
    /// One-shot: a second call is rejected instead of re-dealing roles.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn start_game(&mut self) -> Result<Outcome, GameError> {
        self.ensure_lobby()?;
        let count = self.participants.len();
        let mut role_rng = self.rng.for_context("roles");
        let roles = rules::assign_roles(count, &mut role_rng).ok_or_else(|| {
            self.reject(GameError::InvalidParticipantCount {
                count,
                min: MIN_PARTICIPANTS,
                max: MAX_PARTICIPANTS,
            })
        })?;

        for (participant, role) in self.participants.iter_mut().zip(roles) {
            participant.role = Some(role);
        }

        self.deck = PolicyDeck::standard(&mut self.rng);
        self.liberal_policies = 0;
        self.fascist_policies = 0;
        self.election_tracker = 0;
        self.president_seat = if self.config.rules.random_first_president {
            self.rng.for_context("seating").gen_range_usize(0..count)
        } else {
            0
        };
        self.started = true;
        self.begin_round();

        let president = self.participants[self.president_seat].name.clone();
        info!(participants = count, president = %president, "Game started");
        Ok(self.outcome(Event::GameStarted { president }))
    }

    // === Command dispatch ===

    /// Run one participant's command, recording it in the history if accepted.
    ///
    /// This is the entry point for the command layer.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn apply(&mut self, actor: &str, command: Command) -> Result<Outcome, GameError> {
        let (round, sequence) = (self.round, self.sequence);
        let outcome = match &command {
            Command::Nominate { nominee } => self.nominate(actor, nominee),
            Command::Vote { ballot } => self.vote(actor, *ballot),
            Command::ResolveElection => {
                self.require_seat(actor)?;
                self.resolve_election()
            }
            Command::Discard { index } => self.discard(actor, *index),
            Command::Enact { index } => self.enact(actor, *index),
            Command::Executive { power, target } => {
                self.resolve_power(actor, *power, target.as_deref())
            }
            Command::Ready => self.mark_ready(actor),
        }?;

        self.history
            .push_back(ActionRecord::new(actor, command, round, sequence));
        if self.round == round {
            self.sequence += 1;
        }
        Ok(outcome)
    }

    /// A living participant acknowledges the current screen.
    ///
    /// Bots count as ready. Once every living seat is ready the flags are
    /// cleared and the outcome reports `all_ready`.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn mark_ready(&mut self, actor: &str) -> Result<Outcome, GameError> {
        self.ensure_in_game()?;
        let seat = self.require_living(actor)?;

        self.participants[seat].ready = true;
        let all_ready = self.all_ready();
        if all_ready {
            for participant in &mut self.participants {
                participant.ready = false;
            }
        }

        debug!(participant = actor, all_ready, "Participant ready");
        Ok(self.outcome(Event::ParticipantReady {
            name: actor.to_string(),
            all_ready,
        }))
    }

    // === Views ===

    /// Render the session as `viewer` is allowed to see it.
    #[must_use]
    pub fn project(&self, viewer: &str) -> ProjectedView {
        view::project(self, viewer)
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// All seats in turn order, dead ones included.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn living_count(&self) -> usize {
        self.participants.iter().filter(|p| p.alive).count()
    }

    #[must_use]
    pub fn deck(&self) -> &PolicyDeck {
        &self.deck
    }

    #[must_use]
    pub fn liberal_policies(&self) -> u8 {
        self.liberal_policies
    }

    #[must_use]
    pub fn fascist_policies(&self) -> u8 {
        self.fascist_policies
    }

    #[must_use]
    pub fn election_tracker(&self) -> u8 {
        self.election_tracker
    }

    /// The presiding president. `None` before the game starts.
    #[must_use]
    pub fn president(&self) -> Option<&Participant> {
        if !self.started {
            return None;
        }
        self.participants.get(self.president_seat)
    }

    #[must_use]
    pub fn nominated_chancellor(&self) -> Option<&str> {
        self.nominated_chancellor.as_deref()
    }

    #[must_use]
    pub fn last_president(&self) -> Option<&str> {
        self.last_president.as_deref()
    }

    /// The last elected chancellor, who is term-limited at larger tables.
    #[must_use]
    pub fn last_chancellor(&self) -> Option<&str> {
        self.last_chancellor.as_deref()
    }

    /// Cards the president drew this session (3, or empty once passed on).
    #[must_use]
    pub fn president_hand(&self) -> &[Policy] {
        &self.president_hand
    }

    /// Cards the chancellor holds (2, or empty).
    #[must_use]
    pub fn chancellor_hand(&self) -> &[Policy] {
        &self.chancellor_hand
    }

    #[must_use]
    pub fn pending_power(&self) -> Option<PowerToken> {
        self.pending_power
    }

    #[must_use]
    pub fn executive_action(&self) -> Option<&ExecutiveAction> {
        self.executive_action.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Victory> {
        self.winner
    }

    /// Current round, starting at 1 when the game starts.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Every command accepted through `apply`, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Every living seat is ready (bots always are).
    #[must_use]
    pub fn all_ready(&self) -> bool {
        self.participants
            .iter()
            .filter(|p| p.alive)
            .all(|p| p.ready || p.bot)
    }

    /// Living participants that have not voted in the current election.
    #[must_use]
    pub fn votes_outstanding(&self) -> usize {
        self.participants
            .iter()
            .filter(|p| p.alive && p.vote.is_none())
            .count()
    }

    // === Internal helpers ===

    fn outcome(&self, event: Event) -> Outcome {
        Outcome::new(self.phase, event, self.winner)
    }

    fn reject(&self, error: GameError) -> GameError {
        debug!(session_id = %self.id, phase = %self.phase, error = %error, "Rejected");
        error
    }

    fn ensure_lobby(&self) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(self.reject(GameError::GameOver));
        }
        if self.started {
            return Err(self.reject(GameError::AlreadyStarted));
        }
        Ok(())
    }

    fn ensure_in_game(&self) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(self.reject(GameError::GameOver));
        }
        if !self.started {
            return Err(self.reject(GameError::NotStarted));
        }
        Ok(())
    }

    /// Terminal guard plus phase check shared by every in-game operation.
    fn require_phase(&self, expected: Phase) -> Result<(), GameError> {
        self.ensure_in_game()?;
        if self.phase != expected {
            return Err(self.reject(GameError::WrongPhase {
                expected,
                actual: self.phase,
            }));
        }
        Ok(())
    }

    fn seat_of(&self, name: &str) -> Option<usize> {
        self.participants.iter().position(|p| p.name == name)
    }

    fn require_seat(&self, name: &str) -> Result<usize, GameError> {
        self.seat_of(name)
            .ok_or_else(|| self.reject(GameError::UnknownParticipant(name.to_string())))
    }

    fn require_living(&self, name: &str) -> Result<usize, GameError> {
        let seat = self.require_seat(name)?;
        if !self.participants[seat].alive {
            return Err(self.reject(GameError::DeadParticipant(name.to_string())));
        }
        Ok(seat)
    }

    fn require_president(&self, actor: &str) -> Result<usize, GameError> {
        match self.participants.get(self.president_seat) {
            Some(p) if p.name == actor && p.alive => Ok(self.president_seat),
            _ => Err(self.reject(GameError::NotPresident(actor.to_string()))),
        }
    }

    /// Next living seat after `seat`, wrapping around the table.
    fn next_living_after(&self, seat: usize) -> usize {
        let count = self.participants.len();
        (1..=count)
            .map(|offset| (seat + offset) % count)
            .find(|&s| self.participants[s].alive)
            .unwrap_or(seat)
    }

    fn advance_president(&mut self) {
        self.president_seat = self.next_living_after(self.president_seat);
    }

    /// Open a fresh election round.
    fn begin_round(&mut self) {
        self.phase = Phase::Election;
        self.round += 1;
        self.sequence = 0;
    }

    /// Surface deck exhaustion as the invariant violation it is.
    fn deck_failure(&self, error: crate::cards::DeckError) -> GameError {
        let error = GameError::from(error);
        tracing::error!(
            session_id = %self.id,
            draw_pile = self.deck.draw_pile_len(),
            discard_pile = self.deck.discard_len(),
            liberal = self.liberal_policies,
            fascist = self.fascist_policies,
            error = %error,
            "Deck bookkeeping violated"
        );
        error
    }

    fn count_policy(&mut self, policy: Policy) {
        match policy {
            Policy::Liberal => self.liberal_policies += 1,
            Policy::Fascist => self.fascist_policies += 1,
        }
    }

    /// Run the win check; on a win, record it and end the game.
    fn check_winner(&mut self) -> Option<Victory> {
        let hitler_is_chancellor = self
            .nominated_chancellor
            .as_deref()
            .and_then(|name| self.participant(name))
            .is_some_and(|p| p.is_hitler() && p.is_chancellor);
        let hitler_executed = self
            .participants
            .iter()
            .any(|p| p.role == Some(Role::Hitler) && p.executed);

        let victory = rules::evaluate(&WinCheck {
            liberal_policies: self.liberal_policies,
            fascist_policies: self.fascist_policies,
            hitler_is_chancellor,
            hitler_executed,
        })?;

        self.winner = Some(victory);
        self.phase = Phase::GameOver;
        self.pending_power = None;
        info!(
            session_id = %self.id,
            team = %victory.team,
            reason = ?victory.reason,
            "Game over"
        );
        Some(victory)
    }

    /// Close out a round.
    ///
    /// With a pending power the president keeps the chair and the session
    /// moves to `Executive`. Otherwise a new election opens, with the
    /// presidency rotating to the next living seat when `rotate` is set.
    fn reset_round(&mut self, pending: Option<PowerToken>, rotate: bool) {
        for participant in &mut self.participants {
            participant.reset_round();
        }
        self.president_hand.clear();
        self.chancellor_hand.clear();
        self.nominated_chancellor = None;
        self.pending_power = pending;

        if pending.is_some() {
            self.phase = Phase::Executive;
        } else {
            if rotate {
                self.advance_president();
            }
            self.begin_round();
        }
        debug!(
            session_id = %self.id,
            phase = %self.phase,
            president = self.participants.get(self.president_seat).map(|p| p.name.as_str()),
            "Round reset"
        );
    }
}
