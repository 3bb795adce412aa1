//! Match session aggregate.
//!
//! `Session` owns every piece of per-match state (roster, clock, score) and
//! enforces all invariants; callers only issue commands and read views.
//! Commands validate first and mutate after, so a rejected command never
//! leaves a partial change behind. The per-second tick is driven externally
//! by [`crate::engine::TickDriver`].

pub mod clock;
pub mod summary;

use log::debug;
use serde::Serialize;

use crate::error::{Result, SessionError};
use crate::models::{DisciplinaryEvent, Player, PlayerId, Score, Side};
use clock::{ClockState, MATCH_CAP_SECONDS};
use summary::SummaryRow;

/// Maximum roster size for one session.
pub const MAX_ROSTER: usize = 22;
/// Players fielded at kick-off; adds beyond this start on the bench.
pub const FIELD_SIZE: usize = 11;

#[derive(Debug, Clone)]
pub struct Session {
    players: Vec<Player>,
    elapsed_seconds: u32,
    clock: ClockState,
    score: Score,
    next_id: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a fresh empty session: no players, clock idle at zero, 0-0.
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            elapsed_seconds: 0,
            clock: ClockState::Idle,
            score: Score::default(),
            next_id: 1,
        }
    }

    // ========================
    // Roster commands
    // ========================

    /// Append a player. The first eleven start on the field, later adds on
    /// the bench; the rule applies at add time only and never re-balances
    /// existing players.
    pub fn add_player(&mut self, name: &str, dorsal: &str) -> Result<PlayerId> {
        if name.trim().is_empty() {
            return Err(SessionError::EmptyField { field: "name" });
        }
        if dorsal.trim().is_empty() {
            return Err(SessionError::EmptyField { field: "dorsal" });
        }
        if self.players.len() >= MAX_ROSTER {
            return Err(SessionError::RosterFull { max: MAX_ROSTER });
        }

        let id = PlayerId(self.next_id);
        self.next_id += 1;
        let on_field = self.players.len() < FIELD_SIZE;
        self.players.push(Player {
            id,
            name: name.to_string(),
            dorsal: dorsal.to_string(),
            seconds_played: 0,
            on_field,
            event: None,
        });
        debug!("added player {} (dorsal {}), on_field={}", id, dorsal, on_field);
        Ok(id)
    }

    /// Overwrite a player's name and dorsal in place. Accrued time, field
    /// status and disciplinary record are untouched. Both fields stay
    /// required non-empty, as at add time.
    pub fn edit_player(&mut self, id: PlayerId, name: &str, dorsal: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(SessionError::EmptyField { field: "name" });
        }
        if dorsal.trim().is_empty() {
            return Err(SessionError::EmptyField { field: "dorsal" });
        }
        let player = self.player_mut(id)?;
        player.name = name.to_string();
        player.dorsal = dorsal.to_string();
        Ok(())
    }

    /// Swap `out_id` off the field for `in_id`. Neither player's accrued
    /// time changes and there is no limit on the number of substitutions.
    pub fn substitute(&mut self, out_id: PlayerId, in_id: PlayerId) -> Result<()> {
        if !self.player(out_id)?.on_field {
            return Err(SessionError::PlayerNotOnField { id: out_id });
        }
        if self.player(in_id)?.on_field {
            return Err(SessionError::PlayerAlreadyOnField { id: in_id });
        }
        self.player_mut(out_id)?.on_field = false;
        self.player_mut(in_id)?.on_field = true;
        debug!("substitution: {} off, {} on", out_id, in_id);
        Ok(())
    }

    /// Record a disciplinary event, overwriting any previous one. Escalation
    /// is the caller's call: a second caution arrives here as
    /// `SecondYellowCard`, never inferred.
    pub fn record_event(&mut self, id: PlayerId, event: DisciplinaryEvent) -> Result<()> {
        self.player_mut(id)?.event = Some(event);
        Ok(())
    }

    // ========================
    // Score
    // ========================

    pub fn set_score(&mut self, side: Side, value: u32) {
        self.score.set(side, value);
    }

    // ========================
    // Clock commands
    // ========================

    /// Start or resume the clock. Valid only from idle or paused.
    pub fn start(&mut self) -> Result<()> {
        self.transition(ClockState::Running)
    }

    /// Pause a running clock.
    pub fn pause(&mut self) -> Result<()> {
        self.transition(ClockState::Paused)
    }

    /// Finish the match, freezing the clock and all time accrual. Valid from
    /// any state except an already finished match.
    pub fn finalize(&mut self) -> Result<()> {
        self.transition(ClockState::Finished)
    }

    fn transition(&mut self, to: ClockState) -> Result<()> {
        if !self.clock.can_transition(to) {
            return Err(SessionError::InvalidTransition { from: self.clock, to });
        }
        debug!("clock: {:?} -> {:?}", self.clock, to);
        self.clock = to;
        Ok(())
    }

    /// Advance the clock by one second. Driven by the tick scheduler; a tick
    /// outside `Running` is a no-op.
    ///
    /// The match clock and every fielded player's accrued time advance in
    /// one atomic step, against the roster as of this tick. A tick that
    /// lands on the 99-minute cap finishes the match instead and credits
    /// nothing: the boundary second is never attributed to players.
    pub fn tick(&mut self) {
        if self.clock != ClockState::Running {
            return;
        }
        if self.elapsed_seconds >= MATCH_CAP_SECONDS {
            debug!("clock cap reached, finishing match");
            self.clock = ClockState::Finished;
            return;
        }
        self.elapsed_seconds += 1;
        for player in self.players.iter_mut().filter(|p| p.on_field) {
            player.seconds_played += 1;
        }
    }

    // ========================
    // Views
    // ========================

    /// All players in insertion order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn starters(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.on_field)
    }

    pub fn bench(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.on_field)
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn clock_state(&self) -> ClockState {
        self.clock
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Clock/scoreboard snapshot for the rendering collaborator.
    pub fn clock_view(&self) -> ClockView {
        ClockView {
            state: self.clock,
            elapsed_seconds: self.elapsed_seconds,
            elapsed_formatted: summary::format_seconds(self.elapsed_seconds),
            score: self.score,
        }
    }

    /// Final report, one row per player in insertion order. Only available
    /// once the match is finished.
    pub fn summary_view(&self) -> Result<Vec<SummaryRow>> {
        if !self.clock.is_finished() {
            return Err(SessionError::SummaryNotReady);
        }
        Ok(self.players.iter().map(SummaryRow::from_player).collect())
    }

    fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or(SessionError::PlayerNotFound { id })
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SessionError::PlayerNotFound { id })
    }
}

/// Clock/scoreboard snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockView {
    pub state: ClockState,
    pub elapsed_seconds: u32,
    pub elapsed_formatted: String,
    pub score: Score,
}
