//! Session engine facade.
//!
//! [`SessionEngine`] owns the [`Session`] aggregate together with the
//! [`TickDriver`] and keeps the two consistent: the driver is armed exactly
//! while the clock is running. Hosts route every command through the engine
//! and call [`SessionEngine::pump`] from their timer or frame loop; any
//! cadence works, time is credited from wall-clock instants, not call
//! counts.
//!
//! Every command first credits the seconds pending up to the command
//! instant, so a tick can never observe a half-applied command and a pause
//! or finalize synchronously stops accrual.

pub mod ticker;

use std::time::Instant;

use crate::error::Result;
use crate::models::{DisciplinaryEvent, PlayerId, Side};
use crate::session::summary::SummaryRow;
use crate::session::{ClockView, Session};
pub use ticker::TickDriver;

#[derive(Debug, Default)]
pub struct SessionEngine {
    session: Session,
    driver: TickDriver,
}

impl SessionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the underlying session, for views. Commands must go
    /// through the engine so the tick driver stays consistent.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply all ticks pending since the last pump. Returns the number of
    /// seconds credited.
    pub fn pump(&mut self) -> u32 {
        self.pump_at(Instant::now())
    }

    pub(crate) fn pump_at(&mut self, now: Instant) -> u32 {
        let applied = self.driver.pump(now, &mut self.session);
        // A tick may have finished the match at the cap.
        if !self.session.clock_state().is_running() {
            self.driver.cancel();
        }
        applied
    }

    // ========================
    // Clock commands
    // ========================

    pub fn start(&mut self) -> Result<()> {
        self.start_at(Instant::now())
    }

    pub fn pause(&mut self) -> Result<()> {
        self.pause_at(Instant::now())
    }

    pub fn finalize(&mut self) -> Result<()> {
        self.finalize_at(Instant::now())
    }

    /// Discard everything and begin a fresh session: empty roster, clock
    /// idle at zero, score 0-0, driver disarmed.
    pub fn reset(&mut self) {
        self.driver.cancel();
        self.session = Session::new();
    }

    pub(crate) fn start_at(&mut self, now: Instant) -> Result<()> {
        self.pump_at(now);
        self.session.start()?;
        self.driver.arm(now);
        Ok(())
    }

    pub(crate) fn pause_at(&mut self, now: Instant) -> Result<()> {
        self.pump_at(now);
        self.session.pause()?;
        self.driver.cancel();
        Ok(())
    }

    pub(crate) fn finalize_at(&mut self, now: Instant) -> Result<()> {
        self.pump_at(now);
        self.session.finalize()?;
        self.driver.cancel();
        Ok(())
    }

    // ========================
    // Roster / event / score commands
    // ========================

    pub fn add_player(&mut self, name: &str, dorsal: &str) -> Result<PlayerId> {
        self.pump();
        self.session.add_player(name, dorsal)
    }

    pub fn edit_player(&mut self, id: PlayerId, name: &str, dorsal: &str) -> Result<()> {
        self.pump();
        self.session.edit_player(id, name, dorsal)
    }

    pub fn substitute(&mut self, out_id: PlayerId, in_id: PlayerId) -> Result<()> {
        self.pump();
        self.session.substitute(out_id, in_id)
    }

    pub fn record_event(&mut self, id: PlayerId, event: DisciplinaryEvent) -> Result<()> {
        self.pump();
        self.session.record_event(id, event)
    }

    pub fn set_score(&mut self, side: Side, value: u32) {
        self.pump();
        self.session.set_score(side, value);
    }

    // ========================
    // Views
    // ========================

    pub fn clock_view(&self) -> ClockView {
        self.session.clock_view()
    }

    pub fn summary_view(&self) -> Result<Vec<SummaryRow>> {
        self.session.summary_view()
    }
}
