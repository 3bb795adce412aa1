//! Wall-clock tick driver.
//!
//! Translates real elapsed time into discrete one-second [`Session::tick`]
//! calls. Arming and cancelling are explicit, so no tick can ever fire while
//! the clock is paused or finished, and the sub-second remainder carries
//! across pumps so repeated polling neither loses nor double-counts time.

use std::time::{Duration, Instant};

use crate::session::Session;

#[derive(Debug, Default)]
pub struct TickDriver {
    /// Set while armed: the instant up to which ticks have been applied.
    anchor: Option<Instant>,
}

impl TickDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.anchor.is_some()
    }

    /// Arm the driver; seconds start counting from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.anchor = Some(now);
    }

    /// Disarm, dropping any pending sub-second remainder.
    pub fn cancel(&mut self) {
        self.anchor = None;
    }

    /// Apply one tick per whole second elapsed since the anchor, stopping
    /// early if a tick finishes the match. Returns the number of ticks
    /// applied. A disarmed driver does nothing.
    pub fn pump(&mut self, now: Instant, session: &mut Session) -> u32 {
        let Some(anchor) = self.anchor else {
            return 0;
        };
        let whole_seconds = now.saturating_duration_since(anchor).as_secs();
        let mut applied = 0;
        for _ in 0..whole_seconds {
            if !session.clock_state().is_running() {
                break;
            }
            session.tick();
            applied += 1;
        }
        // Advance the anchor by the whole seconds consumed, keeping the
        // fractional remainder for the next pump.
        self.anchor = Some(anchor + Duration::from_secs(whole_seconds));
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_session() -> Session {
        let mut session = Session::new();
        session.add_player("Keeper", "1").unwrap();
        session.start().unwrap();
        session
    }

    #[test]
    fn test_disarmed_driver_is_inert() {
        let mut session = running_session();
        let mut driver = TickDriver::new();
        let now = Instant::now();
        assert_eq!(driver.pump(now + Duration::from_secs(30), &mut session), 0);
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[test]
    fn test_pump_applies_whole_elapsed_seconds() {
        let mut session = running_session();
        let mut driver = TickDriver::new();
        let t0 = Instant::now();
        driver.arm(t0);

        assert_eq!(driver.pump(t0 + Duration::from_millis(2500), &mut session), 2);
        assert_eq!(session.elapsed_seconds(), 2);
        assert_eq!(session.players()[0].seconds_played, 2);
    }

    #[test]
    fn test_fractional_remainder_carries_across_pumps() {
        let mut session = running_session();
        let mut driver = TickDriver::new();
        let t0 = Instant::now();
        driver.arm(t0);

        assert_eq!(driver.pump(t0 + Duration::from_millis(900), &mut session), 0);
        assert_eq!(driver.pump(t0 + Duration::from_millis(1800), &mut session), 1);
        assert_eq!(driver.pump(t0 + Duration::from_millis(2999), &mut session), 1);
        assert_eq!(driver.pump(t0 + Duration::from_millis(3000), &mut session), 1);
        assert_eq!(session.elapsed_seconds(), 3);
    }

    #[test]
    fn test_cancel_drops_pending_remainder() {
        let mut session = running_session();
        let mut driver = TickDriver::new();
        let t0 = Instant::now();
        driver.arm(t0);
        driver.pump(t0 + Duration::from_millis(1700), &mut session);
        assert_eq!(session.elapsed_seconds(), 1);

        driver.cancel();
        assert!(!driver.is_armed());
        // Re-arming starts a fresh second; the 700ms remainder is gone.
        let t1 = t0 + Duration::from_secs(10);
        driver.arm(t1);
        assert_eq!(driver.pump(t1 + Duration::from_millis(999), &mut session), 0);
        assert_eq!(session.elapsed_seconds(), 1);
    }

    #[test]
    fn test_pump_stops_when_match_finishes() {
        let mut session = running_session();
        session.finalize().unwrap();
        let mut driver = TickDriver::new();
        let t0 = Instant::now();
        driver.arm(t0);
        assert_eq!(driver.pump(t0 + Duration::from_secs(5), &mut session), 0);
        assert_eq!(session.elapsed_seconds(), 0);
    }
}
