//! Match clock state machine.

use serde::{Deserialize, Serialize};

/// Hard cap on the match clock: 99 minutes. Once a running clock reaches it,
/// the next tick finishes the match instead of advancing.
pub const MATCH_CAP_SECONDS: u32 = 99 * 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockState {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

impl ClockState {
    pub fn is_running(self) -> bool {
        matches!(self, ClockState::Running)
    }

    pub fn is_finished(self) -> bool {
        matches!(self, ClockState::Finished)
    }

    /// Whether an explicit command may move the clock from `self` to `to`.
    /// The automatic cap-triggered finish is handled inside the tick and
    /// does not go through this table.
    pub(crate) fn can_transition(self, to: ClockState) -> bool {
        use ClockState::*;
        matches!(
            (self, to),
            (Idle, Running)
                | (Paused, Running)
                | (Running, Paused)
                | (Idle, Finished)
                | (Running, Finished)
                | (Paused, Finished)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ClockState::*;

    #[test]
    fn test_start_only_from_idle_or_paused() {
        assert!(Idle.can_transition(Running));
        assert!(Paused.can_transition(Running));
        assert!(!Running.can_transition(Running));
        assert!(!Finished.can_transition(Running));
    }

    #[test]
    fn test_pause_only_from_running() {
        assert!(Running.can_transition(Paused));
        assert!(!Idle.can_transition(Paused));
        assert!(!Paused.can_transition(Paused));
        assert!(!Finished.can_transition(Paused));
    }

    #[test]
    fn test_finished_is_terminal() {
        assert!(Idle.can_transition(Finished));
        assert!(Running.can_transition(Finished));
        assert!(Paused.can_transition(Finished));
        assert!(!Finished.can_transition(Finished));
        assert!(!Finished.can_transition(Idle));
    }
}
