//! # mt_core - Match Session Engine
//!
//! Single-match session tracker: roster management, a running match clock,
//! per-player on-field time accrual, substitutions, disciplinary events and
//! a final summary view. The engine owns all session state and enforces
//! every invariant; rendering and spreadsheet export are external
//! collaborators that only issue commands and read views.
//!
//! ## Features
//! - explicit clock state machine (idle / running / paused / finished)
//! - atomic one-second ticks: match clock and fielded players advance together
//! - roster capacity, first-eleven fielding and substitution consistency rules
//! - JSON command/view surface for host integration

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod session;
pub mod state;

// Re-export the host integration surface
pub use api::{
    clock_view_json, execute_command_json, roster_view_json, summary_view_json, CommandRequest,
    CommandResponse,
};
pub use engine::{SessionEngine, TickDriver};
pub use error::{ErrorKind, Result, SessionError};
pub use models::{DisciplinaryEvent, Player, PlayerId, Score, Side};
pub use session::clock::{ClockState, MATCH_CAP_SECONDS};
pub use session::summary::{format_seconds, SummaryRow};
pub use session::{ClockView, Session, FIELD_SIZE, MAX_ROSTER};
pub use state::{get_state, get_state_mut, reset_state, set_state, SESSION_ENGINE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    /// Full match walkthrough: 12 players, 90 seconds of play, one
    /// substitution, 10 more seconds, finalize, summary.
    #[test]
    fn test_match_walkthrough() {
        let mut session = Session::new();
        let ids: Vec<PlayerId> = (1..=12)
            .map(|i| session.add_player(&format!("Player {}", i), &i.to_string()).unwrap())
            .collect();

        // Players 1-11 start on the field, player 12 on the bench.
        for (idx, id) in ids.iter().enumerate() {
            let player = session.players().iter().find(|p| p.id == *id).unwrap();
            assert_eq!(player.on_field, idx < 11);
        }

        session.start().unwrap();
        for _ in 0..90 {
            session.tick();
        }
        for starter in session.starters() {
            assert_eq!(starter.seconds_played, 90);
        }
        assert_eq!(session.bench().next().unwrap().seconds_played, 0);

        session.substitute(ids[0], ids[11]).unwrap();
        for _ in 0..10 {
            session.tick();
        }

        let first = session.players().iter().find(|p| p.id == ids[0]).unwrap();
        let twelfth = session.players().iter().find(|p| p.id == ids[11]).unwrap();
        assert_eq!(first.seconds_played, 90);
        assert_eq!(twelfth.seconds_played, 10);
        for id in &ids[1..11] {
            let player = session.players().iter().find(|p| p.id == *id).unwrap();
            assert_eq!(player.seconds_played, 100);
        }

        session.finalize().unwrap();
        let rows = session.summary_view().unwrap();
        assert_eq!(rows[0].time_formatted, "1m 30s");
        assert_eq!(rows[11].time_formatted, "0m 10s");
        assert_eq!(rows[1].time_formatted, "1m 40s");
    }

    #[test]
    fn test_library_surface_round_trip() {
        let mut engine = SessionEngine::new();
        let response = execute_command_json(
            &mut engine,
            r#"{"command": "add_player", "name": "Xavi", "dorsal": "6"}"#,
        );
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["ok"], true);

        let roster: serde_json::Value =
            serde_json::from_str(&roster_view_json(&engine)).unwrap();
        assert_eq!(roster["schema_version"], u64::from(SCHEMA_VERSION));
        assert_eq!(roster["players"][0]["name"], "Xavi");
    }
}
