//! Finalize-time summary rows consumed by the export collaborator.

use serde::Serialize;

use crate::models::Player;

/// One row of the final report, in roster insertion order. Fields map 1:1
/// onto the export spreadsheet columns (Dorsal, Nombre, Tiempo, Evento).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub dorsal: String,
    pub name: String,
    pub time_formatted: String,
    /// Disciplinary code ("TA" / "DTA" / "TR"), empty when clean.
    pub event_code: String,
}

impl SummaryRow {
    pub fn from_player(player: &Player) -> Self {
        Self {
            dorsal: player.dorsal.clone(),
            name: player.name.clone(),
            time_formatted: format_seconds(player.seconds_played),
            event_code: player.event.map(|e| e.code().to_string()).unwrap_or_default(),
        }
    }
}

/// Renders seconds as `<minutes>m <seconds>s` with minutes capped at 99 for
/// display and seconds zero-padded to two digits.
pub fn format_seconds(total_seconds: u32) -> String {
    let minutes = (total_seconds / 60).min(99);
    format!("{}m {:02}s", minutes, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DisciplinaryEvent, PlayerId};

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0), "0m 00s");
        assert_eq!(format_seconds(125), "2m 05s");
        assert_eq!(format_seconds(5940), "99m 00s");
    }

    #[test]
    fn test_format_seconds_display_cap() {
        // Minutes are capped for display only; the leftover seconds still show.
        assert_eq!(format_seconds(99 * 60 + 59), "99m 59s");
        assert_eq!(format_seconds(200 * 60), "99m 00s");
    }

    #[test]
    fn test_row_from_player() {
        let player = Player {
            id: PlayerId(3),
            name: "Sergio".to_string(),
            dorsal: "4".to_string(),
            seconds_played: 90,
            on_field: true,
            event: Some(DisciplinaryEvent::YellowCard),
        };
        let row = SummaryRow::from_player(&player);
        assert_eq!(row.dorsal, "4");
        assert_eq!(row.name, "Sergio");
        assert_eq!(row.time_formatted, "1m 30s");
        assert_eq!(row.event_code, "TA");
    }

    #[test]
    fn test_row_without_event_is_blank() {
        let player = Player {
            id: PlayerId(9),
            name: "Fernando".to_string(),
            dorsal: "9".to_string(),
            seconds_played: 0,
            on_field: false,
            event: None,
        };
        assert_eq!(SummaryRow::from_player(&player).event_code, "");
    }
}
