use std::fmt;

use serde::{Deserialize, Serialize};

/// Session-scoped player identifier, assigned in creation order and never
/// reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Disciplinary record. At most one is stored per player and the last write
/// wins: a second caution does not escalate automatically, the caller
/// records `SecondYellowCard` explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisciplinaryEvent {
    YellowCard,
    SecondYellowCard,
    RedCard,
}

impl DisciplinaryEvent {
    /// Short code used in the summary's "Evento" column.
    pub fn code(&self) -> &'static str {
        match self {
            DisciplinaryEvent::YellowCard => "TA",
            DisciplinaryEvent::SecondYellowCard => "DTA",
            DisciplinaryEvent::RedCard => "TR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Jersey number, an opaque display string (never parsed as a number).
    pub dorsal: String,
    /// Accrued on-field seconds. Only grows while the player is fielded and
    /// the clock is running.
    pub seconds_played: u32,
    pub on_field: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<DisciplinaryEvent>,
}
