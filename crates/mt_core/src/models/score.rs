use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

/// Scoreboard. Freely editable in any clock state; no upper bound and no
/// cross-check against match events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn set(&mut self, side: Side, value: u32) {
        match side {
            Side::Home => self.home = value,
            Side::Away => self.away = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_sides_independently() {
        let mut score = Score::default();
        score.set(Side::Home, 3);
        assert_eq!(score, Score { home: 3, away: 0 });
        score.set(Side::Away, 1);
        assert_eq!(score, Score { home: 3, away: 1 });
        score.set(Side::Home, 0);
        assert_eq!(score, Score { home: 0, away: 1 });
    }
}
