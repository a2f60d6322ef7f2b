//! Week numbers within a Sleeper season.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for 1-indexed week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Every week strictly before `playoff_start`, starting at week 1.
    ///
    /// Empty when the playoffs start in week 1 or the league reports 0.
    pub fn regular_season(playoff_start: Week) -> impl Iterator<Item = Week> {
        (1..playoff_start.0).map(Week)
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
