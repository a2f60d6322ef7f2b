//! ID types for Sleeper leagues.

use crate::error::{Result, SleeperError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Sleeper league IDs.
///
/// Sleeper league IDs are long numeric strings (usually 18 or 19 digits), so
/// they are kept as text rather than squeezed into an integer. Parsing trims
/// surrounding whitespace and rejects anything that is empty or contains a
/// non-digit character.
///
/// # Examples
///
/// ```rust
/// use sleeper_points::LeagueId;
///
/// let league_id: LeagueId = " 784444797430657024\n".parse().unwrap();
/// assert_eq!(league_id.as_str(), "784444797430657024");
/// assert!("my-league".parse::<LeagueId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(String);

impl LeagueId {
    /// Validate and wrap a league ID.
    pub fn new(id: impl AsRef<str>) -> Result<Self> {
        id.as_ref().parse()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SleeperError::invalid_league(trimmed));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Roster slot within a league, numbered 1..=league size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterId(pub u32);

impl RosterId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque Sleeper user ID of a roster's owner.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_trims_input() {
        let league_id: LeagueId = "  123456789  \n".parse().unwrap();
        assert_eq!(league_id.as_str(), "123456789");
        assert_eq!(league_id.to_string(), "123456789");
    }

    #[test]
    fn test_league_id_rejects_empty() {
        let err = "   ".parse::<LeagueId>().unwrap_err();
        assert!(err.is_invalid_league());
    }

    #[test]
    fn test_league_id_rejects_non_digits() {
        for raw in ["abc", "12a4", "-123", "12 34", "1.5"] {
            let err = LeagueId::new(raw).unwrap_err();
            assert!(err.is_invalid_league(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_roster_id_ordering() {
        let mut ids = vec![RosterId::new(3), RosterId::new(1), RosterId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![RosterId::new(1), RosterId::new(2), RosterId::new(3)]);
    }

    #[test]
    fn test_owner_id_deserializes_from_string() {
        let owner: OwnerId = serde_json::from_str("\"470093055986524160\"").unwrap();
        assert_eq!(owner.as_str(), "470093055986524160");
    }
}
