//! Computation options selectable from the command line.

use std::fmt;

/// What to do when Sleeper reports `null` for a player's weekly points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum NullPointsPolicy {
    /// Count the player as scoring 0.0
    #[default]
    Zero,
    /// Abort the run with an error naming the player
    Error,
}

impl fmt::Display for NullPointsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NullPointsPolicy::Zero => "zero",
            NullPointsPolicy::Error => "error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_null_points_default_is_zero() {
        assert_eq!(NullPointsPolicy::default(), NullPointsPolicy::Zero);
    }

    #[test]
    fn test_null_points_value_enum_round_trip() {
        for policy in NullPointsPolicy::value_variants() {
            let parsed = NullPointsPolicy::from_str(&policy.to_string(), true).unwrap();
            assert_eq!(parsed, *policy);
        }
    }
}
