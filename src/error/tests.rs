//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod sleeper_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = SleeperError::from(json_error);

        match error {
            SleeperError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");
        let error = SleeperError::from(io_error);

        match error {
            SleeperError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_points_format_error_conversion() {
        let parse_error = "not-a-number".parse::<f64>().unwrap_err();
        let error = SleeperError::from(parse_error);

        assert!(matches!(error, SleeperError::PointsFormat(_)));
        assert!(!error.is_missing_key());
        assert!(error.to_string().starts_with("Could not round points"));
    }

    #[test]
    fn test_invalid_league_error() {
        let error = SleeperError::invalid_league("abc");

        assert!(error.is_invalid_league());
        assert!(!error.is_missing_key());
        let error_string = error.to_string();
        assert!(error_string.contains("Invalid Sleeper league ID"));
        assert!(error_string.contains("abc"));
    }

    #[test]
    fn test_unknown_roster_error() {
        let error = SleeperError::UnknownRoster {
            roster_id: RosterId::new(99),
            league_size: 12,
        };

        assert!(error.is_missing_key());
        assert!(!error.is_invalid_league());
        assert_eq!(
            error.to_string(),
            "Roster 99 is outside the league's 12 rosters"
        );
    }

    #[test]
    fn test_unknown_owner_error() {
        let error = SleeperError::UnknownOwner {
            owner_id: OwnerId::new("u42"),
        };

        assert!(error.is_missing_key());
        assert!(error.to_string().contains("u42"));
    }

    #[test]
    fn test_unowned_roster_error() {
        let error = SleeperError::UnownedRoster {
            roster_id: RosterId::new(7),
        };

        assert!(error.is_missing_key());
        assert_eq!(error.to_string(), "Roster 7 has no owner");
    }

    #[test]
    fn test_null_player_points_error() {
        let error = SleeperError::NullPlayerPoints {
            roster_id: RosterId::new(3),
            week: Week::new(5),
            player_id: "4046".to_string(),
        };

        assert!(!error.is_missing_key());
        assert!(!error.is_invalid_league());
        let error_string = error.to_string();
        assert!(error_string.contains("4046"));
        assert!(error_string.contains("week 5"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SleeperError::from(io_error);

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(SleeperError::invalid_league(""))
        }

        match test_function().unwrap_err() {
            SleeperError::InvalidLeagueId { league_id } => assert!(league_id.is_empty()),
            _ => panic!("Expected InvalidLeagueId error"),
        }
    }
}
