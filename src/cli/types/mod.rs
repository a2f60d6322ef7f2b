//! Type-safe wrappers and enums for Sleeper league data.

pub mod ids;
pub mod options;
pub mod time;

pub use ids::{LeagueId, OwnerId, RosterId};
pub use options::NullPointsPolicy;
pub use time::Week;
