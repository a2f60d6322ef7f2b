//! Command implementations for the Sleeper points CLI

pub mod prompt;
pub mod season_points;
