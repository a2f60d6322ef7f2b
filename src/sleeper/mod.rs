//! Sleeper league data: wire models, service access and points aggregation.

pub mod compute;
pub mod http;
pub mod league;
pub mod memory;
pub mod service;
pub mod types;
