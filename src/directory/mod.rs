//! Per-process game directory: lookups, statistics, configuration.

pub mod facade;

pub use facade::{GameDirectory, ParticipantStats};
