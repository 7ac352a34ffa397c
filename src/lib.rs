//! # split-or-steal
//!
//! Rules engine and session registry for the two-party Split or Steal game.
//!
//! Two participants negotiate over a fixed number of chat rounds, then each
//! privately commits to [`Choice::Split`] or [`Choice::Steal`]. A
//! deterministic payoff matrix decides who receives the shared pot:
//! both split and the pot is shared, one steals and takes everything, both
//! steal and nobody is paid.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: [`GameStore`] is synchronous, single-owner state with
//!    no I/O. Every operation runs to completion under `&mut self`; payouts
//!    are bookkeeping numbers, never settlement.
//!
//! 2. **Rejections, not exceptions**: every business-rule failure (missing
//!    game, wrong phase, unknown participant) is a [`Rejection`] value the
//!    caller branches on. The engine never panics on caller input.
//!
//! 3. **Resolve exactly once**: a game leaves the active set the instant
//!    the second decision lands, and its [`GameResult`] snapshot never
//!    re-enters it.
//!
//! 4. **Explicit composition**: there is no global state. The hosting
//!    process builds one [`GameDirectory`] at startup and passes it to
//!    every caller; its mutex is the concurrency boundary for the engine.
//!
//! ## Modules
//!
//! - `core`: identifiers, participants, choices, chat entries, game
//!   records, configuration
//! - `engine`: the session store and the payoff matrix
//! - `directory`: per-process facade for lookups, statistics, configuration

pub mod core;
pub mod directory;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    ChatEntry, Choice, ConfigOverrides, GameConfig, GameId, GameRecord, Participant,
    ParticipantId, ParticipantProfile, ParseChoiceError, Phase, RoomId,
};

pub use crate::engine::{payoff, GameResult, GameStore, Outcome, Rejection};

pub use crate::directory::{GameDirectory, ParticipantStats};
