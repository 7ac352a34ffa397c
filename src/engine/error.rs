//! Rejection signals for operations that have no effect.
//!
//! None of these are fatal. A missing game, a stray message after
//! negotiation closed, or a decision from a bystander are all expected
//! parts of normal interaction with a conversational caller; the engine
//! refuses the operation, leaves every record untouched, and the caller
//! decides whether to re-prompt.

use thiserror::Error;

use crate::core::{ParticipantId, Phase};

/// Why an engine operation was refused without effect.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// No active record under the given id.
    #[error("no active game with that id")]
    GameNotFound,

    /// The record exists but the operation does not apply in its phase.
    #[error("game is {actual}, operation requires {expected}")]
    WrongPhase {
        /// Phase the operation requires.
        expected: Phase,
        /// Phase the record is actually in.
        actual: Phase,
    },

    /// The decision speaker matches neither bound participant.
    #[error("speaker is not a participant in this game")]
    UnknownParticipant,

    /// Both creation profiles carry the same identity.
    #[error("a participant cannot challenge itself")]
    SelfChallenge,

    /// The identity is already bound to an active game.
    #[error("participant {0} is already in an active game")]
    AlreadyPlaying(ParticipantId),
}
