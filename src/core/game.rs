//! Game records and the phase lifecycle.
//!
//! ## GameRecord
//!
//! The single mutable unit of state: two bound participants, an ordered
//! negotiation transcript, and a phase that only ever moves forward:
//!
//! `Negotiating --(round budget reached)--> Deciding --(both chose)--> Resolved`
//!
//! A record never revisits a prior phase, and once resolved it is never
//! mutated again; the store moves it out of the active set at that instant.
//!
//! ## Derived values
//!
//! The round counter is not stored; it is always `chat.len() / 2`, two
//! messages (one per side) making up one round.

use im::Vector;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::chat::ChatEntry;
use super::config::GameConfig;
use super::participant::{Participant, ParticipantId, ParticipantProfile};

/// Unique identifier for a game, allocated by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a new game ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Opaque room/context identifier supplied by the caller.
///
/// The engine stores it on the record and never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub String);

impl RoomId {
    /// Create a new room ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse lifecycle state of a game. Transitions are one-directional.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Participants exchange messages against the round budget.
    Negotiating,
    /// Negotiation is over; each side owes one private choice.
    Deciding,
    /// Payoffs applied. Terminal.
    Resolved,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Negotiating => write!(f, "negotiating"),
            Phase::Deciding => write!(f, "deciding"),
            Phase::Resolved => write!(f, "resolved"),
        }
    }
}

/// Full state of one game.
///
/// Created by the store, mutated only by the store, and handed to callers
/// as snapshots. The transcript uses a persistent vector so snapshots clone
/// in O(1) regardless of chat length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Store-allocated identifier.
    pub id: GameId,

    /// Current lifecycle phase.
    pub phase: Phase,

    /// Total stake at risk, fixed at creation to `2 × buy_in`.
    pub pot: u64,

    /// Stake each side committed.
    pub buy_in: u64,

    /// Configured number of negotiation exchanges.
    pub chat_rounds: u32,

    /// First participant slot (the challenger). Roles never swap.
    pub a: Participant,

    /// Second participant slot (the challenged).
    pub b: Participant,

    /// Ordered negotiation transcript. Append-only.
    pub chat: Vector<ChatEntry>,

    /// Opaque room/context the game belongs to.
    pub room: RoomId,

    /// When the record was created.
    pub created_at: OffsetDateTime,

    /// When the record resolved. Set exactly once.
    pub resolved_at: Option<OffsetDateTime>,
}

impl GameRecord {
    /// Create a fresh record in the negotiating phase.
    ///
    /// The pot and round budget are captured from `config` at this moment
    /// and never change afterwards.
    #[must_use]
    pub fn new(
        id: GameId,
        config: &GameConfig,
        a: ParticipantProfile,
        b: ParticipantProfile,
        room: RoomId,
    ) -> Self {
        Self {
            id,
            phase: Phase::Negotiating,
            pot: config.buy_in * 2,
            buy_in: config.buy_in,
            chat_rounds: config.chat_rounds,
            a: Participant::bind(a),
            b: Participant::bind(b),
            chat: Vector::new(),
            room,
            created_at: OffsetDateTime::now_utc(),
            resolved_at: None,
        }
    }

    /// Completed negotiation rounds: `chat.len() / 2`, always derived.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        (self.chat.len() / 2) as u32
    }

    /// Total messages allowed before the phase flips to deciding.
    #[must_use]
    pub fn message_budget(&self) -> usize {
        self.chat_rounds as usize * 2
    }

    /// Check whether an identity is bound to either slot.
    #[must_use]
    pub fn is_participant(&self, id: &ParticipantId) -> bool {
        self.a.id == *id || self.b.id == *id
    }

    /// Get the slot bound to an identity, if any.
    #[must_use]
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        if self.a.id == *id {
            Some(&self.a)
        } else if self.b.id == *id {
            Some(&self.b)
        } else {
            None
        }
    }

    /// Mutable slot lookup, for the store only.
    pub(crate) fn participant_mut(&mut self, id: &ParticipantId) -> Option<&mut Participant> {
        if self.a.id == *id {
            Some(&mut self.a)
        } else if self.b.id == *id {
            Some(&mut self.b)
        } else {
            None
        }
    }

    /// Get the opponent of an identity, if the identity is bound.
    #[must_use]
    pub fn opponent_of(&self, id: &ParticipantId) -> Option<&Participant> {
        if self.a.id == *id {
            Some(&self.b)
        } else if self.b.id == *id {
            Some(&self.a)
        } else {
            None
        }
    }

    /// Check whether both sides have committed a choice.
    #[must_use]
    pub fn both_decided(&self) -> bool {
        self.a.has_decided() && self.b.has_decided()
    }
}
