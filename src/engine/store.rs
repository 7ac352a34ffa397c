//! The session store: every active game, every finished one, one owner.
//!
//! `GameStore` is pure synchronous state. Every operation runs to
//! completion under `&mut self` with no suspension points, so the
//! read-check-write sequences inside (notably the resolve-on-second-choice
//! check in [`GameStore::record_decision`]) are atomic as long as access to
//! the store itself is serialized. Single-threaded hosts can own it
//! directly; multi-threaded hosts wrap it in the directory facade's mutex.
//!
//! ## Lifecycle
//!
//! Records are created in `Negotiating`, live in the active map keyed by
//! [`GameId`], and leave it exactly once: at resolution, when a
//! [`GameResult`] snapshot moves to the completed log. There is no other
//! deletion path: games do not expire or time out here.

use rustc_hash::FxHashMap;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::core::{
    ChatEntry, Choice, GameConfig, GameId, GameRecord, ParticipantId, ParticipantProfile, Phase,
    RoomId,
};

use super::error::Rejection;
use super::payoff::{payoff, GameResult};

/// Owner of all game state for one process.
///
/// ## Example
///
/// ```
/// use split_or_steal::core::{Choice, GameConfig, ParticipantId, ParticipantProfile, RoomId};
/// use split_or_steal::engine::GameStore;
///
/// let mut store = GameStore::new(GameConfig { chat_rounds: 1, ..GameConfig::default() });
///
/// let alice = ParticipantId::new("a-1");
/// let bob = ParticipantId::new("b-1");
/// let game = store
///     .create_game(
///         ParticipantProfile::new("a-1", "Alice"),
///         ParticipantProfile::new("b-1", "Bob"),
///         RoomId::new("room-9"),
///     )
///     .unwrap();
///
/// store.add_chat_message(game.id, alice.clone(), "Alice", "split with me?").unwrap();
/// store.add_chat_message(game.id, bob.clone(), "Bob", "deal").unwrap();
///
/// store.record_decision(game.id, &alice, Choice::Split).unwrap();
/// let resolved = store.record_decision(game.id, &bob, Choice::Split).unwrap();
///
/// assert_eq!(resolved.a.payout, game.buy_in);
/// assert_eq!(resolved.b.payout, game.buy_in);
/// ```
#[derive(Debug)]
pub struct GameStore {
    /// Resolved configuration applied to every new game.
    config: GameConfig,

    /// Active records keyed by id.
    active: FxHashMap<GameId, GameRecord>,

    /// Snapshots of finished games, in resolution order.
    completed: Vec<GameResult>,

    /// Next game ID to allocate.
    next_game_id: u64,
}

impl GameStore {
    /// Create an empty store with the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            active: FxHashMap::default(),
            completed: Vec::new(),
            next_game_id: 0,
        }
    }

    /// Get the configuration this store applies to new games.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn alloc_game_id(&mut self) -> GameId {
        let id = GameId::new(self.next_game_id);
        self.next_game_id += 1;
        id
    }

    // === Mutations ===

    /// Start a new game between two participants.
    ///
    /// The record starts in `Negotiating` with `pot = 2 × buy_in`, an empty
    /// transcript, and zero payouts.
    ///
    /// Rejected with [`Rejection::SelfChallenge`] when both profiles carry
    /// the same identity, and with [`Rejection::AlreadyPlaying`] when either
    /// identity is already bound to an active game; an identity plays at
    /// most one game at a time.
    pub fn create_game(
        &mut self,
        a: ParticipantProfile,
        b: ParticipantProfile,
        room: RoomId,
    ) -> Result<GameRecord, Rejection> {
        if a.id == b.id {
            return Err(Rejection::SelfChallenge);
        }
        for profile in [&a, &b] {
            if self.active_game_for(&profile.id).is_some() {
                return Err(Rejection::AlreadyPlaying(profile.id.clone()));
            }
        }

        let id = self.alloc_game_id();
        let record = GameRecord::new(id, &self.config, a, b, room);
        info!(
            game = %id,
            a = %record.a.name,
            b = %record.b.name,
            pot = record.pot,
            "game created"
        );
        let snapshot = record.clone();
        self.active.insert(id, record);
        Ok(snapshot)
    }

    /// Append a negotiation message to a game's transcript.
    ///
    /// Only records in `Negotiating` accept chat; a stray message after
    /// negotiation closed is refused without effect, which is a normal
    /// condition and not worth propagating loudly. The entry's timestamp is
    /// assigned here.
    ///
    /// When the appended entry fills the budget (`chat_rounds` messages per
    /// side), the phase flips to `Deciding`. Strict turn alternation is not
    /// enforced; the budget counts gross volume, two messages per round.
    pub fn add_chat_message(
        &mut self,
        game: GameId,
        speaker: ParticipantId,
        speaker_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<GameRecord, Rejection> {
        let record = self.active.get_mut(&game).ok_or(Rejection::GameNotFound)?;
        if record.phase != Phase::Negotiating {
            return Err(Rejection::WrongPhase {
                expected: Phase::Negotiating,
                actual: record.phase,
            });
        }

        record
            .chat
            .push_back(ChatEntry::new(speaker, speaker_name, text));

        if record.chat.len() >= record.message_budget() {
            record.phase = Phase::Deciding;
            info!(
                game = %game,
                rounds = record.current_round(),
                "negotiation complete, moving to decision phase"
            );
        }

        Ok(record.clone())
    }

    /// Record a participant's private choice.
    ///
    /// Only records in `Deciding` accept decisions, and only from one of
    /// the two bound identities. Re-submitting before the opponent decides
    /// overwrites the prior choice; the commitment becomes irrevocable the
    /// instant the second decision lands, because resolution runs
    /// synchronously in that same call and the returned record is already
    /// `Resolved`.
    pub fn record_decision(
        &mut self,
        game: GameId,
        speaker: &ParticipantId,
        choice: Choice,
    ) -> Result<GameRecord, Rejection> {
        let record = self.active.get_mut(&game).ok_or(Rejection::GameNotFound)?;
        if record.phase != Phase::Deciding {
            return Err(Rejection::WrongPhase {
                expected: Phase::Deciding,
                actual: record.phase,
            });
        }

        let Some(slot) = record.participant_mut(speaker) else {
            warn!(game = %game, speaker = %speaker, "decision from unknown participant");
            return Err(Rejection::UnknownParticipant);
        };
        slot.choice = Some(choice);
        debug!(game = %game, speaker = %speaker, "decision recorded");

        if record.both_decided() {
            Ok(self.resolve(game))
        } else {
            Ok(record.clone())
        }
    }

    /// Apply the payoff matrix and retire the record.
    ///
    /// Reachable only from the double-decision path in `record_decision`;
    /// anything else hitting this is an engine defect, hence the asserts.
    fn resolve(&mut self, game: GameId) -> GameRecord {
        let mut record = self
            .active
            .remove(&game)
            .expect("resolving game must be in the active set");
        debug_assert_eq!(record.phase, Phase::Deciding);

        let a = record.a.choice.expect("first choice set before resolve");
        let b = record.b.choice.expect("second choice set before resolve");
        let (payout_a, payout_b, outcome) = payoff(record.pot, a, b);
        debug_assert!(
            payout_a + payout_b == 0 || payout_a + payout_b == record.pot,
            "payoff matrix must conserve the pot"
        );

        record.a.payout = payout_a;
        record.b.payout = payout_b;
        record.phase = Phase::Resolved;
        let resolved_at = OffsetDateTime::now_utc();
        record.resolved_at = Some(resolved_at);

        info!(
            game = %game,
            a = %a,
            b = %b,
            outcome = %outcome,
            "game resolved"
        );

        self.completed.push(GameResult {
            game_id: record.id,
            a: record.a.clone(),
            b: record.b.clone(),
            pot: record.pot,
            outcome,
            resolved_at,
        });

        record
    }

    // === Lookups ===

    /// Get an active record by id.
    #[must_use]
    pub fn game(&self, id: GameId) -> Option<&GameRecord> {
        self.active.get(&id)
    }

    /// Iterate over all active records.
    pub fn active_games(&self) -> impl Iterator<Item = &GameRecord> {
        self.active.values()
    }

    /// Get all completed results, in resolution order.
    #[must_use]
    pub fn completed_games(&self) -> &[GameResult] {
        &self.completed
    }

    /// Find the active record an identity is bound to, if any.
    ///
    /// Creation keeps identities unique across active games, so there is at
    /// most one.
    #[must_use]
    pub fn active_game_for(&self, id: &ParticipantId) -> Option<&GameRecord> {
        self.active.values().find(|g| g.is_participant(id))
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
