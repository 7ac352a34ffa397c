//! The per-process game directory.

use once_cell::sync::OnceCell;
use parking_lot::{Mutex, MutexGuard};

use crate::core::{ConfigOverrides, GameConfig, GameRecord, ParticipantId};
use crate::engine::GameStore;

/// Aggregate record of an identity's finished games.
///
/// A win is any game where the identity's payout was positive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParticipantStats {
    /// Finished games the identity took part in.
    pub played: usize,

    /// Finished games with a positive payout for the identity.
    pub wins: usize,
}

impl ParticipantStats {
    /// Finished games with a zero payout for the identity.
    #[must_use]
    pub fn losses(&self) -> usize {
        self.played - self.wins
    }
}

/// Read/query facade over one process-wide [`GameStore`].
///
/// The hosting process constructs exactly one of these at startup and hands
/// it (by reference or `Arc`) to every caller; there is no implicit global.
/// Configuration and the store materialize lazily on the first access and
/// are never re-resolved for the process lifetime.
///
/// The facade itself never mutates engine state; mutating calls go through
/// [`GameDirectory::engine`], whose mutex serializes every
/// read-modify-write sequence so that a game resolves exactly once even
/// when both decisions arrive on different threads.
///
/// ## Example
///
/// ```
/// use split_or_steal::core::{ConfigOverrides, ParticipantId, ParticipantProfile, RoomId};
/// use split_or_steal::directory::GameDirectory;
///
/// let directory = GameDirectory::new(ConfigOverrides::new().with_chat_rounds(1));
///
/// let game = directory
///     .engine()
///     .create_game(
///         ParticipantProfile::new("a-1", "Alice"),
///         ParticipantProfile::new("b-1", "Bob"),
///         RoomId::new("room-9"),
///     )
///     .unwrap();
///
/// let alice = ParticipantId::new("a-1");
/// assert_eq!(directory.active_game_for(&alice).unwrap().id, game.id);
/// ```
#[derive(Debug)]
pub struct GameDirectory {
    overrides: ConfigOverrides,
    inner: OnceCell<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: GameConfig,
    store: Mutex<GameStore>,
}

impl GameDirectory {
    /// Create a directory that will resolve `overrides` on first access.
    #[must_use]
    pub fn new(overrides: ConfigOverrides) -> Self {
        Self {
            overrides,
            inner: OnceCell::new(),
        }
    }

    fn inner(&self) -> &Inner {
        self.inner.get_or_init(|| {
            let config = self.overrides.resolve();
            Inner {
                config,
                store: Mutex::new(GameStore::new(config)),
            }
        })
    }

    /// Get the resolved configuration snapshot.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.inner().config
    }

    /// Lock the engine for a sequence of calls.
    ///
    /// Hold the guard across a whole read-modify-write interaction; the
    /// engine itself has no internal locking.
    pub fn engine(&self) -> MutexGuard<'_, GameStore> {
        self.inner().store.lock()
    }

    /// Find the active game an identity is bound to, as a snapshot.
    #[must_use]
    pub fn active_game_for(&self, id: &ParticipantId) -> Option<GameRecord> {
        self.engine().active_game_for(id).cloned()
    }

    /// Count an identity's finished games and wins.
    #[must_use]
    pub fn stats_for(&self, id: &ParticipantId) -> ParticipantStats {
        let engine = self.engine();
        let mut stats = ParticipantStats::default();
        for result in engine.completed_games() {
            if result.involves(id) {
                stats.played += 1;
                if result.is_win_for(id) {
                    stats.wins += 1;
                }
            }
        }
        stats
    }
}

impl Default for GameDirectory {
    fn default() -> Self {
        Self::new(ConfigOverrides::default())
    }
}
