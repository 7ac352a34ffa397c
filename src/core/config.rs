//! Game configuration and override resolution.
//!
//! Three numeric settings drive every game:
//! - `buy_in`: each side's stake; the pot is always twice this.
//! - `chat_rounds`: negotiation length, one exchange per round (two
//!   messages, one from each side).
//! - `announce_delay`: advisory pacing for a caller's outbound
//!   announcements. The engine itself never reads it.
//!
//! Hosts supply [`ConfigOverrides`] (typically read from their settings
//! source); anything left unset falls back to the fixed defaults.

use std::time::Duration;

/// Resolved configuration snapshot.
///
/// Fixed for the lifetime of the store that holds it; games capture
/// `buy_in` and `chat_rounds` at creation, so a record's terms never change
/// mid-flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Stake each participant commits. Pot = `2 × buy_in`.
    pub buy_in: u64,

    /// Number of negotiation exchanges before decisions are required.
    pub chat_rounds: u32,

    /// Advisory delay between outbound announcements.
    pub announce_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            buy_in: 10,
            chat_rounds: 5,
            announce_delay: Duration::from_millis(45_000),
        }
    }
}

/// Caller-supplied overrides, merged over the defaults.
///
/// ## Example
///
/// ```
/// use split_or_steal::core::ConfigOverrides;
///
/// let config = ConfigOverrides::new()
///     .with_buy_in(500)
///     .with_chat_rounds(3)
///     .resolve();
///
/// assert_eq!(config.buy_in, 500);
/// assert_eq!(config.chat_rounds, 3);
/// // Unset fields keep their defaults.
/// assert_eq!(config.announce_delay.as_millis(), 45_000);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Override for [`GameConfig::buy_in`].
    pub buy_in: Option<u64>,

    /// Override for [`GameConfig::chat_rounds`].
    pub chat_rounds: Option<u32>,

    /// Override for [`GameConfig::announce_delay`].
    pub announce_delay: Option<Duration>,
}

impl ConfigOverrides {
    /// Create an empty override set (pure defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the buy-in.
    #[must_use]
    pub fn with_buy_in(mut self, buy_in: u64) -> Self {
        self.buy_in = Some(buy_in);
        self
    }

    /// Override the negotiation length.
    #[must_use]
    pub fn with_chat_rounds(mut self, rounds: u32) -> Self {
        self.chat_rounds = Some(rounds);
        self
    }

    /// Override the announcement delay.
    #[must_use]
    pub fn with_announce_delay(mut self, delay: Duration) -> Self {
        self.announce_delay = Some(delay);
        self
    }

    /// Merge these overrides over the defaults.
    #[must_use]
    pub fn resolve(self) -> GameConfig {
        let defaults = GameConfig::default();
        GameConfig {
            buy_in: self.buy_in.unwrap_or(defaults.buy_in),
            chat_rounds: self.chat_rounds.unwrap_or(defaults.chat_rounds),
            announce_delay: self.announce_delay.unwrap_or(defaults.announce_delay),
        }
    }
}
