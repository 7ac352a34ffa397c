//! The payoff matrix and resolved-game snapshots.
//!
//! The matrix is a total function over the four choice combinations and
//! never creates or destroys value: the payouts sum to the pot unless both
//! sides steal, in which case they sum to zero.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::core::{Choice, GameId, Participant, ParticipantId};

/// Categorical outcome of a resolved game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Both cooperated; the pot was shared evenly.
    BothSplit,
    /// The first participant took the whole pot.
    ASteals,
    /// The second participant took the whole pot.
    BSteals,
    /// Both defected; nobody was paid.
    BothSteal,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::BothSplit => write!(f, "both_split"),
            Outcome::ASteals => write!(f, "a_steals"),
            Outcome::BSteals => write!(f, "b_steals"),
            Outcome::BothSteal => write!(f, "both_steal"),
        }
    }
}

/// Apply the payoff matrix to a pair of final choices.
///
/// Returns `(payout_a, payout_b, outcome)`. The pot is always `2 × buy_in`,
/// so the even split below is exact.
///
/// ```
/// use split_or_steal::engine::{payoff, Outcome};
/// use split_or_steal::core::Choice;
///
/// assert_eq!(payoff(20, Choice::Split, Choice::Split), (10, 10, Outcome::BothSplit));
/// assert_eq!(payoff(20, Choice::Steal, Choice::Split), (20, 0, Outcome::ASteals));
/// ```
#[must_use]
pub fn payoff(pot: u64, a: Choice, b: Choice) -> (u64, u64, Outcome) {
    match (a, b) {
        (Choice::Split, Choice::Split) => (pot / 2, pot / 2, Outcome::BothSplit),
        (Choice::Steal, Choice::Split) => (pot, 0, Outcome::ASteals),
        (Choice::Split, Choice::Steal) => (0, pot, Outcome::BSteals),
        (Choice::Steal, Choice::Steal) => (0, 0, Outcome::BothSteal),
    }
}

/// Immutable snapshot of a finished game.
///
/// Taken once, at resolution, and kept in the completed log for statistics.
/// Never re-enters the active set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    /// Identifier of the resolved game.
    pub game_id: GameId,

    /// First slot with final choice and payout.
    pub a: Participant,

    /// Second slot with final choice and payout.
    pub b: Participant,

    /// Pot that was at stake.
    pub pot: u64,

    /// Categorical outcome.
    pub outcome: Outcome,

    /// When resolution happened.
    pub resolved_at: OffsetDateTime,
}

impl GameResult {
    /// Check whether an identity played in this game.
    #[must_use]
    pub fn involves(&self, id: &ParticipantId) -> bool {
        self.a.id == *id || self.b.id == *id
    }

    /// Get the final slot for an identity, if it played.
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

    /// Check whether an identity walked away with a positive payout.
    #[must_use]
    pub fn is_win_for(&self, id: &ParticipantId) -> bool {
        self.participant(id).is_some_and(|p| p.payout > 0)
    }
}
