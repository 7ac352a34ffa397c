//! Participant identification and the two-way choice.
//!
//! ## ParticipantId
//!
//! Opaque caller-supplied identity. The engine never interprets it; it is
//! only compared for equality when binding decisions to slots and when
//! looking up a participant's active game.
//!
//! ## Choice
//!
//! The private commitment each participant makes once negotiation ends.
//! `SPLIT` and `STEAL` are the only wire tokens; anything else is a benign
//! parse failure the caller turns into a re-prompt.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Opaque identity of a participant.
///
/// Callers supply these (agent ids, user ids, whatever the host uses);
/// the engine only compares them for equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    /// Create a new participant ID.
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

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant's final commitment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// Cooperate: share the pot evenly if the opponent also splits.
    Split,
    /// Defect: take the whole pot if the opponent splits.
    Steal,
}

impl Choice {
    /// Scan free text for a choice keyword.
    ///
    /// `STEAL` takes precedence over `SPLIT` when both appear, matching how
    /// a one-word answer buried in a longer sentence is read. Returns `None`
    /// when neither keyword is present, in which case the caller should re-prompt.
    ///
    /// ```
    /// use split_or_steal::core::Choice;
    ///
    /// assert_eq!(Choice::detect("I choose SPLIT, I promise"), Some(Choice::Split));
    /// assert_eq!(Choice::detect("split... no wait, STEAL"), Some(Choice::Steal));
    /// assert_eq!(Choice::detect("let me think about it"), None);
    /// ```
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        let upper = text.to_ascii_uppercase();
        if upper.contains("STEAL") {
            Some(Self::Steal)
        } else if upper.contains("SPLIT") {
            Some(Self::Split)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::Split => write!(f, "SPLIT"),
            Choice::Steal => write!(f, "STEAL"),
        }
    }
}

/// Error returned when a string is not exactly one choice token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected SPLIT or STEAL")]
pub struct ParseChoiceError;

impl FromStr for Choice {
    type Err = ParseChoiceError;

    /// Parse exactly one token, case-insensitively.
    ///
    /// ```
    /// use split_or_steal::core::Choice;
    ///
    /// assert_eq!("steal".parse(), Ok(Choice::Steal));
    /// assert_eq!(" SPLIT ".parse(), Ok(Choice::Split));
    /// assert!("maybe".parse::<Choice>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SPLIT" => Ok(Self::Split),
            "STEAL" => Ok(Self::Steal),
            _ => Err(ParseChoiceError),
        }
    }
}

/// Inbound descriptor for one side of a new game.
///
/// Identity and display name are required; the wallet reference is an
/// opaque passthrough for hosts that settle payouts elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantProfile {
    /// Opaque identity.
    pub id: ParticipantId,

    /// Human-readable name (for announcements/display).
    pub name: String,

    /// Optional external wallet reference. Never interpreted.
    pub wallet: Option<String>,
}

impl ParticipantProfile {
    /// Create a new profile without a wallet reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(id),
            name: name.into(),
            wallet: None,
        }
    }

    /// Attach a wallet reference.
    #[must_use]
    pub fn with_wallet(mut self, wallet: impl Into<String>) -> Self {
        self.wallet = Some(wallet.into());
        self
    }
}

/// One of the two bound slots inside a game record.
///
/// `choice` stays unset until the decision phase; `payout` stays zero until
/// resolution. Both are bookkeeping values only; no settlement happens here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Opaque identity.
    pub id: ParticipantId,

    /// Human-readable name.
    pub name: String,

    /// Optional external wallet reference.
    pub wallet: Option<String>,

    /// Committed choice, set during the decision phase.
    pub choice: Option<Choice>,

    /// Share of the pot, set at resolution.
    pub payout: u64,
}

impl Participant {
    /// Bind a profile into a fresh slot.
    #[must_use]
    pub fn bind(profile: ParticipantProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            wallet: profile.wallet,
            choice: None,
            payout: 0,
        }
    }

    /// Check whether this participant has committed a choice.
    #[must_use]
    pub fn has_decided(&self) -> bool {
        self.choice.is_some()
    }
}
