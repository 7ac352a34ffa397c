//! Negotiation transcript entries.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::participant::ParticipantId;

/// One message in a game's negotiation transcript.
///
/// Entries are append-only: once accepted they are never mutated or removed.
/// The timestamp is assigned by the engine when the entry is accepted, not
/// by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Identity of the speaker.
    pub speaker: ParticipantId,

    /// Display name of the speaker at the time of sending.
    pub speaker_name: String,

    /// Free-form message text.
    pub text: String,

    /// When the engine accepted the entry.
    pub sent_at: OffsetDateTime,
}

impl ChatEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        speaker: ParticipantId,
        speaker_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            speaker,
            speaker_name: speaker_name.into(),
            text: text.into(),
            sent_at: OffsetDateTime::now_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_entry_new() {
        let entry = ChatEntry::new(ParticipantId::new("a-1"), "Alice", "trust me");

        assert_eq!(entry.speaker, ParticipantId::new("a-1"));
        assert_eq!(entry.speaker_name, "Alice");
        assert_eq!(entry.text, "trust me");
    }

    #[test]
    fn test_serialization() {
        let entry = ChatEntry::new(ParticipantId::new("a-1"), "Alice", "trust me");
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: ChatEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
