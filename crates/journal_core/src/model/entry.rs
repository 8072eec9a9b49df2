//! Journal entry model.
//!
//! # Responsibility
//! - Define the timeline record appended to a chapter.
//! - Provide the creation payload (`NewEntry`) collaborators hand to the store.
//!
//! # Invariants
//! - `id`, `kind` and `created_at` are fixed at creation.
//! - `image_url` is only ever set on `EntryType::Image` entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one journal entry.
pub type EntryId = Uuid;

/// How an entry was captured.
///
/// Drives rendering only; the store treats every kind the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    /// Typed text.
    Text,
    /// Picture with optional alt text in `content`.
    Image,
    /// Transcribed voice note.
    Voice,
}

impl EntryType {
    /// Stable wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Voice => "voice",
        }
    }
}

/// One timeline item inside a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: EntryId,
    /// Serialized as `type` to match the UI contract.
    #[serde(rename = "type")]
    pub kind: EntryType,
    /// Written text, voice transcript, or image alt text (may be empty).
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Builds a full entry from a creation payload.
    ///
    /// # Invariants
    /// - A fresh v4 id is generated.
    /// - `image_url` is dropped unless `payload.kind == EntryType::Image`.
    pub fn from_payload(payload: NewEntry, created_at: DateTime<Utc>) -> Self {
        let image_url = match payload.kind {
            EntryType::Image => payload.image_url,
            EntryType::Text | EntryType::Voice => None,
        };
        Self {
            id: Uuid::new_v4(),
            kind: payload.kind,
            content: payload.content,
            image_url,
            created_at,
        }
    }

    pub fn is_voice(&self) -> bool {
        self.kind == EntryType::Voice
    }
}

/// Creation payload for `JournalStore::add_entry`.
///
/// The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewEntry {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: EntryType::Text,
            content: content.into(),
            image_url: None,
        }
    }

    pub fn voice(transcript: impl Into<String>) -> Self {
        Self {
            kind: EntryType::Voice,
            content: transcript.into(),
            image_url: None,
        }
    }

    /// Image payload; `alt_text` becomes the entry content.
    pub fn image(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            kind: EntryType::Image,
            content: alt_text.into(),
            image_url: Some(image_url.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryType, JournalEntry, NewEntry};
    use chrono::Utc;

    #[test]
    fn from_payload_keeps_image_url_for_images_only() {
        let now = Utc::now();
        let image = JournalEntry::from_payload(NewEntry::image("img://abc", ""), now);
        assert_eq!(image.image_url.as_deref(), Some("img://abc"));

        let mut stray = NewEntry::text("hello");
        stray.image_url = Some("img://stray".to_string());
        let text = JournalEntry::from_payload(stray, now);
        assert_eq!(text.kind, EntryType::Text);
        assert_eq!(text.image_url, None);
    }

    #[test]
    fn from_payload_generates_distinct_ids() {
        let now = Utc::now();
        let first = JournalEntry::from_payload(NewEntry::text("a"), now);
        let second = JournalEntry::from_payload(NewEntry::text("a"), now);
        assert!(!first.id.is_nil());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn entry_type_wire_names() {
        assert_eq!(EntryType::Text.as_str(), "text");
        assert_eq!(EntryType::Image.as_str(), "image");
        assert_eq!(EntryType::Voice.as_str(), "voice");
    }
}
