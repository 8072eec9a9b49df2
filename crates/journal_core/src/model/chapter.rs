//! Chapter model.
//!
//! # Responsibility
//! - Group journal entries into a titled, chronological timeline.
//!
//! # Invariants
//! - `entries` is in insertion order, which is chronological order.
//! - `title` is non-empty after trimming.
//! - `updated_at` is refreshed by every structural mutation of the chapter
//!   or of its entries; `created_at` never changes.

use crate::model::entry::{EntryId, JournalEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one chapter.
pub type ChapterId = Uuid;

/// Title used when a chapter is created from blank input.
pub const UNTITLED_CHAPTER_TITLE: &str = "Untitled chapter";

/// Titled collection of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
    pub entries: Vec<JournalEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chapter {
    /// Creates an empty chapter with a generated id.
    ///
    /// Blank titles are replaced by [`UNTITLED_CHAPTER_TITLE`].
    pub fn new(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4(), title, now)
    }

    /// Creates an empty chapter with a caller-provided id.
    ///
    /// Used by seeding paths where identity already exists.
    pub fn with_id(id: ChapterId, title: impl Into<String>, now: DateTime<Utc>) -> Self {
        let title = title.into();
        let trimmed = title.trim();
        let title = if trimmed.is_empty() {
            UNTITLED_CHAPTER_TITLE.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            id,
            title,
            entries: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn entry(&self, entry_id: EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == entry_id)
    }

    pub fn last_entry(&self) -> Option<&JournalEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
