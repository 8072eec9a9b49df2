//! `JournalStore` implementation.
//!
//! # Responsibility
//! - Create, rename and delete chapters; keep the chapter list ordered
//!   most-recently-created first.
//! - Append, edit and delete entries of the active chapter.
//! - Keep the active selection consistent when chapters are removed.
//!
//! # Invariants
//! - New chapters are prepended and become active.
//! - Entries are appended, so list order equals chronological order.
//! - Deleting the active chapter selects the first remaining chapter, or
//!   clears the selection when none remain.
//! - Entry mutations resolve the active id exactly; a missing or dangling
//!   selection turns them into no-ops.
//! - Chapter and entry ids are unique across the whole store, seeded
//!   input included.
//! - `revision` increases by one on every state change and never otherwise.

use crate::clock::{Clock, SystemClock};
use crate::model::chapter::{Chapter, ChapterId, UNTITLED_CHAPTER_TITLE};
use crate::model::entry::{EntryId, JournalEntry, NewEntry};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read-only copy of the store state handed to rendering collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalSnapshot {
    /// Sidebar order, most recently created first.
    pub chapters: Vec<Chapter>,
    pub active_chapter_id: Option<ChapterId>,
}

/// Owner of all chapter and entry state.
#[derive(Debug)]
pub struct JournalStore<C: Clock = SystemClock> {
    chapters: Vec<Chapter>,
    active_chapter_id: Option<ChapterId>,
    revision: u64,
    clock: C,
}

impl JournalStore<SystemClock> {
    /// Creates an empty store with no active chapter.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates a store seeded with `chapters`, selecting the first one.
    pub fn with_chapters(chapters: Vec<Chapter>) -> Self {
        Self::with_chapters_and_clock(chapters, SystemClock)
    }
}

impl Default for JournalStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> JournalStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            chapters: Vec::new(),
            active_chapter_id: None,
            revision: 0,
            clock,
        }
    }

    /// Creates a store from existing chapters using `clock` for later writes.
    ///
    /// Seeded chapters get the same guarantees as created ones:
    /// - a chapter whose id repeats an earlier one is dropped;
    /// - an entry whose id already appeared in any earlier chapter or
    ///   entry is dropped;
    /// - titles are trimmed, and blank titles become the untitled default.
    pub fn with_chapters_and_clock(chapters: Vec<Chapter>, clock: C) -> Self {
        let mut seen_chapters = HashSet::new();
        let mut seen_entries = HashSet::new();
        let mut unique = Vec::with_capacity(chapters.len());
        for mut chapter in chapters {
            if !seen_chapters.insert(chapter.id) {
                warn!(
                    "event=store_seed module=store status=skipped reason=duplicate_chapter_id chapter_id={}",
                    chapter.id
                );
                continue;
            }

            let title = chapter.title.trim();
            chapter.title = if title.is_empty() {
                warn!(
                    "event=store_seed module=store status=normalized reason=blank_title chapter_id={}",
                    chapter.id
                );
                UNTITLED_CHAPTER_TITLE.to_string()
            } else {
                title.to_string()
            };

            let chapter_id = chapter.id;
            chapter.entries.retain(|entry| {
                let fresh = seen_entries.insert(entry.id);
                if !fresh {
                    warn!(
                        "event=store_seed module=store status=skipped reason=duplicate_entry_id chapter_id={} entry_id={}",
                        chapter_id, entry.id
                    );
                }
                fresh
            });
            unique.push(chapter);
        }

        let active_chapter_id = unique.first().map(|chapter| chapter.id);
        debug!(
            "event=store_seed module=store status=ok chapters={}",
            unique.len()
        );
        Self {
            chapters: unique,
            active_chapter_id,
            revision: 0,
            clock,
        }
    }

    /// All chapters in sidebar order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, chapter_id: ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|chapter| chapter.id == chapter_id)
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Raw selection as last assigned; may point at a deleted chapter.
    pub fn active_chapter_id(&self) -> Option<ChapterId> {
        self.active_chapter_id
    }

    /// Chapter to display as active.
    ///
    /// Resolves the selection exactly, falling back to the first chapter when
    /// the selection is missing or dangling. `None` only for an empty store.
    pub fn active_chapter(&self) -> Option<&Chapter> {
        self.active_chapter_id
            .and_then(|id| self.chapter(id))
            .or_else(|| self.chapters.first())
    }

    /// Chapter matching the selection exactly, without any fallback.
    ///
    /// This is the chapter entry mutations operate on.
    pub fn selected_chapter(&self) -> Option<&Chapter> {
        self.active_chapter_id.and_then(|id| self.chapter(id))
    }

    /// Monotonic change counter; collaborators re-render when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> JournalSnapshot {
        JournalSnapshot {
            chapters: self.chapters.clone(),
            active_chapter_id: self.active_chapter_id,
        }
    }

    /// Creates a chapter, prepends it and makes it active.
    ///
    /// Callers are expected to pass a non-blank title; blank input is stored
    /// as the untitled default rather than rejected.
    pub fn create_chapter(&mut self, title: impl Into<String>) -> ChapterId {
        let chapter = Chapter::new(title, self.clock.now());
        let chapter_id = chapter.id;
        self.chapters.insert(0, chapter);
        self.active_chapter_id = Some(chapter_id);
        self.bump();
        debug!(
            "event=chapter_create module=store status=ok chapter_id={} chapters={}",
            chapter_id,
            self.chapters.len()
        );
        chapter_id
    }

    /// Replaces a chapter title and refreshes `updated_at`.
    ///
    /// Returns `false` without touching state when the id is unknown or the
    /// title is blank after trimming.
    pub fn update_chapter_title(&mut self, chapter_id: ChapterId, title: &str) -> bool {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            debug!(
                "event=chapter_rename module=store status=noop reason=blank_title chapter_id={}",
                chapter_id
            );
            return false;
        }

        let now = self.clock.now();
        let Some(chapter) = self.chapters.iter_mut().find(|c| c.id == chapter_id) else {
            debug!(
                "event=chapter_rename module=store status=noop reason=chapter_not_found chapter_id={}",
                chapter_id
            );
            return false;
        };
        chapter.title = trimmed.to_string();
        chapter.touch(now);
        self.bump();
        debug!(
            "event=chapter_rename module=store status=ok chapter_id={}",
            chapter_id
        );
        true
    }

    /// Removes a chapter together with all of its entries.
    ///
    /// When the removed chapter was active, the first remaining chapter
    /// becomes active, or the selection is cleared if the store is now empty.
    pub fn delete_chapter(&mut self, chapter_id: ChapterId) -> bool {
        let Some(index) = self.chapters.iter().position(|c| c.id == chapter_id) else {
            debug!(
                "event=chapter_delete module=store status=noop reason=chapter_not_found chapter_id={}",
                chapter_id
            );
            return false;
        };

        let removed = self.chapters.remove(index);
        if self.active_chapter_id == Some(chapter_id) {
            self.active_chapter_id = self.chapters.first().map(|chapter| chapter.id);
        }
        self.bump();
        debug!(
            "event=chapter_delete module=store status=ok chapter_id={} dropped_entries={} chapters={}",
            chapter_id,
            removed.entries.len(),
            self.chapters.len()
        );
        true
    }

    /// Reassigns the selection without checking that the chapter exists.
    pub fn set_active_chapter_id(&mut self, chapter_id: ChapterId) {
        if self.active_chapter_id == Some(chapter_id) {
            return;
        }
        self.active_chapter_id = Some(chapter_id);
        self.bump();
        if self.chapter(chapter_id).is_none() {
            debug!(
                "event=chapter_select module=store status=dangling chapter_id={}",
                chapter_id
            );
        }
    }

    /// Appends a new entry to the active chapter.
    ///
    /// Returns the generated entry id, or `None` when no chapter matches the
    /// current selection.
    pub fn add_entry(&mut self, payload: NewEntry) -> Option<EntryId> {
        let now = self.clock.now();
        let kind = payload.kind;
        let Some(chapter) = self.selected_chapter_mut() else {
            debug!(
                "event=entry_add module=store status=noop reason=no_active_chapter kind={}",
                kind.as_str()
            );
            return None;
        };

        let entry = JournalEntry::from_payload(payload, now);
        let entry_id = entry.id;
        chapter.entries.push(entry);
        chapter.touch(now);
        let chapter_id = chapter.id;
        self.bump();
        debug!(
            "event=entry_add module=store status=ok chapter_id={} entry_id={} kind={}",
            chapter_id,
            entry_id,
            kind.as_str()
        );
        Some(entry_id)
    }

    /// Replaces the content of one entry in the active chapter.
    ///
    /// Type and image reference are left untouched. No-op when the entry is
    /// not part of the active chapter.
    pub fn update_entry(&mut self, entry_id: EntryId, content: impl Into<String>) -> bool {
        let now = self.clock.now();
        let Some(chapter) = self.selected_chapter_mut() else {
            debug!(
                "event=entry_update module=store status=noop reason=no_active_chapter entry_id={}",
                entry_id
            );
            return false;
        };
        let Some(entry) = chapter.entries.iter_mut().find(|e| e.id == entry_id) else {
            debug!(
                "event=entry_update module=store status=noop reason=entry_not_found entry_id={}",
                entry_id
            );
            return false;
        };

        entry.content = content.into();
        chapter.touch(now);
        self.bump();
        debug!(
            "event=entry_update module=store status=ok entry_id={}",
            entry_id
        );
        true
    }

    /// Removes one entry from the active chapter.
    pub fn delete_entry(&mut self, entry_id: EntryId) -> bool {
        let now = self.clock.now();
        let Some(chapter) = self.selected_chapter_mut() else {
            debug!(
                "event=entry_delete module=store status=noop reason=no_active_chapter entry_id={}",
                entry_id
            );
            return false;
        };
        let Some(index) = chapter.entries.iter().position(|e| e.id == entry_id) else {
            debug!(
                "event=entry_delete module=store status=noop reason=entry_not_found entry_id={}",
                entry_id
            );
            return false;
        };

        chapter.entries.remove(index);
        chapter.touch(now);
        self.bump();
        debug!(
            "event=entry_delete module=store status=ok entry_id={}",
            entry_id
        );
        true
    }

    fn selected_chapter_mut(&mut self) -> Option<&mut Chapter> {
        let active_id = self.active_chapter_id?;
        self.chapters.iter_mut().find(|chapter| chapter.id == active_id)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
