use chrono::{Duration, TimeZone, Utc};
use journal_core::{EntryType, JournalStore, ManualClock, NewEntry};
use std::collections::HashSet;
use uuid::Uuid;

fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap())
}

#[test]
fn new_store_is_empty_without_selection() {
    let store = JournalStore::new();
    assert!(store.is_empty());
    assert_eq!(store.active_chapter_id(), None);
    assert!(store.active_chapter().is_none());
}

#[test]
fn create_chapter_prepends_and_activates() {
    let mut store = JournalStore::with_clock(clock());
    let a = store.create_chapter("A");
    let b = store.create_chapter("B");

    let titles: Vec<&str> = store.chapters().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "A"]);
    assert_eq!(store.active_chapter_id(), Some(b));
    assert_ne!(a, b);

    let chapter = store.chapter(b).unwrap();
    assert!(chapter.is_empty());
    assert_eq!(chapter.created_at, chapter.updated_at);
}

#[test]
fn ids_are_unique_across_chapters_and_entries() {
    let mut store = JournalStore::with_clock(clock());
    let mut chapter_ids = HashSet::new();
    let mut entry_ids = HashSet::new();

    for chapter_index in 0..5 {
        chapter_ids.insert(store.create_chapter(format!("Chapter {chapter_index}")));
        for entry_index in 0..10 {
            let id = store
                .add_entry(NewEntry::text(format!("entry {entry_index}")))
                .unwrap();
            entry_ids.insert(id);
        }
    }

    assert_eq!(chapter_ids.len(), 5);
    assert_eq!(entry_ids.len(), 50);
}

#[test]
fn entries_append_in_chronological_order() {
    let mut store = JournalStore::with_clock(clock());
    store.create_chapter("Daily");
    store.add_entry(NewEntry::text("x")).unwrap();
    store.add_entry(NewEntry::text("y")).unwrap();

    let contents: Vec<&str> = store
        .active_chapter()
        .unwrap()
        .entries
        .iter()
        .map(|e| e.content.as_str())
        .collect();
    assert_eq!(contents, vec!["x", "y"]);
}

#[test]
fn deleting_active_chapter_selects_first_remaining() {
    let mut store = JournalStore::with_clock(clock());
    let c2 = store.create_chapter("C2");
    let c1 = store.create_chapter("C1");
    assert_eq!(store.active_chapter_id(), Some(c1));

    assert!(store.delete_chapter(c1));
    assert_eq!(store.active_chapter_id(), Some(c2));
    assert_eq!(store.active_chapter().unwrap().id, c2);
}

#[test]
fn deleting_inactive_chapter_keeps_selection() {
    let mut store = JournalStore::with_clock(clock());
    let older = store.create_chapter("Older");
    let newer = store.create_chapter("Newer");

    assert!(store.delete_chapter(older));
    assert_eq!(store.active_chapter_id(), Some(newer));
    assert!(!store.delete_chapter(older));
}

#[test]
fn deleting_last_chapter_clears_selection_and_disables_entry_ops() {
    let mut store = JournalStore::with_clock(clock());
    let only = store.create_chapter("Only");
    let entry = store.add_entry(NewEntry::text("gone soon")).unwrap();

    assert!(store.delete_chapter(only));
    assert!(store.is_empty());
    assert_eq!(store.active_chapter_id(), None);
    assert!(store.active_chapter().is_none());

    assert_eq!(store.add_entry(NewEntry::text("orphan")), None);
    assert!(!store.update_entry(entry, "edit"));
    assert!(!store.delete_entry(entry));
}

#[test]
fn update_entry_with_unknown_id_changes_nothing() {
    let clock = clock();
    let mut store = JournalStore::with_clock(clock.clone());
    store.create_chapter("A");
    store.add_entry(NewEntry::text("a1")).unwrap();
    store.create_chapter("B");
    store.add_entry(NewEntry::text("b1")).unwrap();
    let before = store.snapshot();

    clock.advance(Duration::hours(1));
    assert!(!store.update_entry(Uuid::new_v4(), "new text"));
    assert!(!store.delete_entry(Uuid::new_v4()));

    assert_eq!(store.snapshot(), before);
}

#[test]
fn entry_ops_cannot_reach_inactive_chapter() {
    let mut store = JournalStore::with_clock(clock());
    let first = store.create_chapter("First");
    let entry = store.add_entry(NewEntry::text("original")).unwrap();
    store.create_chapter("Second");

    assert!(!store.update_entry(entry, "changed"));
    assert!(!store.delete_entry(entry));
    assert_eq!(store.chapter(first).unwrap().entries[0].content, "original");

    store.set_active_chapter_id(first);
    assert!(store.update_entry(entry, "changed"));
    assert_eq!(store.chapter(first).unwrap().entries[0].content, "changed");
}

#[test]
fn update_entry_replaces_content_only() {
    let mut store = JournalStore::with_clock(clock());
    store.create_chapter("Photos");
    let id = store.add_entry(NewEntry::image("img://abc", "")).unwrap();

    assert!(store.update_entry(id, "sunset"));
    let entry = store.active_chapter().unwrap().entry(id).unwrap();
    assert_eq!(entry.kind, EntryType::Image);
    assert_eq!(entry.image_url.as_deref(), Some("img://abc"));
    assert_eq!(entry.content, "sunset");
}

#[test]
fn blank_title_update_keeps_previous_title() {
    let clock = clock();
    let mut store = JournalStore::with_clock(clock.clone());
    let id = store.create_chapter("Keep me");
    let updated_at = store.chapter(id).unwrap().updated_at;

    clock.advance(Duration::minutes(1));
    assert!(!store.update_chapter_title(id, ""));
    assert!(!store.update_chapter_title(id, "   "));

    let chapter = store.chapter(id).unwrap();
    assert_eq!(chapter.title, "Keep me");
    assert_eq!(chapter.updated_at, updated_at);
}

#[test]
fn title_update_refreshes_updated_at() {
    let clock = clock();
    let mut store = JournalStore::with_clock(clock.clone());
    let id = store.create_chapter("Draft");
    let created_at = store.chapter(id).unwrap().created_at;

    clock.advance(Duration::minutes(3));
    assert!(store.update_chapter_title(id, "Final"));
    assert!(!store.update_chapter_title(Uuid::new_v4(), "Nope"));

    let chapter = store.chapter(id).unwrap();
    assert_eq!(chapter.title, "Final");
    assert_eq!(chapter.created_at, created_at);
    assert_eq!(chapter.updated_at, created_at + Duration::minutes(3));
}

#[test]
fn delete_entry_refreshes_updated_at() {
    let clock = clock();
    let mut store = JournalStore::with_clock(clock.clone());
    let id = store.create_chapter("Draft");
    let entry_id = store.add_entry(NewEntry::text("scratch")).unwrap();
    let created_at = store.chapter(id).unwrap().created_at;

    clock.advance(Duration::minutes(5));
    assert!(store.delete_entry(entry_id));
    assert!(!store.delete_entry(entry_id));

    let chapter = store.chapter(id).unwrap();
    assert!(chapter.is_empty());
    assert_eq!(chapter.created_at, created_at);
    assert_eq!(chapter.updated_at, created_at + Duration::minutes(5));
}

#[test]
fn selecting_unknown_chapter_falls_back_for_display_only() {
    let mut store = JournalStore::with_clock(clock());
    let older = store.create_chapter("Older");
    let newer = store.create_chapter("Newer");
    let ghost = Uuid::new_v4();

    store.set_active_chapter_id(ghost);
    assert_eq!(store.active_chapter_id(), Some(ghost));
    assert_eq!(store.active_chapter().unwrap().id, newer);
    assert!(store.selected_chapter().is_none());

    store.set_active_chapter_id(older);
    assert_eq!(store.selected_chapter().unwrap().id, older);
}

#[test]
fn trip_scenario_ends_with_single_revised_text_entry() {
    let mut store = JournalStore::with_clock(clock());
    store.create_chapter("Trip");
    let text = store.add_entry(NewEntry::text("Day one")).unwrap();
    let image = store.add_entry(NewEntry::image("img://abc", "")).unwrap();
    assert!(store.update_entry(text, "Day one, revised"));
    assert!(store.delete_entry(image));

    assert_eq!(store.len(), 1);
    let chapter = &store.chapters()[0];
    assert_eq!(chapter.title, "Trip");
    assert_eq!(chapter.entries.len(), 1);
    assert_eq!(chapter.entries[0].content, "Day one, revised");
    assert_eq!(chapter.entries[0].kind, EntryType::Text);
}
