//! In-memory state container for chapters and entries.
//!
//! # Responsibility
//! - Own every chapter/entry and the active-chapter selection.
//! - Be the single point of mutation; collaborators only read snapshots.
//!
//! # Invariants
//! - Chapter ids are unique within one store.
//! - Entry-level mutations only ever touch the active chapter.
//! - Unknown ids are silent no-ops, never errors.

pub mod journal_store;
