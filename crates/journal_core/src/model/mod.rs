//! Journal domain model.
//!
//! # Responsibility
//! - Define the chapter and entry records owned by `JournalStore`.
//! - Keep wire names aligned with the UI contract (`type`, `imageUrl`,
//!   `createdAt`, `updatedAt`).
//!
//! # Invariants
//! - Every chapter and entry is identified by a non-nil v4 UUID.
//! - An entry belongs to exactly one chapter for its whole lifetime.

pub mod chapter;
pub mod entry;
