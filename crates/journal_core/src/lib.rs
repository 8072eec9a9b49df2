//! Core domain logic for the chapter journal.
//! This crate is the single source of truth for journal invariants.

pub mod capture;
pub mod clock;
pub mod config;
pub mod format;
pub mod logging;
pub mod model;
pub mod prompts;
pub mod sample;
pub mod service;
pub mod store;

pub use capture::capability::{
    AudioClip, CaptureError, CaptureResult, ImageSource, TextExtractor, Transcriber,
};
pub use capture::simulated::{SimulatedTextExtractor, SimulatedTranscriber};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, JournalConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::chapter::{Chapter, ChapterId, UNTITLED_CHAPTER_TITLE};
pub use model::entry::{EntryId, EntryType, JournalEntry, NewEntry};
pub use service::journal_service::{JournalService, JournalServiceError, ServiceResult};
pub use store::journal_store::{JournalSnapshot, JournalStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
