//! Capture capabilities that turn recordings and pictures into text.
//!
//! Real speech-to-text and OCR live outside core; this module only defines
//! the async contracts the entry-creation flow awaits, plus simulated
//! implementations that return fixed output.

pub mod capability;
pub mod simulated;
