//! Capability contracts for voice transcription and image text extraction.
//!
//! # Invariants
//! - Implementations never mutate journal state; the caller decides whether
//!   and where to store the returned text.
//! - Empty input is rejected before any work is attempted.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CaptureResult<T> = Result<T, CaptureError>;

/// Raw voice recording handed to a [`Transcriber`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub duration_secs: u32,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>, duration_secs: u32) -> Self {
        Self {
            bytes,
            duration_secs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Recording length as `m:ss`.
    pub fn duration_label(&self) -> String {
        format!("{}:{:02}", self.duration_secs / 60, self.duration_secs % 60)
    }
}

/// Picture reference, typically a `data:` URL produced by a file picker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageSource {
    pub data_url: String,
}

impl ImageSource {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data_url.trim().is_empty()
    }
}

/// Speech-to-text capability.
#[allow(async_fn_in_trait)]
pub trait Transcriber {
    async fn transcribe(&self, audio: &AudioClip) -> CaptureResult<String>;
}

/// OCR capability.
#[allow(async_fn_in_trait)]
pub trait TextExtractor {
    async fn extract_text(&self, image: &ImageSource) -> CaptureResult<String>;
}

/// Capture failures surfaced to the entry-creation flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Recording contains no audio data.
    EmptyRecording,
    /// Image reference is blank.
    EmptyImage,
    /// Backend is not reachable or not configured.
    Unavailable(String),
    /// Backend ran but could not produce text.
    Failed(String),
}

impl Display for CaptureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRecording => write!(f, "recording is empty"),
            Self::EmptyImage => write!(f, "image is empty"),
            Self::Unavailable(details) => write!(f, "capture backend unavailable: {details}"),
            Self::Failed(details) => write!(f, "capture failed: {details}"),
        }
    }
}

impl Error for CaptureError {}
