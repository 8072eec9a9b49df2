//! Fixed-output capture backends used by demos and tests.

use crate::capture::capability::{
    AudioClip, CaptureError, CaptureResult, ImageSource, TextExtractor, Transcriber,
};

/// Transcript returned by [`SimulatedTranscriber::default`].
pub const SIMULATED_TRANSCRIPT: &str = "This is a simulated voice transcript. In a real implementation, this would be the transcribed audio from your recording.";

/// OCR text returned by [`SimulatedTextExtractor::default`].
pub const SIMULATED_EXTRACTED_TEXT: &str =
    "Extracted text from image would appear here. This is a demonstration of the OCR feature.";

/// Transcriber that answers every non-empty recording with the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedTranscriber {
    transcript: String,
}

impl SimulatedTranscriber {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

impl Default for SimulatedTranscriber {
    fn default() -> Self {
        Self::new(SIMULATED_TRANSCRIPT)
    }
}

impl Transcriber for SimulatedTranscriber {
    async fn transcribe(&self, audio: &AudioClip) -> CaptureResult<String> {
        if audio.is_empty() {
            return Err(CaptureError::EmptyRecording);
        }
        Ok(self.transcript.clone())
    }
}

/// Text extractor that answers every non-empty image with the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedTextExtractor {
    text: String,
}

impl SimulatedTextExtractor {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for SimulatedTextExtractor {
    fn default() -> Self {
        Self::new(SIMULATED_EXTRACTED_TEXT)
    }
}

impl TextExtractor for SimulatedTextExtractor {
    async fn extract_text(&self, image: &ImageSource) -> CaptureResult<String> {
        if image.is_empty() {
            return Err(CaptureError::EmptyImage);
        }
        Ok(self.text.clone())
    }
}
