//! Journal use-case service.
//!
//! # Responsibility
//! - Provide validated chapter/entry operations on top of `JournalStore`.
//! - Turn voice recordings and images into entries through the capture
//!   capabilities.
//!
//! # Invariants
//! - Titles and entry text are trimmed; blank values never reach the store.
//! - Capture results are awaited first and stored only on success.
//! - Entry operations target the exactly selected chapter, never a fallback.

use crate::capture::capability::{
    AudioClip, CaptureError, ImageSource, TextExtractor, Transcriber,
};
use crate::clock::{Clock, SystemClock};
use crate::model::chapter::{Chapter, ChapterId};
use crate::model::entry::{EntryId, NewEntry};
use crate::store::journal_store::JournalStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, JournalServiceError>;

/// Errors from journal use-case operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalServiceError {
    /// Chapter title is blank after trim.
    InvalidTitle,
    /// Entry text or transcript is blank after trim.
    EmptyContent,
    /// No chapter matches the current selection.
    NoActiveChapter,
    /// Target chapter does not exist.
    ChapterNotFound(ChapterId),
    /// Target entry is not part of the active chapter.
    EntryNotFound(EntryId),
    /// Transcription or text extraction failed.
    Capture(CaptureError),
}

impl Display for JournalServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle => write!(f, "chapter title must not be blank"),
            Self::EmptyContent => write!(f, "entry content must not be blank"),
            Self::NoActiveChapter => write!(f, "no active chapter selected"),
            Self::ChapterNotFound(id) => write!(f, "chapter not found: {id}"),
            Self::EntryNotFound(id) => write!(f, "entry not found in active chapter: {id}"),
            Self::Capture(err) => write!(f, "{err}"),
        }
    }
}

impl Error for JournalServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Capture(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CaptureError> for JournalServiceError {
    fn from(value: CaptureError) -> Self {
        Self::Capture(value)
    }
}

/// Journal service facade over one store and the capture backends.
pub struct JournalService<T, X, C = SystemClock>
where
    T: Transcriber,
    X: TextExtractor,
    C: Clock,
{
    store: JournalStore<C>,
    transcriber: T,
    extractor: X,
}

impl<T, X, C> JournalService<T, X, C>
where
    T: Transcriber,
    X: TextExtractor,
    C: Clock,
{
    pub fn new(store: JournalStore<C>, transcriber: T, extractor: X) -> Self {
        Self {
            store,
            transcriber,
            extractor,
        }
    }

    pub fn store(&self) -> &JournalStore<C> {
        &self.store
    }

    pub fn into_store(self) -> JournalStore<C> {
        self.store
    }

    /// Creates a chapter from user input and selects it.
    pub fn create_chapter(&mut self, title: impl Into<String>) -> ServiceResult<ChapterId> {
        let title = normalize_title(title.into())?;
        Ok(self.store.create_chapter(title))
    }

    /// Renames a chapter.
    ///
    /// Submitting the current title again succeeds without touching
    /// `updated_at`.
    pub fn rename_chapter(
        &mut self,
        chapter_id: ChapterId,
        title: impl Into<String>,
    ) -> ServiceResult<()> {
        let title = normalize_title(title.into())?;
        let chapter = self
            .store
            .chapter(chapter_id)
            .ok_or(JournalServiceError::ChapterNotFound(chapter_id))?;
        if chapter.title == title {
            return Ok(());
        }
        self.store.update_chapter_title(chapter_id, &title);
        Ok(())
    }

    pub fn delete_chapter(&mut self, chapter_id: ChapterId) -> ServiceResult<()> {
        if !self.store.delete_chapter(chapter_id) {
            return Err(JournalServiceError::ChapterNotFound(chapter_id));
        }
        Ok(())
    }

    /// Selects an existing chapter.
    pub fn select_chapter(&mut self, chapter_id: ChapterId) -> ServiceResult<()> {
        if self.store.chapter(chapter_id).is_none() {
            return Err(JournalServiceError::ChapterNotFound(chapter_id));
        }
        self.store.set_active_chapter_id(chapter_id);
        Ok(())
    }

    /// Stores a typed draft as a text entry.
    pub fn write_text_entry(&mut self, draft: impl Into<String>) -> ServiceResult<EntryId> {
        let content = normalize_content(draft.into())?;
        self.add(NewEntry::text(content))
    }

    /// Transcribes a recording and stores the transcript as a voice entry.
    pub async fn record_voice_entry(&mut self, audio: &AudioClip) -> ServiceResult<EntryId> {
        self.ensure_active_chapter()?;
        let transcript = self
            .transcriber
            .transcribe(audio)
            .await
            .inspect_err(|err| {
                warn!(
                    "event=voice_capture module=service status=error duration={} error={}",
                    audio.duration_label(),
                    err
                );
            })?;
        let content = normalize_content(transcript)?;
        let entry_id = self.add(NewEntry::voice(content))?;
        info!(
            "event=voice_capture module=service status=ok entry_id={} duration={}",
            entry_id,
            audio.duration_label()
        );
        Ok(entry_id)
    }

    /// Stores a picture as an image entry; `alt_text` may be blank.
    pub fn add_image_entry(
        &mut self,
        image: &ImageSource,
        alt_text: impl Into<String>,
    ) -> ServiceResult<EntryId> {
        if image.is_empty() {
            return Err(CaptureError::EmptyImage.into());
        }
        let alt_text = alt_text.into().trim().to_string();
        self.add(NewEntry::image(image.data_url.clone(), alt_text))
    }

    /// Extracts text from a picture and stores it as a text entry.
    pub async fn extract_image_text(&mut self, image: &ImageSource) -> ServiceResult<EntryId> {
        self.ensure_active_chapter()?;
        let text = self
            .extractor
            .extract_text(image)
            .await
            .inspect_err(|err| {
                warn!("event=image_extract module=service status=error error={err}");
            })?;
        let content = normalize_content(text)?;
        let entry_id = self.add(NewEntry::text(content))?;
        info!("event=image_extract module=service status=ok entry_id={entry_id}");
        Ok(entry_id)
    }

    /// Replaces the text of an entry in the active chapter.
    pub fn edit_entry(
        &mut self,
        entry_id: EntryId,
        content: impl Into<String>,
    ) -> ServiceResult<()> {
        let content = normalize_content(content.into())?;
        let chapter = self.ensure_active_chapter()?;
        if chapter.entry(entry_id).is_none() {
            return Err(JournalServiceError::EntryNotFound(entry_id));
        }
        self.store.update_entry(entry_id, content);
        Ok(())
    }

    pub fn delete_entry(&mut self, entry_id: EntryId) -> ServiceResult<()> {
        self.ensure_active_chapter()?;
        if !self.store.delete_entry(entry_id) {
            return Err(JournalServiceError::EntryNotFound(entry_id));
        }
        Ok(())
    }

    fn add(&mut self, payload: NewEntry) -> ServiceResult<EntryId> {
        self.store
            .add_entry(payload)
            .ok_or(JournalServiceError::NoActiveChapter)
    }

    fn ensure_active_chapter(&self) -> ServiceResult<&Chapter> {
        self.store
            .selected_chapter()
            .ok_or(JournalServiceError::NoActiveChapter)
    }
}

fn normalize_title(value: String) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(JournalServiceError::InvalidTitle);
    }
    Ok(trimmed.to_string())
}

fn normalize_content(value: String) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(JournalServiceError::EmptyContent);
    }
    Ok(trimmed.to_string())
}
