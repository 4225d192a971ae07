use super::dto::{AudioFormat, SynthesisRequest};
use super::error::SpeechError;
use crate::domain::text::{join_captions, join_pages, parse_video_id, TextPayload};
use crate::infrastructure::repositories::{
    DocumentRepository, SpeechRepository, TranscriptRepository,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Where the text to narrate comes from.
#[derive(Debug, Clone)]
pub enum TextSource {
    /// Text supplied by the caller.
    Literal(String),
    /// Captions of the YouTube video behind `url`.
    Transcript { url: String },
    /// Text of an uploaded PDF document.
    Document(Vec<u8>),
}

impl TextSource {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "text",
            Self::Transcript { .. } => "youtube",
            Self::Document(_) => "pdf",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpeechSynthesisResult {
    pub audio_url: String,
    pub voice: String,
    pub char_count: usize,
}

pub struct SpeechService {
    speech_repo: Arc<dyn SpeechRepository>,
    transcript_repo: Arc<dyn TranscriptRepository>,
    document_repo: Arc<dyn DocumentRepository>,
    default_voice: String,
    pdf_page_separator: String,
}

impl SpeechService {
    pub fn new(
        speech_repo: Arc<dyn SpeechRepository>,
        transcript_repo: Arc<dyn TranscriptRepository>,
        document_repo: Arc<dyn DocumentRepository>,
        default_voice: String,
        pdf_page_separator: String,
    ) -> Self {
        Self {
            speech_repo,
            transcript_repo,
            document_repo,
            default_voice,
            pdf_page_separator,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Acquire text from `source` and relay it to the speech provider
    ///
    /// This operation:
    /// - Extracts text (verbatim, from captions, or from PDF pages)
    /// - Rejects empty text before any provider call
    /// - Issues exactly one synthesis call, without retries
    ///
    /// `voice` is forwarded as given; the configured default applies only when absent.
    async fn synthesize(
        &self,
        source: TextSource,
        voice: Option<String>,
    ) -> Result<SpeechSynthesisResult, SpeechError>;

    /// Fetch the provider's voice catalog, unmodified
    async fn list_voices(&self) -> Result<serde_json::Value, SpeechError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize(
        &self,
        source: TextSource,
        voice: Option<String>,
    ) -> Result<SpeechSynthesisResult, SpeechError> {
        let source_kind = source.kind();

        // 1. Obtain text
        let payload = self.acquire_text(source).await?;

        // 2. Resolve voice
        let voice = self.resolve_voice(voice);

        tracing::info!(
            source = source_kind,
            voice = %voice,
            text_length = payload.char_count(),
            "Relaying text to speech provider"
        );

        // 3. Single provider call
        let char_count = payload.char_count();
        let request = SynthesisRequest {
            text: payload.into_inner(),
            voice_id: voice.clone(),
            format: AudioFormat::Mp3,
        };
        let audio_url = self.speech_repo.synthesize(&request).await?;

        Ok(SpeechSynthesisResult {
            audio_url,
            voice,
            char_count,
        })
    }

    async fn list_voices(&self) -> Result<serde_json::Value, SpeechError> {
        self.speech_repo.list_voices().await
    }
}

impl SpeechService {
    async fn acquire_text(&self, source: TextSource) -> Result<TextPayload, SpeechError> {
        match source {
            TextSource::Literal(text) => TextPayload::new(text).ok_or(SpeechError::EmptyInput),
            TextSource::Transcript { url } => {
                let video_id = parse_video_id(&url).ok_or(SpeechError::InvalidUrlFormat)?;
                let entries = self.transcript_repo.fetch_transcript(&video_id).await?;

                tracing::debug!(
                    video_id = %video_id,
                    caption_count = entries.len(),
                    "Transcript fetched"
                );

                TextPayload::new(join_captions(&entries)).ok_or(SpeechError::NoTranscriptAvailable)
            }
            TextSource::Document(bytes) => {
                let document_repo = self.document_repo.clone();
                let document_size = bytes.len();
                let pages = tokio::task::spawn_blocking(move || document_repo.page_texts(&bytes))
                    .await
                    .map_err(|e| SpeechError::Document(format!("extraction task failed: {}", e)))??;

                tracing::debug!(
                    document_size,
                    page_count = pages.len(),
                    extracted_pages = pages.iter().filter(|p| p.is_some()).count(),
                    "PDF pages extracted"
                );

                TextPayload::new(join_pages(pages, &self.pdf_page_separator))
                    .ok_or(SpeechError::NoTextExtracted)
            }
        }
    }

    fn resolve_voice(&self, voice: Option<String>) -> String {
        voice.unwrap_or_else(|| self.default_voice.clone())
    }
}
