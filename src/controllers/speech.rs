use axum::{
    extract::{
        multipart::{Multipart, MultipartError, MultipartRejection},
        rejection::JsonRejection,
        State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::{
        shared::ErrorDetail,
        speech::{
            AudioUrlResponse, SpeechService, SpeechServiceApi, SpeechSynthesisResult, TextSource,
            TextSpeechRequest, YoutubeSpeechRequest,
        },
    },
    error::{AppError, AppResult},
};

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
    max_upload_bytes: usize,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>, max_upload_bytes: usize) -> Self {
        Self {
            speech_service,
            max_upload_bytes,
        }
    }

    /// POST /api/tts - Narrate caller-supplied text
    pub async fn synthesize_text(
        State(controller): State<Arc<SpeechController>>,
        payload: Result<Json<TextSpeechRequest>, JsonRejection>,
    ) -> AppResult<Json<AudioUrlResponse>> {
        let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

        log_language(request.language.as_deref());

        controller
            .relay(TextSource::Literal(request.text), request.voice)
            .await
    }

    /// POST /api/youtube - Narrate the transcript of a YouTube video
    pub async fn synthesize_youtube(
        State(controller): State<Arc<SpeechController>>,
        payload: Result<Json<YoutubeSpeechRequest>, JsonRejection>,
    ) -> AppResult<Json<AudioUrlResponse>> {
        let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

        let url = request
            .url
            .ok_or_else(|| AppError::unprocessable(ErrorDetail::missing("url")))?;
        let voice = request
            .voice
            .filter(|voice| !voice.trim().is_empty())
            .ok_or_else(|| AppError::unprocessable(ErrorDetail::missing("voice")))?;

        log_language(request.language.as_deref());

        controller
            .relay(TextSource::Transcript { url }, Some(voice))
            .await
    }

    /// POST /api/pdf - Narrate an uploaded PDF document
    pub async fn synthesize_pdf(
        State(controller): State<Arc<SpeechController>>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> AppResult<Json<AudioUrlResponse>> {
        let mut multipart = multipart.map_err(|e| AppError::BadRequest(e.body_text()))?;
        let mut document = None;
        let mut voice = None;
        let mut language = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| controller.multipart_error(e))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| controller.multipart_error(e))?;
                    document = Some(bytes.to_vec());
                }
                "voice" => {
                    voice = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| controller.multipart_error(e))?,
                    );
                }
                "language" => {
                    language = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| controller.multipart_error(e))?,
                    );
                }
                other => {
                    tracing::debug!(field = other, "Ignoring unknown multipart field");
                }
            }
        }

        let document =
            document.ok_or_else(|| AppError::unprocessable(ErrorDetail::missing("file")))?;

        log_language(language.as_deref());

        controller.relay(TextSource::Document(document), voice).await
    }

    /// GET /api/voices - Provider voice catalog, passed through
    pub async fn list_voices(
        State(controller): State<Arc<SpeechController>>,
    ) -> AppResult<Json<serde_json::Value>> {
        let voices = controller
            .speech_service
            .list_voices()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to fetch voices: {}", e)))?;

        Ok(Json(voices))
    }

    /// GET /audio - Retired; audio is served by the provider
    pub async fn legacy_audio() -> AppError {
        AppError::NotFound("Audio is now served directly from the speech provider".to_string())
    }

    fn multipart_error(&self, err: MultipartError) -> AppError {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(format!(
                "Uploaded file exceeds {} bytes",
                self.max_upload_bytes
            ))
        } else {
            AppError::BadRequest(err.body_text())
        }
    }

    async fn relay(
        &self,
        source: TextSource,
        voice: Option<String>,
    ) -> AppResult<Json<AudioUrlResponse>> {
        let SpeechSynthesisResult {
            audio_url,
            voice,
            char_count,
        } = self.speech_service.synthesize(source, voice).await?;

        tracing::info!(voice = %voice, char_count, "Audio generated");

        Ok(Json(AudioUrlResponse { audio_url }))
    }
}

fn log_language(language: Option<&str>) {
    if let Some(language) = language {
        tracing::debug!(language, "Language hint received; voice selector is used as-is");
    }
}
