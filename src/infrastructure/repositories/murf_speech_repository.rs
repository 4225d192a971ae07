use super::speech_repository::SpeechRepository;
use crate::domain::speech::{SpeechError, SynthesisRequest};
use crate::infrastructure::config::Config;
use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::{Duration, Instant};

const API_KEY_HEADER: &str = "api-key";
const GENERATE_PATH: &str = "/speech/generate";
const VOICES_PATH: &str = "/speech/voices";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateSpeechResponse {
    audio_file: Option<String>,
}

/// Murf implementation of the speech repository
pub struct MurfSpeechRepository {
    base_url: String,
    api_key: SecretString,
    http_client: reqwest::Client,
}

impl MurfSpeechRepository {
    pub fn new(
        base_url: String,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http_client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.speech_api_base_url.clone(),
            SecretString::from(config.speech_api_key.expose_secret().to_string()),
            config.provider_timeout(),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_error_body(response: reqwest::Response) -> String {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    }
}

#[async_trait]
impl SpeechRepository for MurfSpeechRepository {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<String, SpeechError> {
        let start_time = Instant::now();

        let response = self
            .http_client
            .post(self.url(GENERATE_PATH))
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    voice = %request.voice_id,
                    text_length = request.text.len(),
                    "Speech provider call failed"
                );
                SpeechError::ProviderUnreachable(e.to_string())
            })?;

        let status = response.status();
        tracing::info!(
            provider = "murf",
            status = status.as_u16(),
            voice = %request.voice_id,
            latency_ms = start_time.elapsed().as_millis(),
            "Speech provider responded"
        );

        if status != StatusCode::OK {
            let body = Self::read_error_body(response).await;
            return Err(SpeechError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::ProviderUnreachable(e.to_string()))?;
        let parsed: GenerateSpeechResponse = serde_json::from_slice(&bytes)
            .map_err(|e| SpeechError::MalformedResponse(e.to_string()))?;

        match parsed.audio_file {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => {
                tracing::warn!(voice = %request.voice_id, "Provider returned no audio location");
                Err(SpeechError::MissingAudioUrl)
            }
        }
    }

    async fn list_voices(&self) -> Result<serde_json::Value, SpeechError> {
        let response = self
            .http_client
            .get(self.url(VOICES_PATH))
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| SpeechError::ProviderUnreachable(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = Self::read_error_body(response).await;
            return Err(SpeechError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SpeechError::MalformedResponse(e.to_string()))
    }
}
