use super::transcript_repository::TranscriptRepository;
use crate::domain::speech::SpeechError;
use crate::domain::text::{CaptionEntry, VideoId};
use crate::infrastructure::config::Config;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Caption track in YouTube's `json3` timed-text format
#[derive(Debug, Deserialize)]
struct TimedTextTrack {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedTextEvent {
    #[serde(default)]
    t_start_ms: u64,
    #[serde(default)]
    d_duration_ms: u64,
    /// Set on events that only append a line break to the previous one
    a_append: Option<u8>,
    segs: Option<Vec<TimedTextSegment>>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSegment {
    #[serde(default)]
    utf8: String,
}

impl TimedTextTrack {
    fn into_entries(self) -> Vec<CaptionEntry> {
        self.events
            .into_iter()
            .filter(|event| event.a_append != Some(1))
            .filter_map(|event| {
                let segs = event.segs?;
                Some(CaptionEntry {
                    text: segs.into_iter().map(|seg| seg.utf8).collect(),
                    start: event.t_start_ms as f64 / 1000.0,
                    duration: event.d_duration_ms as f64 / 1000.0,
                })
            })
            .collect()
    }
}

/// Transcript repository backed by YouTube's timed-text endpoint
pub struct YoutubeTranscriptRepository {
    base_url: String,
    language: String,
    http_client: reqwest::Client,
}

impl YoutubeTranscriptRepository {
    pub fn new(
        base_url: String,
        language: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            language,
            http_client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.transcript_base_url.clone(),
            config.transcript_language.clone(),
            config.provider_timeout(),
        )
    }
}

#[async_trait]
impl TranscriptRepository for YoutubeTranscriptRepository {
    async fn fetch_transcript(&self, video_id: &VideoId) -> Result<Vec<CaptionEntry>, SpeechError> {
        tracing::info!(
            video_id = %video_id,
            language = %self.language,
            "Fetching video transcript"
        );

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[
                ("v", video_id.as_str()),
                ("lang", self.language.as_str()),
                ("fmt", "json3"),
            ])
            .send()
            .await
            .map_err(|e| SpeechError::TranscriptFetchFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SpeechError::TranscriptFetchFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(SpeechError::TranscriptFetchFailed(format!(
                "transcript provider returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        // The endpoint answers 200 with an empty body when no track exists.
        if body.trim().is_empty() {
            return Err(SpeechError::TranscriptFetchFailed(format!(
                "Could not retrieve a transcript for the video {}: subtitles are disabled or unavailable",
                video_id
            )));
        }

        let track: TimedTextTrack = serde_json::from_str(&body)
            .map_err(|e| SpeechError::TranscriptFetchFailed(format!("unreadable caption track: {}", e)))?;

        Ok(track.into_entries())
    }
}
