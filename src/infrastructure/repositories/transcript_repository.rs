use crate::domain::speech::SpeechError;
use crate::domain::text::{CaptionEntry, VideoId};
use async_trait::async_trait;

/// Repository for video caption tracks.
#[async_trait]
pub trait TranscriptRepository: Send + Sync {
    /// Fetch the caption entries of a video, in timeline order
    ///
    /// # Errors
    /// `TranscriptFetchFailed` with the provider's reason when the video has
    /// no captions, is unavailable, or the provider cannot be reached
    async fn fetch_transcript(&self, video_id: &VideoId) -> Result<Vec<CaptionEntry>, SpeechError>;
}
