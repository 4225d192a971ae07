/// Failures of the text-acquisition and speech-relay pipeline.
///
/// Every variant is scoped to a single request; the handler boundary turns
/// them into an `AppError` with the matching status code.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Text cannot be empty")]
    EmptyInput,
    #[error("Invalid YouTube URL format")]
    InvalidUrlFormat,
    #[error("No transcript available for this video")]
    NoTranscriptAvailable,
    #[error("Failed to fetch transcript: {0}")]
    TranscriptFetchFailed(String),
    #[error("No text could be extracted from the PDF")]
    NoTextExtracted,
    #[error("Could not read PDF document: {0}")]
    Document(String),
    #[error("No audioFile URL in response")]
    MissingAudioUrl,
    #[error("Speech provider error: {body}")]
    Provider { status: u16, body: String },
    #[error("Speech provider unreachable: {0}")]
    ProviderUnreachable(String),
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}
