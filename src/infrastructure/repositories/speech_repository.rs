use crate::domain::speech::{SpeechError, SynthesisRequest};
use async_trait::async_trait;

/// Repository for speech synthesis operations.
/// Abstracts the external text-to-speech provider.
///
/// Implementations must:
/// - Issue exactly one provider call per method call (no retries)
/// - Surface the provider's status and raw body on non-200 responses
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Request synthesis and return the location of the generated audio
    ///
    /// # Errors
    /// `Provider` for non-200 responses, `MissingAudioUrl` when the provider
    /// answers 200 without a playable location, `ProviderUnreachable` on
    /// transport failures or timeouts
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<String, SpeechError>;

    /// Fetch the provider's voice catalog as-is
    async fn list_voices(&self) -> Result<serde_json::Value, SpeechError>;
}
