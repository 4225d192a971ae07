use serde::{Deserialize, Serialize};

/// Request for POST /api/tts
#[derive(Debug, Serialize, Deserialize)]
pub struct TextSpeechRequest {
    #[serde(default)]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Request for POST /api/youtube
#[derive(Debug, Serialize, Deserialize)]
pub struct YoutubeSpeechRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Successful response of every synthesis endpoint
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioUrlResponse {
    pub audio_url: String,
}

/// Output encoding requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioFormat {
    #[serde(rename = "MP3")]
    Mp3,
}

/// Body sent to the provider's synthesis endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
    pub format: AudioFormat,
}
