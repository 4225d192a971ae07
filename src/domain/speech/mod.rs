pub mod dto;
pub mod error;
pub mod service;

pub use dto::{AudioFormat, AudioUrlResponse, SynthesisRequest, TextSpeechRequest, YoutubeSpeechRequest};
pub use error::SpeechError;
pub use service::{SpeechService, SpeechServiceApi, SpeechSynthesisResult, TextSource};
