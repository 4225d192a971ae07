pub mod document_repository;
pub mod lopdf_document_repository;
pub mod murf_speech_repository;
pub mod speech_repository;
pub mod transcript_repository;
pub mod youtube_transcript_repository;

pub use document_repository::DocumentRepository;
pub use lopdf_document_repository::LopdfDocumentRepository;
pub use murf_speech_repository::MurfSpeechRepository;
pub use speech_repository::SpeechRepository;
pub use transcript_repository::TranscriptRepository;
pub use youtube_transcript_repository::YoutubeTranscriptRepository;
