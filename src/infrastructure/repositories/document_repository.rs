use crate::domain::speech::SpeechError;

/// Repository for reading text out of uploaded documents.
///
/// Parsing is CPU-bound, so the trait is synchronous and callers run it on
/// the blocking pool.
pub trait DocumentRepository: Send + Sync {
    /// Per-page text, in page order. A page without extractable text is `None`.
    ///
    /// # Errors
    /// `Document` when the upload cannot be opened as a document at all
    fn page_texts(&self, document: &[u8]) -> Result<Vec<Option<String>>, SpeechError>;
}
