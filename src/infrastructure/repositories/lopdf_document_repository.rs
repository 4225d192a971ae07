use super::document_repository::DocumentRepository;
use crate::domain::speech::SpeechError;
use lopdf::Document;

/// PDF text extraction backed by `lopdf`
#[derive(Debug, Default)]
pub struct LopdfDocumentRepository;

impl LopdfDocumentRepository {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRepository for LopdfDocumentRepository {
    fn page_texts(&self, document: &[u8]) -> Result<Vec<Option<String>>, SpeechError> {
        let pdf = Document::load_mem(document).map_err(|e| SpeechError::Document(e.to_string()))?;

        let pages = pdf
            .get_pages()
            .keys()
            .map(|&page_number| match pdf.extract_text(&[page_number]) {
                Ok(text) => {
                    // lopdf terminates every text line with a newline
                    let text = text.trim_end_matches(|c: char| c == '\n' || c == '\r');
                    if text.trim().is_empty() {
                        None
                    } else {
                        Some(text.to_string())
                    }
                }
                Err(e) => {
                    tracing::debug!(page_number, error = %e, "Skipping page without extractable text");
                    None
                }
            })
            .collect();

        Ok(pages)
    }
}
