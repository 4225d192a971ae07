/// Text that is safe to forward to the speech provider.
///
/// Construction fails for empty or whitespace-only input, so holding a
/// `TextPayload` means the provider will never be called with nothing to say.
/// The original text is kept verbatim (no trimming).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPayload(String);

impl TextPayload {
    pub fn new(text: String) -> Option<Self> {
        if text.trim().is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
