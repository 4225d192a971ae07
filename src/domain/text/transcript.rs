use serde::{Deserialize, Serialize};

/// One caption fragment of a video transcript. Times are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionEntry {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Join caption fragments in the order the provider returned them,
/// separated by a single space.
pub fn join_captions(entries: &[CaptionEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
