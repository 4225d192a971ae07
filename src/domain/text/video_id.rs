use std::fmt;

const LONG_FORM_MARKER: &str = "youtube.com/watch";
const SHORT_FORM_MARKER: &str = "youtu.be/";

/// Identifier of a single YouTube video, derived from a watch or short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video id from a long-form (`youtube.com/watch?v=ID`) or
/// short-form (`youtu.be/ID`) link. Anything else yields `None`.
pub fn parse_video_id(url: &str) -> Option<VideoId> {
    let url = url.trim();
    // Fragments never carry the id.
    let url = url.split('#').next().unwrap_or(url);

    let candidate = if let Some(pos) = url.find(LONG_FORM_MARKER) {
        let after = &url[pos + LONG_FORM_MARKER.len()..];
        let query = after.split_once('?').map(|(_, q)| q)?;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("v="))?
    } else if let Some(pos) = url.find(SHORT_FORM_MARKER) {
        let after = &url[pos + SHORT_FORM_MARKER.len()..];
        after
            .split(|c| c == '?' || c == '&' || c == '/')
            .next()
            .unwrap_or_default()
    } else {
        return None;
    };

    if candidate.is_empty() {
        None
    } else {
        Some(VideoId(candidate.to_string()))
    }
}
