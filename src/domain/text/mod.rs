pub mod pdf;
pub mod payload;
pub mod transcript;
pub mod video_id;

pub use payload::TextPayload;
pub use pdf::join_pages;
pub use transcript::{join_captions, CaptionEntry};
pub use video_id::{parse_video_id, VideoId};
