use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ChannelName, VideoId, VideoTimestamp};

const WATCH_URL: &str = "https://www.youtube.com/watch";
const EMBED_URL: &str = "https://www.youtube.com/embed";

/// A review video published on YouTube.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: VideoId,
    pub title: Option<String>,
    pub channel_name: Option<ChannelName>,
    pub published_at: Option<NaiveDateTime>,
    pub thumbnail_url: Option<String>,
}

/// Watch page link, jumping to `at` when it is past the start.
pub fn watch_url(video_id: &VideoId, at: Option<VideoTimestamp>) -> String {
    match at {
        Some(at) if at.get() > 0 => format!("{WATCH_URL}?v={video_id}&t={at}s"),
        _ => format!("{WATCH_URL}?v={video_id}"),
    }
}

/// Embeddable player link starting playback at `start`.
pub fn embed_url(video_id: &VideoId, start: VideoTimestamp) -> String {
    format!("{EMBED_URL}/{video_id}?start={start}&rel=0")
}
