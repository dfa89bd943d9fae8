use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    PositiveRate, ProductId, ReviewId, Sentiment, TypeConstraintError, VideoId, VideoTimestamp,
};
use crate::domain::video::{Video, embed_url, watch_url};

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_CHANNEL: &str = "Unknown Channel";

/// A product mention inside a video, with the reviewer's verdict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub video_id: VideoId,
    pub timestamp_seconds: VideoTimestamp,
    pub sentiment: Sentiment,
    pub summary: Option<String>,
    pub created_at: NaiveDateTime,
}

/// A review joined with its source video, which may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWithVideo {
    pub review: Review,
    pub video: Option<Video>,
}

/// Single-level review record as sent to clients.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReviewEntry {
    pub id: ReviewId,
    pub video_id: VideoId,
    pub timestamp_seconds: VideoTimestamp,
    pub sentiment: Sentiment,
    pub summary: Option<String>,
    pub video_title: String,
    pub video_thumbnail: String,
    pub channel_name: String,
    pub video_url: String,
    pub created_at: NaiveDateTime,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<ReviewWithVideo> for ReviewEntry {
    fn from(row: ReviewWithVideo) -> Self {
        let ReviewWithVideo { review, video } = row;
        let video = video.as_ref();

        let video_title = non_blank(video.and_then(|v| v.title.as_deref()))
            .unwrap_or(UNKNOWN_TITLE)
            .to_string();
        let video_thumbnail = non_blank(video.and_then(|v| v.thumbnail_url.as_deref()))
            .unwrap_or_default()
            .to_string();
        let channel_name = video
            .and_then(|v| v.channel_name.as_ref())
            .map(|c| c.as_str())
            .unwrap_or(UNKNOWN_CHANNEL)
            .to_string();

        Self {
            video_url: watch_url(&review.video_id, Some(review.timestamp_seconds)),
            id: review.id,
            video_id: review.video_id,
            timestamp_seconds: review.timestamp_seconds,
            sentiment: review.sentiment,
            summary: review.summary,
            video_title,
            video_thumbnail,
            channel_name,
            created_at: review.created_at,
        }
    }
}

/// Reviews of one product that come from the same video.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoGroup {
    pub video_id: VideoId,
    pub channel_name: String,
    pub title: String,
    pub thumbnail_url: String,
    pub video_url: String,
    /// Player link starting at the group's first mention.
    pub embed_url: String,
    pub reviews: Vec<ReviewEntry>,
}

/// Groups reviews by source video.
///
/// Groups appear in the order their video is first seen and keep the input
/// order of their reviews, so timestamp-sorted input stays sorted per group.
pub fn group_by_video(reviews: &[ReviewEntry]) -> Vec<VideoGroup> {
    let mut groups: Vec<VideoGroup> = Vec::new();
    let mut index: HashMap<&VideoId, usize> = HashMap::new();

    for review in reviews {
        let slot = *index.entry(&review.video_id).or_insert_with(|| {
            groups.push(VideoGroup {
                video_id: review.video_id.clone(),
                channel_name: review.channel_name.clone(),
                title: review.video_title.clone(),
                thumbnail_url: review.video_thumbnail.clone(),
                video_url: watch_url(&review.video_id, None),
                embed_url: embed_url(&review.video_id, review.timestamp_seconds),
                reviews: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].reviews.push(review.clone());
    }

    groups
}

/// Review counters for one product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewStats {
    pub review_count: usize,
    pub positive_count: usize,
}

impl ReviewStats {
    pub fn from_sentiments(sentiments: impl IntoIterator<Item = Sentiment>) -> Self {
        let mut stats = Self::default();
        for sentiment in sentiments {
            stats.record(sentiment);
        }
        stats
    }

    /// Folds `(product, sentiment)` pairs into per-product counters.
    pub fn tally(
        rows: impl IntoIterator<Item = (ProductId, Sentiment)>,
    ) -> HashMap<ProductId, ReviewStats> {
        let mut stats: HashMap<ProductId, ReviewStats> = HashMap::new();
        for (product_id, sentiment) in rows {
            stats.entry(product_id).or_default().record(sentiment);
        }
        stats
    }

    pub fn record(&mut self, sentiment: Sentiment) {
        self.review_count += 1;
        if sentiment.is_positive() {
            self.positive_count += 1;
        }
    }

    pub fn positive_rate(&self) -> Result<PositiveRate, TypeConstraintError> {
        PositiveRate::from_counts(self.positive_count, self.review_count)
    }
}
