use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::review::{Review as DomainReview, ReviewWithVideo};
use crate::domain::types::{ProductId, Sentiment, TypeConstraintError, VideoTimestamp};
use crate::models::video::Video;

/// Diesel model representing the `reviews` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub video_id: String,
    pub timestamp_seconds: i32,
    pub sentiment: Option<String>,
    pub summary: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Review> for DomainReview {
    type Error = TypeConstraintError;

    fn try_from(review: Review) -> Result<Self, Self::Error> {
        Ok(Self {
            id: review.id.try_into()?,
            product_id: review.product_id.try_into()?,
            video_id: review.video_id.try_into()?,
            timestamp_seconds: VideoTimestamp::new(review.timestamp_seconds)?,
            sentiment: review.sentiment.into(),
            summary: review.summary,
            created_at: review.created_at,
        })
    }
}

impl TryFrom<(Review, Option<Video>)> for ReviewWithVideo {
    type Error = TypeConstraintError;

    fn try_from((review, video): (Review, Option<Video>)) -> Result<Self, Self::Error> {
        Ok(Self {
            review: review.try_into()?,
            video: video.map(TryInto::try_into).transpose()?,
        })
    }
}

/// `(product_id, sentiment)` projection used for review statistics.
pub type ReviewSentimentRow = (String, Option<String>);

pub fn sentiment_row_into_domain(
    (product_id, sentiment): ReviewSentimentRow,
) -> Result<(ProductId, Sentiment), TypeConstraintError> {
    Ok((product_id.try_into()?, sentiment.into()))
}
