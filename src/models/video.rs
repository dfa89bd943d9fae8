use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{ChannelName, TypeConstraintError};
use crate::domain::video::Video as DomainVideo;

/// Diesel representation of a video row.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::videos)]
pub struct Video {
    pub id: String,
    pub title: Option<String>,
    pub channel_name: Option<String>,
    pub published_at: Option<NaiveDateTime>,
    pub thumbnail_url: Option<String>,
}

impl TryFrom<Video> for DomainVideo {
    type Error = TypeConstraintError;

    fn try_from(video: Video) -> Result<Self, Self::Error> {
        Ok(Self {
            id: video.id.try_into()?,
            title: video.title,
            channel_name: video.channel_name.and_then(|c| ChannelName::new(c).ok()),
            published_at: video.published_at,
            thumbnail_url: video.thumbnail_url,
        })
    }
}
