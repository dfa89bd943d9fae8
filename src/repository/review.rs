use diesel::prelude::*;

use crate::db::trim_text;
use crate::domain::review::ReviewWithVideo;
use crate::domain::types::{ProductId, Sentiment};
use crate::models::review::{Review as DbReview, ReviewSentimentRow, sentiment_row_into_domain};
use crate::models::video::Video as DbVideo;
use crate::repository::{DieselRepository, RepositoryResult, ReviewReader, keep_valid};

impl ReviewReader for DieselRepository {
    fn list_review_sentiments(&self) -> RepositoryResult<Vec<(ProductId, Sentiment)>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        let rows = reviews::table
            .select((reviews::product_id, reviews::sentiment))
            .load::<ReviewSentimentRow>(&mut conn)?;

        Ok(keep_valid("review sentiment", rows, sentiment_row_into_domain))
    }

    fn list_reviews_with_videos(
        &self,
        product_id: &ProductId,
    ) -> RepositoryResult<Vec<ReviewWithVideo>> {
        use crate::schema::{reviews, videos};

        let mut conn = self.conn()?;

        let rows = reviews::table
            .left_join(videos::table)
            .filter(reviews::product_id.eq(product_id.as_str()))
            .order((reviews::timestamp_seconds.asc(), reviews::id.asc()))
            .load::<(DbReview, Option<DbVideo>)>(&mut conn)?;

        Ok(keep_valid("review", rows, ReviewWithVideo::try_from))
    }

    fn list_product_ids_for_channel(&self, channel: &str) -> RepositoryResult<Vec<ProductId>> {
        use crate::schema::{reviews, videos};

        let mut conn = self.conn()?;

        let ids = reviews::table
            .inner_join(videos::table)
            .filter(trim_text(videos::channel_name).eq(channel.trim().to_string()))
            .select(reviews::product_id)
            .distinct()
            .load::<String>(&mut conn)?;

        Ok(keep_valid("review", ids, ProductId::try_from))
    }
}
