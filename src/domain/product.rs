use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::review::{ReviewEntry, ReviewStats, VideoGroup, group_by_video};
use crate::domain::types::{
    BrandName, CategoryName, PositiveRate, ProductId, ProductName, TypeConstraintError,
};

/// A cosmetic product as listed in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub brand: Option<BrandName>,
    pub category: Option<CategoryName>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    /// Retail price as displayed by the shop, e.g. `"¥3,300"`.
    pub price: Option<String>,
    pub volume: Option<String>,
    pub ingredients: Option<String>,
    pub how_to_use: Option<String>,
    pub features: ProductFeatures,
    pub amazon_url: Option<String>,
    pub cosme_url: Option<String>,
    /// Score copied from the @cosme product page.
    pub cosme_rating: Option<f64>,
    pub created_at: NaiveDateTime,
}

/// Ordered selling points of a product.
///
/// Stored as a JSON array of strings. Anything else in the column reads as
/// an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProductFeatures(Vec<String>);

impl ProductFeatures {
    pub fn new(features: Vec<String>) -> Self {
        Self(features)
    }

    /// Lenient parse of the stored payload.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
            .map(Self)
            .unwrap_or_default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A product row in a listing, annotated with review statistics.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductSummary {
    #[serde(flatten)]
    pub product: Product,
    pub review_count: usize,
    pub positive_rate: PositiveRate,
}

impl ProductSummary {
    pub fn new(product: Product, stats: ReviewStats) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            product,
            review_count: stats.review_count,
            positive_rate: stats.positive_rate()?,
        })
    }
}

/// Everything the product page shows: the product, its reviews in video
/// order, and the same reviews grouped by source video.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub reviews: Vec<ReviewEntry>,
    pub review_count: usize,
    pub positive_rate: PositiveRate,
    pub videos: Vec<VideoGroup>,
    /// Watch link of the first video that mentions the product.
    pub video_content_url: Option<String>,
}

impl ProductDetail {
    /// Builds the detail record from reviews already sorted by timestamp.
    ///
    /// A product without its own thumbnail borrows the one of the first
    /// video that mentions it.
    pub fn assemble(
        mut product: Product,
        reviews: Vec<ReviewEntry>,
    ) -> Result<Self, TypeConstraintError> {
        let stats = ReviewStats::from_sentiments(reviews.iter().map(|r| r.sentiment));
        let videos = group_by_video(&reviews);

        let lead_video = videos.first();
        if product
            .thumbnail_url
            .as_deref()
            .is_none_or(|url| url.trim().is_empty())
        {
            product.thumbnail_url = lead_video
                .map(|group| group.thumbnail_url.clone())
                .filter(|url| !url.is_empty());
        }
        let video_content_url = lead_video.map(|group| group.video_url.clone());

        Ok(Self {
            product,
            review_count: stats.review_count,
            positive_rate: stats.positive_rate()?,
            reviews,
            videos,
            video_content_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::tests::entry;
    use crate::domain::types::Sentiment;
    use chrono::DateTime;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new("p-1").unwrap(),
            name: ProductName::new("Rose Tint").unwrap(),
            brand: Some(BrandName::new("RoseLab").unwrap()),
            category: Some(CategoryName::new("Lip").unwrap()),
            image_url: None,
            thumbnail_url: None,
            description: None,
            price: Some("¥1,650".into()),
            volume: None,
            ingredients: None,
            how_to_use: None,
            features: ProductFeatures::parse(Some(r#"["long wear","sheer"]"#)),
            amazon_url: None,
            cosme_url: None,
            cosme_rating: Some(5.4),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn parses_feature_list() {
        let features = ProductFeatures::parse(Some(r#"["moist","no scent"]"#));
        assert_eq!(features.as_slice(), ["moist", "no scent"]);
    }

    #[test]
    fn malformed_features_become_empty() {
        assert!(ProductFeatures::parse(Some("N/A")).is_empty());
        assert!(ProductFeatures::parse(Some(r#"{"a":1}"#)).is_empty());
        assert!(ProductFeatures::parse(None).is_empty());
    }

    #[test]
    fn summary_serializes_flat() {
        let summary = ProductSummary::new(
            sample_product(),
            ReviewStats {
                review_count: 4,
                positive_count: 3,
            },
        )
        .unwrap();

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["id"], "p-1");
        assert_eq!(value["brand"], "RoseLab");
        assert_eq!(value["features"], serde_json::json!(["long wear", "sheer"]));
        assert_eq!(value["review_count"], 4);
        assert_eq!(value["positive_rate"], 75);
    }

    #[test]
    fn detail_counts_and_groups_reviews() {
        let reviews = vec![
            entry("r2", "B", 5, Sentiment::Negative),
            entry("r1", "A", 10, Sentiment::Positive),
            entry("r3", "A", 20, Sentiment::Positive),
        ];

        let detail = ProductDetail::assemble(sample_product(), reviews).unwrap();

        assert_eq!(detail.review_count, 3);
        assert_eq!(detail.positive_rate, 67);
        assert_eq!(detail.videos.len(), 2);
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["name"], "Rose Tint");
        assert_eq!(value["reviews"].as_array().unwrap().len(), 3);
        assert_eq!(value["videos"][0]["video_id"], "B");
    }

    #[test]
    fn detail_without_reviews_has_zero_rate() {
        let detail = ProductDetail::assemble(sample_product(), vec![]).unwrap();
        assert_eq!(detail.review_count, 0);
        assert_eq!(detail.positive_rate, 0);
        assert!(detail.videos.is_empty());
        assert!(detail.product.thumbnail_url.is_none());
        assert!(detail.video_content_url.is_none());
    }

    #[test]
    fn detail_borrows_thumbnail_from_first_video() {
        let reviews = vec![
            entry("r2", "B", 5, Sentiment::Negative),
            entry("r1", "A", 10, Sentiment::Positive),
        ];

        let detail = ProductDetail::assemble(sample_product(), reviews).unwrap();

        assert_eq!(
            detail.product.thumbnail_url.as_deref(),
            Some("https://i.ytimg.com/vi/B/hqdefault.jpg")
        );
        assert_eq!(
            detail.video_content_url.as_deref(),
            Some("https://www.youtube.com/watch?v=B")
        );
    }

    #[test]
    fn detail_keeps_own_thumbnail() {
        let mut product = sample_product();
        product.thumbnail_url = Some("https://cdn.example.com/tint.jpg".into());

        let detail =
            ProductDetail::assemble(product, vec![entry("r1", "A", 10, Sentiment::Positive)])
                .unwrap();

        assert_eq!(
            detail.product.thumbnail_url.as_deref(),
            Some("https://cdn.example.com/tint.jpg")
        );
        assert_eq!(
            detail.video_content_url.as_deref(),
            Some("https://www.youtube.com/watch?v=A")
        );
    }
}
