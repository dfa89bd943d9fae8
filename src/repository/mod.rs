use log::warn;

use crate::db::{AccessScope, DbConnection, DbPool, establish_connection_pool};
use crate::domain::product::Product;
use crate::domain::review::ReviewWithVideo;
use crate::domain::types::{ProductId, Sentiment, TypeConstraintError};

pub mod errors;
pub mod facet;
pub mod product;
pub mod review;

pub use errors::{RepositoryError, RepositoryResult};

/// Catalog store handle backed by Diesel and SQLite.
///
/// Cloning only clones the pool handle, so one repository per access scope
/// is shared by every worker.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
    scope: AccessScope,
}

impl DieselRepository {
    /// Wrap an established pool opened with `scope`.
    pub fn new(pool: DbPool, scope: AccessScope) -> Self {
        Self { pool, scope }
    }

    /// Open a pool against `database_url` in the given scope.
    pub fn connect(database_url: &str, scope: AccessScope) -> RepositoryResult<Self> {
        let pool = establish_connection_pool(database_url, scope)?;
        Ok(Self::new(pool, scope))
    }

    pub fn scope(&self) -> AccessScope {
        self.scope
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Converts loaded rows, skipping the ones that break a domain constraint.
///
/// A single malformed row must not hide the rest of a listing.
pub(crate) fn keep_valid<Row, T>(
    kind: &str,
    rows: Vec<Row>,
    convert: impl Fn(Row) -> Result<T, TypeConstraintError>,
) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match convert(row) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Skipping invalid {kind} row: {e}");
                None
            }
        })
        .collect()
}

/// Filters applied when selecting products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSearchQuery {
    /// Substring of name, brand or description, matched ignoring case.
    pub text: Option<String>,
    /// Category, compared after trimming surrounding whitespace.
    pub category: Option<String>,
    /// Brand, compared after trimming surrounding whitespace.
    pub brand: Option<String>,
    /// Restrict to these ids. An empty set matches nothing.
    pub product_ids: Option<Vec<ProductId>>,
}

impl ProductSearchQuery {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }
    pub fn restrict_to(mut self, product_ids: Vec<ProductId>) -> Self {
        self.product_ids = Some(product_ids);
        self
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// Products matching every filter in `query`, newest first.
    fn search_products(&self, query: &ProductSearchQuery) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>>;
}

/// Read-only operations for reviews and their videos.
pub trait ReviewReader {
    /// Sentiment of every review, keyed by the reviewed product.
    fn list_review_sentiments(&self) -> RepositoryResult<Vec<(ProductId, Sentiment)>>;
    /// Reviews of a product joined with their video, by ascending timestamp.
    fn list_reviews_with_videos(
        &self,
        product_id: &ProductId,
    ) -> RepositoryResult<Vec<ReviewWithVideo>>;
    /// Distinct products reviewed in videos of the given channel, compared
    /// after trimming surrounding whitespace.
    fn list_product_ids_for_channel(&self, channel: &str) -> RepositoryResult<Vec<ProductId>>;
}

/// Raw facet columns. Values may repeat and may be null or blank.
pub trait FacetReader {
    fn list_category_values(&self) -> RepositoryResult<Vec<Option<String>>>;
    fn list_brand_values(&self) -> RepositoryResult<Vec<Option<String>>>;
    fn list_channel_values(&self) -> RepositoryResult<Vec<Option<String>>>;
}

#[cfg(test)]
mod tests {
    use super::keep_valid;
    use crate::domain::types::ProductName;

    #[test]
    fn keep_valid_skips_rows_that_fail_conversion() {
        let rows = vec!["Tint".to_string(), "  ".to_string(), "Balm".to_string()];

        let names = keep_valid("product", rows, ProductName::new);

        assert_eq!(names, vec!["Tint", "Balm"]);
    }
}
