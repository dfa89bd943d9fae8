use std::collections::HashMap;

use log::error;
use serde::Deserialize;

use crate::domain::product::ProductSummary;
use crate::domain::review::ReviewStats;
use crate::domain::types::ProductSort;
use crate::repository::{ProductReader, ProductSearchQuery, ReviewReader};

use super::{ServiceError, ServiceResult};

/// Query parameters accepted by the product search endpoint.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ProductSearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub channel: Option<String>,
    pub sort: Option<String>,
}

/// Blank query-string values count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Core business logic for the product search endpoint.
///
/// Resolves the channel facet into a product id set first, then selects
/// products with the remaining filters intersected with that set. Review
/// statistics are an enrichment: when they cannot be read every product
/// reports zero reviews instead of failing the search.
pub fn search_products<R>(
    params: &ProductSearchParams,
    default_sort: ProductSort,
    repo: &R,
) -> ServiceResult<Vec<ProductSummary>>
where
    R: ProductReader + ReviewReader,
{
    let sort = match present(&params.sort) {
        Some(sort) => {
            ProductSort::try_from(sort).map_err(|e| ServiceError::Form(e.to_string()))?
        }
        None => default_sort,
    };

    let mut query = ProductSearchQuery::default();

    if let Some(channel) = present(&params.channel) {
        match repo.list_product_ids_for_channel(channel) {
            Ok(ids) => query = query.restrict_to(ids),
            Err(e) => {
                error!("Failed to resolve products for channel '{channel}': {e}");
                return Err(e.into());
            }
        }
    }
    if let Some(text) = present(&params.q) {
        query = query.text(text.trim());
    }
    if let Some(category) = present(&params.category) {
        query = query.category(category);
    }
    if let Some(brand) = present(&params.brand) {
        query = query.brand(brand);
    }

    let products = match repo.search_products(&query) {
        Ok(products) => products,
        Err(e) => {
            error!("Failed to search products: {e}");
            return Err(e.into());
        }
    };

    let stats = match repo.list_review_sentiments() {
        Ok(rows) => ReviewStats::tally(rows),
        Err(e) => {
            error!("Failed to load review statistics, listing without counts: {e}");
            HashMap::new()
        }
    };

    let mut summaries = products
        .into_iter()
        .map(|product| {
            let product_stats = stats.get(&product.id).copied().unwrap_or_default();
            ProductSummary::new(product, product_stats)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if sort == ProductSort::MostReviewed {
        // Stable sort keeps newest-first among equal counts.
        summaries.sort_by(|a, b| b.review_count.cmp(&a.review_count));
    }

    Ok(summaries)
}
