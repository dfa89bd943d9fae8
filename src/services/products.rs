use log::error;

use crate::domain::product::ProductDetail;
use crate::domain::review::ReviewEntry;
use crate::domain::types::ProductId;
use crate::repository::{ProductReader, ReviewReader};

use super::{ServiceError, ServiceResult};

/// Core business logic for the product detail endpoint.
///
/// Loads the product and its reviews joined with their videos, flattens the
/// reviews and groups them by video. Either read failing fails the request;
/// there is no partial detail.
pub fn show_product<R>(product_id: &str, repo: &R) -> ServiceResult<ProductDetail>
where
    R: ProductReader + ReviewReader,
{
    let product_id = match ProductId::new(product_id) {
        Ok(product_id) => product_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    let product = match repo.get_product_by_id(&product_id) {
        Ok(Some(product)) => product,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            error!("Failed to get product {product_id}: {e}");
            return Err(e.into());
        }
    };

    let reviews = match repo.list_reviews_with_videos(&product_id) {
        Ok(reviews) => reviews,
        Err(e) => {
            error!("Failed to list reviews for product {product_id}: {e}");
            return Err(e.into());
        }
    };

    let reviews = reviews.into_iter().map(ReviewEntry::from).collect();

    Ok(ProductDetail::assemble(product, reviews)?)
}
