use std::collections::BTreeSet;

use log::error;

use crate::repository::{FacetReader, RepositoryResult};

use super::ServiceResult;

/// De-duplicates and sorts raw facet values, dropping null and blank ones.
fn distinct_sorted(values: Vec<Option<String>>) -> Vec<String> {
    values
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

fn list_facet(
    facet: &str,
    values: RepositoryResult<Vec<Option<String>>>,
) -> ServiceResult<Vec<String>> {
    match values {
        Ok(values) => Ok(distinct_sorted(values)),
        Err(e) => {
            error!("Failed to list {facet}: {e}");
            Err(e.into())
        }
    }
}

/// Distinct product categories, sorted.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: FacetReader,
{
    list_facet("categories", repo.list_category_values())
}

/// Distinct product brands, sorted.
pub fn list_brands<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: FacetReader,
{
    list_facet("brands", repo.list_brand_values())
}

/// Distinct channel names of review videos, sorted.
pub fn list_channels<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: FacetReader,
{
    list_facet("channels", repo.list_channel_values())
}
