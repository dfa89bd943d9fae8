use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{Product as DomainProduct, ProductFeatures};
use crate::domain::types::{BrandName, CategoryName, ProductName, TypeConstraintError};

/// Diesel model representing a row in the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub volume: Option<String>,
    pub ingredients: Option<String>,
    pub how_to_use: Option<String>,
    pub features: Option<String>,
    pub amazon_url: Option<String>,
    pub cosme_url: Option<String>,
    pub cosme_rating: Option<f64>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            name: ProductName::new(product.name)?,
            // Blank facet values are stored by some ingest runs; treat them as unset.
            brand: product.brand.and_then(|b| BrandName::new(b).ok()),
            category: product.category.and_then(|c| CategoryName::new(c).ok()),
            image_url: product.image_url,
            thumbnail_url: product.thumbnail_url,
            description: product.description,
            price: product.price,
            volume: product.volume,
            ingredients: product.ingredients,
            how_to_use: product.how_to_use,
            features: ProductFeatures::parse(product.features.as_deref()),
            amazon_url: product.amazon_url,
            cosme_url: product.cosme_url,
            cosme_rating: product.cosme_rating,
            created_at: product.created_at,
        })
    }
}
