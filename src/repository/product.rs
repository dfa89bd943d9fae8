use diesel::prelude::*;

use crate::db::{fold_case, fold_text, trim_text};
use crate::domain::product::Product;
use crate::domain::types::ProductId;
use crate::models::product::Product as DbProduct;
use crate::repository::{
    DieselRepository, ProductReader, ProductSearchQuery, RepositoryResult, keep_valid,
};

/// Escapes LIKE wildcards so user text matches literally.
pub(crate) fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl ProductReader for DieselRepository {
    fn search_products(&self, query: &ProductSearchQuery) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(text) = &query.text {
            let pattern = like_pattern(&fold_text(text));
            items = items.filter(
                fold_case(products::name.nullable())
                    .like(pattern.clone())
                    .escape('\\')
                    .or(fold_case(products::brand).like(pattern.clone()).escape('\\'))
                    .or(fold_case(products::description).like(pattern).escape('\\')),
            );
        }

        if let Some(category) = &query.category {
            items = items.filter(trim_text(products::category).eq(category.trim().to_string()));
        }

        if let Some(brand) = &query.brand {
            items = items.filter(trim_text(products::brand).eq(brand.trim().to_string()));
        }

        if let Some(product_ids) = &query.product_ids {
            // An empty id list renders as an always-false predicate.
            let ids = product_ids
                .iter()
                .map(|id| id.as_str().to_string())
                .collect::<Vec<String>>();
            items = items.filter(products::id.eq_any(ids));
        }

        let rows = items
            .order((products::created_at.desc(), products::id.asc()))
            .load::<DbProduct>(&mut conn)?;

        Ok(keep_valid("product", rows, Product::try_from))
    }

    fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id.as_str()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }
}
