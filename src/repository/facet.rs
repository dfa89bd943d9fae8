use diesel::prelude::*;

use crate::repository::{DieselRepository, FacetReader, RepositoryResult};

impl FacetReader for DieselRepository {
    fn list_category_values(&self) -> RepositoryResult<Vec<Option<String>>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let values = products::table
            .select(products::category)
            .distinct()
            .load::<Option<String>>(&mut conn)?;
        Ok(values)
    }

    fn list_brand_values(&self) -> RepositoryResult<Vec<Option<String>>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let values = products::table
            .select(products::brand)
            .distinct()
            .load::<Option<String>>(&mut conn)?;
        Ok(values)
    }

    fn list_channel_values(&self) -> RepositoryResult<Vec<Option<String>>> {
        use crate::schema::videos;

        let mut conn = self.conn()?;

        let values = videos::table
            .select(videos::channel_name)
            .distinct()
            .load::<Option<String>>(&mut conn)?;
        Ok(values)
    }
}
