use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::design::{Design, DesignStatus, NewDesign};
use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DesignListQuery, DesignReader, DesignWriter, DieselRepository};

impl DesignReader for DieselRepository {
    fn list_designs(
        &self,
        query: DesignListQuery,
    ) -> RepositoryResult<(usize, Vec<(Design, User)>)> {
        use crate::models::design::Design as DbDesign;
        use crate::models::user::User as DbUser;
        use crate::schema::{designs, users};

        let mut conn = self.pool.get()?;

        let mut items = designs::table.inner_join(users::table).into_boxed::<Sqlite>();
        let mut total = designs::table.into_boxed::<Sqlite>();

        if query.published_only {
            let published = DesignStatus::Published.to_string();
            items = items.filter(designs::status.eq(published.clone()));
            total = total.filter(designs::status.eq(published));
        }
        if let Some(category) = &query.category {
            items = items.filter(designs::category.eq(category.clone()));
            total = total.filter(designs::category.eq(category.clone()));
        }
        if let Some(search) = &query.search {
            // SQLite LIKE matches ASCII case-insensitively.
            let pattern = format!("%{search}%");
            items = items.filter(designs::name.like(pattern.clone()));
            total = total.filter(designs::name.like(pattern));
        }
        if let Some(author_id) = query.author_id {
            items = items.filter(designs::author_id.eq(author_id));
            total = total.filter(designs::author_id.eq(author_id));
        }

        items = items.order(designs::created_at.desc());

        if let Some(pagination) = &query.pagination {
            let page = if pagination.page == 0 { 1 } else { pagination.page } as i64;
            let per_page = pagination.per_page as i64;
            items = items.limit(per_page).offset((page - 1) * per_page);
        }

        let total: i64 = total.count().get_result(&mut conn)?;

        let rows = items
            .load::<(DbDesign, DbUser)>(&mut conn)?
            .into_iter()
            .map(|(design, author)| (design.into(), author.into()))
            .collect();

        Ok((total as usize, rows))
    }
}

impl DesignWriter for DieselRepository {
    fn create_designs(&self, new_designs: &[NewDesign]) -> RepositoryResult<usize> {
        use crate::models::design::NewDesign as DbNewDesign;
        use crate::schema::designs;

        let mut conn = self.pool.get()?;
        let insertables: Vec<DbNewDesign> = new_designs.iter().map(Into::into).collect();
        let affected = diesel::insert_into(designs::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
