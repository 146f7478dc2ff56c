use diesel::prelude::*;

use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, UserWriter};

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::models::user::{NewUser as DbNewUser, User as DbUser};
        use crate::schema::users;

        let mut conn = self.pool.get()?;
        let insertable: DbNewUser = new_user.into();
        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into())
    }
}
