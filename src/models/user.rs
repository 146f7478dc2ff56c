//! Diesel models for marketplace user rows.

use diesel::prelude::*;

use crate::domain::user::{NewUser as DomainNewUser, User as DomainUser};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::users)]
/// Diesel model for [`crate::domain::user::User`].
pub struct User {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub role: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
/// Insertable form of [`User`].
pub struct NewUser {
    pub name: String,
    pub image: Option<String>,
    pub role: String,
}

impl From<User> for DomainUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            image: user.image,
            role: user.role.into(),
        }
    }
}

impl From<&DomainNewUser> for NewUser {
    fn from(user: &DomainNewUser) -> Self {
        Self {
            name: user.name.clone(),
            image: user.image.clone(),
            role: user.role.to_string(),
        }
    }
}
