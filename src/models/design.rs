//! Diesel models for catalog design rows.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::design::{Design as DomainDesign, NewDesign as DomainNewDesign};
use crate::models::user::User;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(User, foreign_key = author_id))]
#[diesel(table_name = crate::schema::designs)]
/// Diesel model for [`crate::domain::design::Design`].
pub struct Design {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub status: String,
    pub tags: String, // store JSON text in the DB
    pub image: String,
    pub author_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::designs)]
/// Insertable form of [`Design`].
pub struct NewDesign {
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub status: String,
    pub tags: String,
    pub image: String,
    pub author_id: i32,
    pub created_at: NaiveDateTime,
}

impl From<Design> for DomainDesign {
    fn from(design: Design) -> Self {
        let tags = serde_json::from_str(&design.tags).unwrap_or_default();

        Self {
            id: design.id,
            name: design.name,
            category: design.category,
            subcategory: design.subcategory,
            status: design.status.into(),
            tags,
            image: design.image,
            author_id: design.author_id,
            created_at: design.created_at,
        }
    }
}

impl From<&DomainNewDesign> for NewDesign {
    fn from(design: &DomainNewDesign) -> Self {
        Self {
            name: design.name.clone(),
            category: design.category.clone(),
            subcategory: design.subcategory.clone(),
            status: design.status.to_string(),
            tags: serde_json::to_string(&design.tags).unwrap_or_else(|_| "[]".to_string()),
            image: design.image.clone(),
            author_id: design.author_id,
            created_at: design.created_at,
        }
    }
}
