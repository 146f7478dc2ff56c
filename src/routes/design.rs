use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::domain::auth::AuthenticatedUser;
use crate::dto::design::{DesignListBody, DesignListParams};
use crate::repository::DieselRepository;
use crate::services::designs::{DesignVisibility, list_designs};

/// Public catalog listing. Only published designs are ever exposed here.
#[get("/all-design")]
pub async fn all_designs(
    params: web::Query<DesignListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_designs(repo.get_ref(), DesignVisibility::PublicOnly, &params) {
        Ok(list) => HttpResponse::Ok().json(DesignListBody::from(list)),
        Err(e) => {
            error!("Failed to list designs: {e}");
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}

/// Listing scoped to the authenticated principal. Token verification happens
/// in the [`AuthenticatedUser`] extractor, before this body runs.
#[get("/user-design")]
pub async fn user_designs(
    params: web::Query<DesignListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_designs(repo.get_ref(), DesignVisibility::OwnerOrAdmin(user), &params) {
        Ok(list) => HttpResponse::Ok().json(DesignListBody::from(list)),
        Err(e) => {
            error!("Failed to list user designs: {e}");
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}
