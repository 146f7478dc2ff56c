//! Read-only catalog API for a design asset marketplace.
//!
//! Two endpoints share one parameterized listing service: a public catalog
//! restricted to published designs, and a token-authenticated listing scoped
//! to the requesting user unless that user is an administrator.

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::db::establish_connection_pool;
use crate::models::auth::TokenVerifier;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::design::{all_designs, user_designs};

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);
    let token_verifier = TokenVerifier::new(&server_config.secret);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api/design")
                    .service(all_designs)
                    .service(user_designs),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(token_verifier.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
