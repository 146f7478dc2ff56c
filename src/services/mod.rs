//! Endpoint logic shared by the catalog API handlers.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod designs;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
