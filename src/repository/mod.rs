use crate::db::DbPool;
use crate::domain::design::{Design, NewDesign};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;

pub mod design;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod user;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filter request for design listings. Each term is applied only when set,
/// so an empty query selects the whole catalog.
#[derive(Debug, Clone, Default)]
pub struct DesignListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub author_id: Option<i32>,
    pub published_only: bool,
    pub pagination: Option<Pagination>,
}

impl DesignListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn author(mut self, author_id: i32) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn published_only(mut self) -> Self {
        self.published_only = true;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait DesignReader {
    /// Returns the total number of designs matching the query together with
    /// the requested page, newest first, each row joined with its author.
    fn list_designs(&self, query: DesignListQuery)
    -> RepositoryResult<(usize, Vec<(Design, User)>)>;
}

pub trait DesignWriter {
    fn create_designs(&self, new_designs: &[NewDesign]) -> RepositoryResult<usize>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}

/// Diesel implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}
