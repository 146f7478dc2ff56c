//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::design::{Design, NewDesign};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DesignListQuery, DesignReader, DesignWriter, UserWriter};

mock! {
    pub Repository {}

    impl DesignReader for Repository {
        fn list_designs(
            &self,
            query: DesignListQuery,
        ) -> RepositoryResult<(usize, Vec<(Design, User)>)>;
    }

    impl DesignWriter for Repository {
        fn create_designs(&self, new_designs: &[NewDesign]) -> RepositoryResult<usize>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    }
}
