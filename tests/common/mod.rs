#![allow(dead_code)] // not every test binary uses every helper

use chrono::{Duration, NaiveDateTime, Utc};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use design_catalog::db::{DbPool, establish_connection_pool};
use design_catalog::domain::design::{DesignStatus, NewDesign};
use design_catalog::domain::user::{NewUser, User, UserRole};
use design_catalog::repository::{DieselRepository, UserWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary SQLite database with all migrations applied. The backing
/// directory disappears when the value is dropped.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let database_url = path.to_str().expect("db path is not utf-8");

        let pool = establish_connection_pool(database_url).expect("failed to create pool");

        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");
        drop(conn);

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

pub fn seed_user(repo: &DieselRepository, name: &str, role: UserRole) -> User {
    repo.create_user(&NewUser {
        name: name.to_string(),
        image: Some(format!("https://cdn.example.com/avatars/{name}.png")),
        role,
    })
    .expect("failed to seed user")
}

/// Builds a design row created `age_secs` seconds ago, so listings have a
/// deterministic newest-first order.
pub fn design(
    name: &str,
    category: &str,
    status: DesignStatus,
    author_id: i32,
    age_secs: i64,
) -> NewDesign {
    let created_at: NaiveDateTime = (Utc::now() - Duration::seconds(age_secs)).naive_utc();

    NewDesign {
        name: name.to_string(),
        category: category.to_string(),
        subcategory: "general".to_string(),
        status,
        tags: vec!["seed".to_string()],
        image: format!("https://cdn.example.com/designs/{name}.png"),
        author_id,
        created_at,
    }
}
