//! SQLite Persistence

mod database;
mod novel_repo;

pub use database::{create_pool, run_migrations, DatabaseConfig, DbPool};
pub use novel_repo::SqliteNovelRepository;

#[cfg(test)]
pub(crate) use novel_repo::insert_novel_for_test;
