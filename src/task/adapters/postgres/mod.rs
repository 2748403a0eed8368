//! `PostgreSQL` adapters for task and collection persistence.

mod collection;
mod migrations;
mod models;
mod repository;
mod schema;
mod task;

pub use migrations::{SCHEMA_SQL, apply_schema};
pub use repository::{PostgresRepository, TaskPgPool, build_pool};
