//! # muebles-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `muebles-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle (open, close)
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `muebles-app` (for port traits) and `muebles-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod furniture_repo;
mod pool;

pub use error::StorageError;
pub use furniture_repo::SqliteFurnitureRepository;
pub use pool::{Config, Database};
