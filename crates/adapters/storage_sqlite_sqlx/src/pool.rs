//! `SQLite` connection pool setup and migration runner.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;
use crate::furniture_repo::SqliteFurnitureRepository;

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:muebles.db` or `sqlite::memory:`).
    pub database_url: String,
    /// Upper bound of pooled connections.
    pub max_connections: u32,
}

impl Config {
    /// Private in-memory database holding a single connection.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and runs all pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self).await
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
///
/// Each query checks a connection out of the pool and hands it back when the
/// query completes; [`Database::close`] drains the pool on shutdown.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and run migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    async fn initialize(config: &Config) -> Result<Self, StorageError> {
        tracing::info!("connecting to database");

        let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);
        if config.database_url.contains(":memory:") {
            // an in-memory database lives only as long as its last connection
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "could not connect to database"))?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        tracing::info!("connected to database");
        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repository over the `muebles` collection.
    #[must_use]
    pub fn furniture(&self) -> SqliteFurnitureRepository {
        SqliteFurnitureRepository::new(self.pool.clone())
    }

    /// Close every pooled connection and wait for checked-out ones to return.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("disconnected from database");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_create_pool_and_run_migrations_when_using_memory_db() {
        let db = Config::in_memory().build().await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|row| row.0.as_str()).collect();
        assert_eq!(names, ["muebles"]);
    }

    #[tokio::test]
    async fn should_refuse_queries_after_close() {
        let db = Config::in_memory().build().await.unwrap();
        db.close().await;

        assert!(db.pool().is_closed());
        let result = sqlx::query("SELECT 1").execute(db.pool()).await;
        assert!(matches!(result, Err(sqlx::Error::PoolClosed)));
    }

    #[tokio::test]
    async fn should_fail_when_database_directory_is_missing() {
        let result = Config {
            database_url: "sqlite:/nonexistent-muebles-dir/nested/muebles.db".to_string(),
            max_connections: 1,
        }
        .build()
        .await;

        assert!(result.is_err());
    }
}
