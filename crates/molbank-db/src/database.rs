//! Connection pool and schema management.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::error::Result;
use crate::schema;

/// Main database handle.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database at `url`.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        info!("Connected to {}", url);
        Ok(Self { pool })
    }

    /// A private in-memory database.
    ///
    /// Backed by a single connection that is never recycled, since SQLite
    /// drops an in-memory database together with its last connection.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables that do not exist yet.
    pub async fn initialize(&self) -> Result<()> {
        sqlx::query(schema::CREATE_MOLECULES)
            .execute(&self.pool)
            .await?;
        debug!("Schema ready ({})", schema::TABLE_MOLECULES);
        Ok(())
    }

    /// Drop and recreate every table.
    pub async fn reset(&self) -> Result<()> {
        sqlx::query(schema::DROP_MOLECULES)
            .execute(&self.pool)
            .await?;
        self.initialize().await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
