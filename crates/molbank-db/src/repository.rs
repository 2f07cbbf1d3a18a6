//! Molecule repository - database access layer.
//!
//! Every call checks a connection out of the pool for its own duration.

use async_trait::async_trait;
use molbank_common::Molecule;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, Result};
use crate::schema::MoleculeRow;

/// Molecule repository trait.
#[async_trait]
pub trait MoleculeRepository: Send + Sync {
    /// Store one structure and return its id.
    async fn insert(&self, structure: &str) -> Result<i64>;

    /// Store all structures in one transaction; nothing is written if any insert fails.
    async fn insert_many(&self, structures: &[String]) -> Result<usize>;

    async fn get(&self, id: i64) -> Result<Option<Molecule>>;

    /// Replace the structure. `false` if no molecule has this id.
    async fn update(&self, id: i64, structure: &str) -> Result<bool>;

    /// `false` if no molecule has this id.
    async fn delete(&self, id: i64) -> Result<bool>;

    /// A page of molecules ordered by id.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Molecule>>;

    /// Every molecule ordered by id.
    async fn all(&self) -> Result<Vec<Molecule>>;

    async fn count(&self) -> Result<i64>;
}

/// SQLite-backed molecule repository.
#[derive(Clone)]
pub struct SqliteMoleculeRepository {
    pool: SqlitePool,
}

impl SqliteMoleculeRepository {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl MoleculeRepository for SqliteMoleculeRepository {
    async fn insert(&self, structure: &str) -> Result<i64> {
        let id = sqlx::query("INSERT INTO molecules (structure) VALUES (?1)")
            .bind(structure)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        debug!(id, structure, "Inserted molecule");
        Ok(id)
    }

    async fn insert_many(&self, structures: &[String]) -> Result<usize> {
        let mut tx = self.pool.begin().await?;
        for structure in structures {
            sqlx::query("INSERT INTO molecules (structure) VALUES (?1)")
                .bind(structure)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        debug!(count = structures.len(), "Inserted molecule batch");
        Ok(structures.len())
    }

    async fn get(&self, id: i64) -> Result<Option<Molecule>> {
        let row = sqlx::query_as::<_, MoleculeRow>(
            "SELECT id, structure FROM molecules WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Molecule::from))
    }

    async fn update(&self, id: i64, structure: &str) -> Result<bool> {
        let affected = sqlx::query("UPDATE molecules SET structure = ?1 WHERE id = ?2")
            .bind(structure)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let affected = sqlx::query("DELETE FROM molecules WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Molecule>> {
        if offset < 0 || limit < 0 {
            return Err(DbError::InvalidPagination { offset, limit });
        }
        let rows = sqlx::query_as::<_, MoleculeRow>(
            "SELECT id, structure FROM molecules ORDER BY id LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Molecule::from).collect())
    }

    async fn all(&self) -> Result<Vec<Molecule>> {
        let rows = sqlx::query_as::<_, MoleculeRow>(
            "SELECT id, structure FROM molecules ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Molecule::from).collect())
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM molecules")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
