//! Molbank Database Layer
//!
//! A single `molecules` table in SQLite, reached through sqlx. Handlers talk to
//! it through the [`MoleculeRepository`] trait.
//!
//! # Example
//!
//! ```rust,no_run
//! use molbank_db::{Database, MoleculeRepository, SqliteMoleculeRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("sqlite://molbank.db?mode=rwc", 5).await?;
//!     db.initialize().await?;
//!
//!     let molecules = SqliteMoleculeRepository::new(db.pool().clone());
//!     let id = molecules.insert("CCO").await?;
//!     println!("stored molecule {id}");
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
pub mod repository;
pub mod schema;

pub use database::Database;
pub use error::{DbError, Result};
pub use repository::{MoleculeRepository, SqliteMoleculeRepository};
pub use schema::TABLE_MOLECULES;
