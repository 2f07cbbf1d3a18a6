//! Shared application state for the web server.

use std::sync::Arc;

use molbank_config::Config;
use molbank_db::{Database, MoleculeRepository, SqliteMoleculeRepository};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub molecules: Arc<dyn MoleculeRepository>,
    /// Reported by `GET /` so clients can tell replicas apart.
    pub server_id: String,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(molecules: Arc<dyn MoleculeRepository>, server_id: impl Into<String>) -> Self {
        Self {
            molecules,
            server_id: server_id.into(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    /// Connect to the configured database and prepare its schema.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let db = Database::connect(&config.database.url, config.database.max_connections).await?;
        db.initialize().await?;

        let molecules = Arc::new(SqliteMoleculeRepository::new(db.pool().clone()));
        Ok(Self::new(molecules, config.server.resolved_server_id())
            .with_max_upload_bytes(config.upload.max_bytes))
    }
}

pub type SharedState = Arc<AppState>;
