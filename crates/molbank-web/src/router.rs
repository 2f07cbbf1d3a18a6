//! Axum router: maps URL paths to handlers.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    molecules::{add_molecule, delete_molecule, get_molecule, list_molecules, update_molecule},
    root::{fallback, root},
    search::search_substructure,
    upload::upload_molecules,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/",               get(root))
        .route("/add",            post(add_molecule))
        .route("/molecule/{id}",  get(get_molecule).put(update_molecule).delete(delete_molecule))
        .route("/list",           get(list_molecules))
        .route("/search",         post(search_substructure))
        .route("/upload",         post(upload_molecules).layer(upload_limit))
        .fallback(fallback)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
