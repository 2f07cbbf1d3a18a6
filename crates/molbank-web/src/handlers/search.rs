//! Substructure search.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::handlers::parse_structure;
use crate::state::SharedState;
use molbank_common::Molecule;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub substructure: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SearchMatch {
    pub id: i64,
    pub smiles: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub matches: Vec<SearchMatch>,
}

/// POST /search - every stored molecule containing the query, in id order
pub async fn search_substructure(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = parse_structure(&request.substructure)?;
    let molecules = state.molecules.all().await?;
    let scanned = molecules.len();

    let matches = find_matches(&query, molecules);
    info!(
        substructure = %request.substructure,
        scanned,
        matched = matches.len(),
        "Substructure search"
    );
    Ok(Json(SearchResponse { matches }))
}

/// Rows whose structure no longer parses are skipped.
pub fn find_matches(query: &molbank_chem::Molecule, molecules: Vec<Molecule>) -> Vec<SearchMatch> {
    molecules
        .into_iter()
        .filter(|record| match molbank_chem::parse_smiles(&record.structure) {
            Ok(target) => target.has_substructure(query),
            Err(e) => {
                warn!(id = record.id, "Stored structure does not parse: {}", e);
                false
            }
        })
        .map(|record| SearchMatch { id: record.id, smiles: record.structure })
        .collect()
}
