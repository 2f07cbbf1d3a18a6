//! Molecule CRUD endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::handlers::parse_structure;
use crate::state::SharedState;
use molbank_common::{messages, Molecule, NewMolecule};

/// Confirmation returned by add, update and delete.
#[derive(Debug, Serialize)]
pub struct MoleculeAck {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
    #[serde(default)]
    pub skip: u32,
    /// No limit when absent.
    pub limit: Option<u32>,
}

/// POST /add
pub async fn add_molecule(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<NewMolecule>,
) -> Result<Json<MoleculeAck>, ApiError> {
    parse_structure(&payload.structure)?;
    let id = state.molecules.insert(&payload.structure).await?;

    info!(id, structure = %payload.structure, "Molecule added");
    Ok(Json(MoleculeAck { message: messages::MOLECULE_ADDED, id }))
}

/// GET /molecule/{id}
pub async fn get_molecule(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Molecule>, ApiError> {
    state
        .molecules
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(ApiError::molecule_not_found)
}

/// PUT /molecule/{id} - unknown ids are reported before invalid structures
pub async fn update_molecule(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<NewMolecule>,
) -> Result<Json<MoleculeAck>, ApiError> {
    if state.molecules.get(id).await?.is_none() {
        return Err(ApiError::molecule_not_found());
    }
    parse_structure(&payload.structure)?;

    if !state.molecules.update(id, &payload.structure).await? {
        return Err(ApiError::molecule_not_found());
    }

    info!(id, structure = %payload.structure, "Molecule updated");
    Ok(Json(MoleculeAck { message: messages::MOLECULE_UPDATED, id }))
}

/// DELETE /molecule/{id}
pub async fn delete_molecule(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MoleculeAck>, ApiError> {
    if !state.molecules.delete(id).await? {
        return Err(ApiError::molecule_not_found());
    }

    info!(id, "Molecule deleted");
    Ok(Json(MoleculeAck { message: messages::MOLECULE_DELETED, id }))
}

/// GET /list?skip=&limit=
pub async fn list_molecules(
    State(state): State<SharedState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<Molecule>>, ApiError> {
    let limit = params.limit.map(i64::from).unwrap_or(i64::MAX);
    let molecules = state.molecules.list(i64::from(params.skip), limit).await?;
    Ok(Json(molecules))
}
