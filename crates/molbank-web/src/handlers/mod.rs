//! HTTP handlers for all routes.

pub mod molecules;
pub mod root;
pub mod search;
pub mod upload;

use tracing::debug;

use crate::error::ApiError;

/// Parse a user-supplied SMILES, turning failure into the 400 the API promises.
pub(crate) fn parse_structure(smiles: &str) -> Result<molbank_chem::Molecule, ApiError> {
    molbank_chem::parse_smiles(smiles).map_err(|e| {
        debug!(smiles, "Rejected SMILES: {}", e);
        ApiError::invalid_smiles(smiles)
    })
}
