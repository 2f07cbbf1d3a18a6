//! Molecule records exchanged between the storage layer and the HTTP surface.

use serde::{Deserialize, Serialize};

/// A stored molecule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Molecule {
    pub id: i64,
    /// SMILES string, validated before it was persisted.
    pub structure: String,
}

impl Molecule {
    pub fn new(id: i64, structure: impl Into<String>) -> Self {
        Self { id, structure: structure.into() }
    }
}

/// Payload for creating or replacing a molecule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMolecule {
    pub structure: String,
}
