//! Table layout and row mapping.

use molbank_common::Molecule;

pub const TABLE_MOLECULES: &str = "molecules";

/// AUTOINCREMENT keeps ids of deleted molecules from being handed out again.
pub const CREATE_MOLECULES: &str = r#"
CREATE TABLE IF NOT EXISTS molecules (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    structure TEXT    NOT NULL
)
"#;

pub const DROP_MOLECULES: &str = "DROP TABLE IF EXISTS molecules";

#[derive(Debug, sqlx::FromRow)]
pub struct MoleculeRow {
    pub id: i64,
    pub structure: String,
}

impl From<MoleculeRow> for Molecule {
    fn from(row: MoleculeRow) -> Self {
        Molecule::new(row.id, row.structure)
    }
}
