//! molbank-common: Shared records and user-facing messages used across all Molbank crates.

pub mod entities;
pub mod messages;

pub use entities::{Molecule, NewMolecule};
