//! molbank-chem: the chemistry collaborator behind the Molbank service.
//!
//! Two questions are answered here and nothing more:
//!   - is this string a valid SMILES? ([`parse_smiles`])
//!   - does molecule A contain molecule B? ([`Molecule::has_substructure`])
//!
//! ```
//! use molbank_chem::Molecule;
//!
//! let ethanol: Molecule = "CCO".parse().unwrap();
//! let hydroxyl: Molecule = "CO".parse().unwrap();
//! assert!(ethanol.has_substructure(&hydroxyl));
//! ```

pub mod element;
pub mod error;
pub mod graph;
pub mod smiles;
pub mod substructure;

pub use element::Element;
pub use error::SmilesError;
pub use graph::{Atom, AtomIndex, Bond, BondOrder, Molecule};
pub use smiles::parse_smiles;
pub use substructure::AtomMapping;
