//! Molecular graph built on petgraph.

use std::str::FromStr;

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::element::Element;
use crate::error::SmilesError;

pub type AtomIndex = NodeIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Quadruple,
    Aromatic,
}

impl BondOrder {
    /// Contribution to the bonded valence of each endpoint. Aromatic bonds
    /// count as one; the extra pi electron is accounted for per atom.
    pub fn valence(self) -> u8 {
        match self {
            BondOrder::Single | BondOrder::Aromatic => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
            BondOrder::Quadruple => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond {
    pub order: BondOrder,
}

impl Bond {
    pub fn new(order: BondOrder) -> Self {
        Self { order }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub element: Element,
    pub aromatic: bool,
    pub charge: i8,
    pub isotope: Option<u16>,
    /// Explicit count for bracket atoms, derived from valence otherwise.
    pub hydrogens: u8,
    /// Written in `[...]` form.
    pub bracket: bool,
    pub atom_class: Option<u16>,
}

impl Atom {
    pub fn organic(element: Element, aromatic: bool) -> Self {
        Self {
            element,
            aromatic,
            charge: 0,
            isotope: None,
            hydrogens: 0,
            bracket: false,
            atom_class: None,
        }
    }
}

/// A parsed molecule. Atom indices are dense and stable: atoms are never removed.
#[derive(Debug, Clone)]
pub struct Molecule {
    graph: UnGraph<Atom, Bond>,
}

impl Molecule {
    pub(crate) fn from_graph(graph: UnGraph<Atom, Bond>) -> Self {
        Self { graph }
    }

    pub fn from_smiles(smiles: &str) -> Result<Self, SmilesError> {
        crate::smiles::parse_smiles(smiles)
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn atoms(&self) -> impl Iterator<Item = AtomIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn atom(&self, index: AtomIndex) -> &Atom {
        &self.graph[index]
    }

    pub fn neighbors(&self, index: AtomIndex) -> impl Iterator<Item = AtomIndex> + '_ {
        self.graph.neighbors(index)
    }

    pub fn degree(&self, index: AtomIndex) -> usize {
        self.graph.neighbors(index).count()
    }

    pub fn bond_between(&self, a: AtomIndex, b: AtomIndex) -> Option<&Bond> {
        self.graph.find_edge(a, b).map(|e| &self.graph[e])
    }

    /// Implicit plus explicit hydrogens, including `[H]` atoms.
    pub fn total_hydrogens(&self) -> u32 {
        self.graph
            .node_weights()
            .map(|atom| {
                let own = u32::from(atom.hydrogens);
                if atom.element == Element::H { own + 1 } else { own }
            })
            .sum()
    }

    /// Number of dot-separated fragments.
    pub fn components(&self) -> usize {
        connected_components(&self.graph)
    }
}

impl FromStr for Molecule {
    type Err = SmilesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Molecule::from_smiles(s)
    }
}
