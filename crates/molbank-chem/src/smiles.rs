//! SMILES reader.
//!
//! Covers the OpenSMILES subset that matters for storage and substructure
//! queries: organic-subset and bracket atoms, bond symbols, branches, ring
//! closures (`0-9`, `%nn`) and dot-disconnected fragments. Stereo marks are
//! accepted and dropped.

use std::collections::HashMap;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};

use crate::element::Element;
use crate::error::SmilesError;
use crate::graph::{Atom, Bond, BondOrder, Molecule};

/// Parse a SMILES string. Surrounding whitespace is ignored.
pub fn parse_smiles(input: &str) -> Result<Molecule, SmilesError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SmilesError::Empty);
    }
    let offset = input.len() - input.trim_start().len();
    Parser::new(trimmed, offset).parse()
}

const AROMATIC_BRACKET_SYMBOLS: [(&str, Element); 9] = [
    ("se", Element::SE),
    ("as", Element::AS),
    ("te", Element::TE),
    ("b", Element::B),
    ("c", Element::C),
    ("n", Element::N),
    ("o", Element::O),
    ("p", Element::P),
    ("s", Element::S),
];

const CHIRAL_CLASSES: [&str; 5] = ["TH", "AL", "SP", "TB", "OH"];

struct RingOpening {
    atom: NodeIndex,
    order: Option<BondOrder>,
    pos: usize,
}

struct Parser<'a> {
    text: &'a str,
    src: &'a [u8],
    pos: usize,
    offset: usize,
    graph: UnGraph<Atom, Bond>,
    /// Source position of each atom, by node index.
    positions: Vec<usize>,
    prev: Option<NodeIndex>,
    pending: Option<(BondOrder, usize)>,
    branches: Vec<(NodeIndex, usize)>,
    rings: HashMap<u16, RingOpening>,
    /// Implicit aromatic bonds touching `*`, settled once the whole string is read.
    wildcard_bonds: Vec<EdgeIndex>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, offset: usize) -> Self {
        Self {
            text,
            src: text.as_bytes(),
            pos: 0,
            offset,
            graph: UnGraph::default(),
            positions: Vec::new(),
            prev: None,
            pending: None,
            branches: Vec::new(),
            rings: HashMap::new(),
            wildcard_bonds: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Molecule, SmilesError> {
        while let Some(c) = self.peek() {
            match c {
                b'(' => self.open_branch()?,
                b')' => self.close_branch()?,
                b'-' | b'=' | b'#' | b'$' | b':' | b'/' | b'\\' => self.bond(c)?,
                b'.' => self.dot()?,
                b'0'..=b'9' | b'%' => self.ring_closure()?,
                b'[' => {
                    let start = self.at();
                    let atom = self.bracket_atom()?;
                    self.add_atom(atom, start);
                }
                _ => {
                    let start = self.at();
                    let atom = self.organic_atom()?;
                    self.add_atom(atom, start);
                }
            }
        }
        self.finish()
    }

    fn at(&self) -> usize {
        self.offset + self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn unexpected(&self) -> SmilesError {
        let ch = self.text[self.pos..].chars().next().unwrap_or('\0');
        SmilesError::UnexpectedCharacter { ch, pos: self.at() }
    }

    fn open_branch(&mut self) -> Result<(), SmilesError> {
        let pos = self.at();
        let Some(prev) = self.prev else {
            return Err(self.unexpected());
        };
        if let Some((_, bond_pos)) = self.pending {
            return Err(SmilesError::DanglingBond { pos: bond_pos });
        }
        self.pos += 1;
        if self.peek() == Some(b')') {
            return Err(SmilesError::EmptyBranch { pos });
        }
        self.branches.push((prev, pos));
        Ok(())
    }

    fn close_branch(&mut self) -> Result<(), SmilesError> {
        let pos = self.at();
        if let Some((_, bond_pos)) = self.pending {
            return Err(SmilesError::DanglingBond { pos: bond_pos });
        }
        let (atom, _) = self
            .branches
            .pop()
            .ok_or(SmilesError::UnmatchedParenthesis { pos })?;
        self.prev = Some(atom);
        self.pos += 1;
        Ok(())
    }

    fn bond(&mut self, symbol: u8) -> Result<(), SmilesError> {
        let pos = self.at();
        if self.prev.is_none() {
            return Err(SmilesError::BondWithoutAtom { pos });
        }
        if self.pending.is_some() {
            return Err(self.unexpected());
        }
        let order = match symbol {
            b'=' => BondOrder::Double,
            b'#' => BondOrder::Triple,
            b'$' => BondOrder::Quadruple,
            b':' => BondOrder::Aromatic,
            _ => BondOrder::Single,
        };
        self.pending = Some((order, pos));
        self.pos += 1;
        Ok(())
    }

    fn dot(&mut self) -> Result<(), SmilesError> {
        if self.prev.is_none() {
            return Err(self.unexpected());
        }
        if let Some((_, bond_pos)) = self.pending {
            return Err(SmilesError::DanglingBond { pos: bond_pos });
        }
        self.prev = None;
        self.pos += 1;
        Ok(())
    }

    fn ring_closure(&mut self) -> Result<(), SmilesError> {
        let pos = self.at();
        let Some(here) = self.prev else {
            return Err(self.unexpected());
        };
        let label = self.ring_label()?;
        let bond = self.pending.take().map(|(order, _)| order);

        match self.rings.remove(&label) {
            None => {
                self.rings.insert(label, RingOpening { atom: here, order: bond, pos });
            }
            Some(open) => {
                if open.atom == here {
                    return Err(SmilesError::RingSelfBond { label, pos });
                }
                if self.graph.find_edge(open.atom, here).is_some() {
                    return Err(SmilesError::DuplicateBond { label, pos });
                }
                match (open.order, bond) {
                    (Some(a), Some(b)) if a != b => {
                        return Err(SmilesError::RingBondConflict { label, pos });
                    }
                    (Some(order), _) | (None, Some(order)) => {
                        self.graph.add_edge(open.atom, here, Bond::new(order));
                    }
                    (None, None) => self.add_implicit_bond(open.atom, here),
                }
            }
        }
        Ok(())
    }

    fn ring_label(&mut self) -> Result<u16, SmilesError> {
        if self.peek() == Some(b'%') {
            let digits = (self.src.get(self.pos + 1), self.src.get(self.pos + 2));
            let (Some(&d1), Some(&d2)) = digits else {
                return Err(self.unexpected());
            };
            if !d1.is_ascii_digit() || !d2.is_ascii_digit() {
                return Err(self.unexpected());
            }
            self.pos += 3;
            return Ok(u16::from(d1 - b'0') * 10 + u16::from(d2 - b'0'));
        }
        match self.peek() {
            Some(d) if d.is_ascii_digit() => {
                self.pos += 1;
                Ok(u16::from(d - b'0'))
            }
            _ => Err(self.unexpected()),
        }
    }

    fn organic_atom(&mut self) -> Result<Atom, SmilesError> {
        let next = self.src.get(self.pos + 1).copied();
        let (element, aromatic, len) = match (self.peek(), next) {
            (Some(b'C'), Some(b'l')) => (Element::CL, false, 2),
            (Some(b'B'), Some(b'r')) => (Element::BR, false, 2),
            (Some(b'B'), _) => (Element::B, false, 1),
            (Some(b'C'), _) => (Element::C, false, 1),
            (Some(b'N'), _) => (Element::N, false, 1),
            (Some(b'O'), _) => (Element::O, false, 1),
            (Some(b'P'), _) => (Element::P, false, 1),
            (Some(b'S'), _) => (Element::S, false, 1),
            (Some(b'F'), _) => (Element::F, false, 1),
            (Some(b'I'), _) => (Element::I, false, 1),
            (Some(b'b'), _) => (Element::B, true, 1),
            (Some(b'c'), _) => (Element::C, true, 1),
            (Some(b'n'), _) => (Element::N, true, 1),
            (Some(b'o'), _) => (Element::O, true, 1),
            (Some(b'p'), _) => (Element::P, true, 1),
            (Some(b's'), _) => (Element::S, true, 1),
            (Some(b'*'), _) => (Element::WILDCARD, false, 1),
            _ => return Err(self.unexpected()),
        };
        self.pos += len;
        Ok(Atom::organic(element, aromatic))
    }

    fn bracket_atom(&mut self) -> Result<Atom, SmilesError> {
        let start = self.at();
        self.pos += 1;

        let isotope = self.number(3);
        let (element, aromatic) = self.bracket_symbol(start)?;
        self.chirality();
        let hydrogens = self.hydrogen_count();
        let charge = self.charge(start)?;
        let atom_class = if self.eat(b':') {
            Some(self.number(4).ok_or(SmilesError::MalformedBracketAtom {
                pos: start,
                reason: "atom class without digits",
            })?)
        } else {
            None
        };

        if !self.eat(b']') {
            return Err(SmilesError::MalformedBracketAtom {
                pos: start,
                reason: "expected ']'",
            });
        }

        Ok(Atom {
            element,
            aromatic,
            charge,
            isotope,
            hydrogens,
            bracket: true,
            atom_class,
        })
    }

    fn number(&mut self, max_digits: usize) -> Option<u16> {
        let begin = self.pos;
        while self.pos - begin < max_digits && matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if begin == self.pos {
            return None;
        }
        self.text[begin..self.pos].parse().ok()
    }

    fn bracket_symbol(&mut self, start: usize) -> Result<(Element, bool), SmilesError> {
        let text = self.text;
        let rest = &text[self.pos..];
        if self.eat(b'*') {
            return Ok((Element::WILDCARD, false));
        }
        for (symbol, element) in AROMATIC_BRACKET_SYMBOLS {
            if rest.starts_with(symbol) {
                self.pos += symbol.len();
                return Ok((element, true));
            }
        }

        let bytes = rest.as_bytes();
        match bytes.first() {
            Some(first) if first.is_ascii_uppercase() => {
                if bytes.get(1).is_some_and(|b| b.is_ascii_lowercase()) {
                    if let Some(element) = Element::from_symbol(&rest[..2]) {
                        self.pos += 2;
                        return Ok((element, false));
                    }
                }
                let element = Element::from_symbol(&rest[..1]).ok_or_else(|| {
                    SmilesError::UnknownElement {
                        symbol: rest[..1].to_string(),
                        pos: self.at(),
                    }
                })?;
                self.pos += 1;
                Ok((element, false))
            }
            _ => Err(SmilesError::MalformedBracketAtom {
                pos: start,
                reason: "missing element symbol",
            }),
        }
    }

    fn chirality(&mut self) {
        if !self.eat(b'@') {
            return;
        }
        self.eat(b'@');
        let text = self.text;
        let rest = &text[self.pos..];
        if let Some(class) = CHIRAL_CLASSES.iter().find(|c| rest.starts_with(**c)) {
            self.pos += class.len();
            self.number(2);
        }
    }

    fn hydrogen_count(&mut self) -> u8 {
        if !self.eat(b'H') {
            return 0;
        }
        match self.peek() {
            Some(d) if d.is_ascii_digit() => {
                self.pos += 1;
                d - b'0'
            }
            _ => 1,
        }
    }

    fn charge(&mut self, start: usize) -> Result<i8, SmilesError> {
        let (symbol, sign) = match self.peek() {
            Some(b'+') => (b'+', 1i8),
            Some(b'-') => (b'-', -1i8),
            _ => return Ok(0),
        };
        self.pos += 1;

        if let Some(magnitude) = self.number(2) {
            if magnitude > 15 {
                return Err(SmilesError::MalformedBracketAtom {
                    pos: start,
                    reason: "charge out of range",
                });
            }
            return Ok(sign * magnitude as i8);
        }

        let mut magnitude = 1i8;
        while magnitude < 15 && self.eat(symbol) {
            magnitude += 1;
        }
        Ok(sign * magnitude)
    }

    fn add_atom(&mut self, atom: Atom, pos: usize) {
        let index = self.graph.add_node(atom);
        self.positions.push(pos);
        if let Some(prev) = self.prev {
            match self.pending.take() {
                Some((order, _)) => {
                    self.graph.add_edge(prev, index, Bond::new(order));
                }
                None => self.add_implicit_bond(prev, index),
            }
        }
        self.prev = Some(index);
    }

    fn add_implicit_bond(&mut self, a: NodeIndex, b: NodeIndex) {
        let (atom_a, atom_b) = (&self.graph[a], &self.graph[b]);
        let order = default_order(atom_a, atom_b);
        let touches_wildcard = atom_a.element.is_wildcard() || atom_b.element.is_wildcard();
        let edge = self.graph.add_edge(a, b, Bond::new(order));
        if order == BondOrder::Aromatic && touches_wildcard {
            self.wildcard_bonds.push(edge);
        }
    }

    /// A `*` stays in an aromatic system only when it has two aromatic
    /// neighbours, as in `c1cc*cc1`; otherwise its implicit bonds are single.
    fn settle_wildcard_bonds(&mut self) {
        let aromatic_bonds = |graph: &UnGraph<Atom, Bond>, atom: NodeIndex| {
            graph
                .edges(atom)
                .filter(|edge| edge.weight().order == BondOrder::Aromatic)
                .count()
        };
        let demoted: Vec<EdgeIndex> = self
            .wildcard_bonds
            .iter()
            .copied()
            .filter(|&edge| {
                let Some((a, b)) = self.graph.edge_endpoints(edge) else {
                    return false;
                };
                [a, b].into_iter().any(|atom| {
                    self.graph[atom].element.is_wildcard() && aromatic_bonds(&self.graph, atom) < 2
                })
            })
            .collect();
        for edge in demoted {
            self.graph[edge].order = BondOrder::Single;
        }
    }

    fn finish(mut self) -> Result<Molecule, SmilesError> {
        if let Some((_, pos)) = self.pending {
            return Err(SmilesError::DanglingBond { pos });
        }
        if let Some(&(_, pos)) = self.branches.last() {
            return Err(SmilesError::UnclosedBranch { pos });
        }
        if let Some((label, open)) = self.rings.iter().min_by_key(|(_, open)| open.pos) {
            return Err(SmilesError::UnclosedRing { label: *label, pos: open.pos });
        }

        self.settle_wildcard_bonds();
        self.assign_hydrogens()?;
        self.check_aromatic_atoms()?;
        Ok(Molecule::from_graph(self.graph))
    }

    /// Fill organic-subset atoms up to their lowest normal valence.
    fn assign_hydrogens(&mut self) -> Result<(), SmilesError> {
        let indices: Vec<NodeIndex> = self.graph.node_indices().collect();
        for index in indices {
            let atom = &self.graph[index];
            if atom.bracket || atom.element.is_wildcard() {
                continue;
            }
            let mut bonded: u32 = self
                .graph
                .edges(index)
                .map(|edge| u32::from(edge.weight().order.valence()))
                .sum();
            if atom.aromatic && !donates_lone_pair(atom.element) {
                bonded += 1;
            }
            let hydrogens = atom
                .element
                .default_valences()
                .iter()
                .find(|&&valence| u32::from(valence) >= bonded)
                .map(|&valence| valence - bonded as u8)
                .ok_or(SmilesError::ValenceExceeded {
                    symbol: atom.element.symbol(),
                    pos: self.positions[index.index()],
                })?;
            self.graph[index].hydrogens = hydrogens;
        }
        Ok(())
    }

    fn check_aromatic_atoms(&self) -> Result<(), SmilesError> {
        for index in self.graph.node_indices() {
            let atom = &self.graph[index];
            if !atom.aromatic {
                continue;
            }
            let aromatic_bonds = self
                .graph
                .edges(index)
                .filter(|edge| edge.weight().order == BondOrder::Aromatic)
                .count();
            if aromatic_bonds < 2 {
                return Err(SmilesError::AromaticOutsideRing {
                    symbol: atom.element.symbol(),
                    pos: self.positions[index.index()],
                });
            }
        }
        Ok(())
    }
}

/// Aromatic between two aromatic atoms; `*` counts as aromatic here.
fn default_order(a: &Atom, b: &Atom) -> BondOrder {
    let aromatic_like = |atom: &Atom| atom.aromatic || atom.element.is_wildcard();
    if aromatic_like(a) && aromatic_like(b) {
        BondOrder::Aromatic
    } else {
        BondOrder::Single
    }
}

/// Chalcogens contribute a lone pair to the aromatic system rather than a bond.
fn donates_lone_pair(element: Element) -> bool {
    matches!(element, Element::O | Element::S | Element::SE | Element::TE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Molecule {
        parse_smiles(s).unwrap_or_else(|e| panic!("{s}: {e}"))
    }

    #[test]
    fn test_ethanol() {
        let mol = parse("CCO");
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.bond_count(), 2);
        assert_eq!(mol.total_hydrogens(), 6);
    }

    #[test]
    fn test_branches_and_double_bonds() {
        let acetic_acid = parse("CC(=O)O");
        assert_eq!(acetic_acid.atom_count(), 4);
        assert_eq!(acetic_acid.bond_count(), 3);
        assert_eq!(acetic_acid.total_hydrogens(), 4);

        let carbonyl = acetic_acid
            .atoms()
            .find(|&i| acetic_acid.atom(i).element == Element::C && acetic_acid.degree(i) == 3)
            .unwrap();
        let doubles = acetic_acid
            .neighbors(carbonyl)
            .filter(|&n| acetic_acid.bond_between(carbonyl, n).unwrap().order == BondOrder::Double)
            .count();
        assert_eq!(doubles, 1);
    }

    #[test]
    fn test_benzene_is_aromatic_ring() {
        let benzene = parse("c1ccccc1");
        assert_eq!(benzene.atom_count(), 6);
        assert_eq!(benzene.bond_count(), 6);
        assert_eq!(benzene.total_hydrogens(), 6);
        for a in benzene.atoms() {
            for b in benzene.neighbors(a) {
                assert_eq!(benzene.bond_between(a, b).unwrap().order, BondOrder::Aromatic);
            }
        }
    }

    #[test]
    fn test_heteroaromatics() {
        assert_eq!(parse("c1ccncc1").total_hydrogens(), 5);
        assert_eq!(parse("o1cccc1").total_hydrogens(), 4);
        assert_eq!(parse("c1cc[nH]c1").total_hydrogens(), 5);
        assert_eq!(parse("s1cccc1").total_hydrogens(), 4);
    }

    #[test]
    fn test_two_letter_organic_atoms() {
        let mol = parse("ClCBr");
        let symbols: Vec<_> = mol.atoms().map(|i| mol.atom(i).element.symbol()).collect();
        assert_eq!(symbols, vec!["Cl", "C", "Br"]);
    }

    #[test]
    fn test_bracket_atom_fields() {
        let mol = parse("[13CH3:7][NH3+]");
        let carbon = mol.atom(NodeIndex::new(0));
        assert_eq!(carbon.isotope, Some(13));
        assert_eq!(carbon.hydrogens, 3);
        assert_eq!(carbon.atom_class, Some(7));
        let nitrogen = mol.atom(NodeIndex::new(1));
        assert_eq!(nitrogen.charge, 1);
        assert_eq!(nitrogen.hydrogens, 3);
    }

    #[test]
    fn test_charges() {
        assert_eq!(parse("[O-]").atom(NodeIndex::new(0)).charge, -1);
        assert_eq!(parse("[Fe++]").atom(NodeIndex::new(0)).charge, 2);
        assert_eq!(parse("[Fe+3]").atom(NodeIndex::new(0)).charge, 3);
    }

    #[test]
    fn test_stereo_marks_are_accepted() {
        assert_eq!(parse("N[C@@H](C)C(=O)O").atom_count(), 6);
        assert_eq!(parse("F/C=C/F").bond_count(), 3);
    }

    #[test]
    fn test_ring_closure_bond_symbol() {
        let mol = parse("C=1CCCCC1");
        let first = NodeIndex::new(0);
        let last = NodeIndex::new(5);
        assert_eq!(mol.bond_between(first, last).unwrap().order, BondOrder::Double);
        assert_eq!(parse("C%10CC%10").bond_count(), 3);
    }

    #[test]
    fn test_disconnected_fragments() {
        let salt = parse("[Na+].[Cl-]");
        assert_eq!(salt.components(), 2);
        assert_eq!(salt.bond_count(), 0);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse("  CCO\n").atom_count(), 3);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(parse_smiles(""), Err(SmilesError::Empty));
        assert_eq!(parse_smiles("   "), Err(SmilesError::Empty));
        assert!(matches!(
            parse_smiles("invalid_smiles"),
            Err(SmilesError::UnexpectedCharacter { ch: 'i', pos: 0 })
        ));
        assert!(matches!(parse_smiles("C C"), Err(SmilesError::UnexpectedCharacter { ch: ' ', .. })));
        assert!(matches!(parse_smiles("C(C"), Err(SmilesError::UnclosedBranch { pos: 1 })));
        assert!(matches!(parse_smiles("CC)"), Err(SmilesError::UnmatchedParenthesis { pos: 2 })));
        assert!(matches!(parse_smiles("C()C"), Err(SmilesError::EmptyBranch { .. })));
        assert!(matches!(parse_smiles("C1CC"), Err(SmilesError::UnclosedRing { label: 1, pos: 1 })));
        assert!(matches!(parse_smiles("C="), Err(SmilesError::DanglingBond { pos: 1 })));
        assert!(matches!(parse_smiles("=C"), Err(SmilesError::BondWithoutAtom { pos: 0 })));
        assert!(matches!(parse_smiles("C11"), Err(SmilesError::RingSelfBond { .. })));
        assert!(matches!(parse_smiles("C12CC12"), Err(SmilesError::DuplicateBond { .. })));
        assert!(matches!(parse_smiles("C=1CC#1"), Err(SmilesError::RingBondConflict { .. })));
        assert!(matches!(parse_smiles("[Xx]"), Err(SmilesError::UnknownElement { .. })));
        assert!(matches!(parse_smiles("[C"), Err(SmilesError::MalformedBracketAtom { .. })));
        assert!(matches!(parse_smiles("[]"), Err(SmilesError::MalformedBracketAtom { .. })));
    }

    #[test]
    fn test_valence_is_enforced() {
        assert!(matches!(
            parse_smiles("C(C)(C)(C)(C)C"),
            Err(SmilesError::ValenceExceeded { symbol: "C", pos: 0 })
        ));
        assert!(matches!(parse_smiles("O=O=O"), Err(SmilesError::ValenceExceeded { symbol: "O", .. })));
        assert!(parse_smiles("CS(=O)(=O)C").is_ok());
        assert!(parse_smiles("C[N+](C)(C)C").is_ok());
    }

    #[test]
    fn test_valence_of_heavily_bonded_atom() {
        let many_single = format!("C{}", "(C)".repeat(256));
        assert!(matches!(
            parse_smiles(&many_single),
            Err(SmilesError::ValenceExceeded { symbol: "C", pos: 0 })
        ));
        let many_quadruple = format!("C{}", "($C)".repeat(64));
        assert!(matches!(
            parse_smiles(&many_quadruple),
            Err(SmilesError::ValenceExceeded { symbol: "C", pos: 0 })
        ));
    }

    #[test]
    fn test_aromatic_atom_needs_ring() {
        assert!(matches!(
            parse_smiles("cC"),
            Err(SmilesError::AromaticOutsideRing { symbol: "C", pos: 0 })
        ));
        assert!(parse_smiles("c1ccccc1-c1ccccc1").is_ok());
    }

    #[test]
    fn test_wildcard_in_aromatic_ring() {
        let ring = parse("c1cc*cc1");
        let star = ring.atoms().find(|&i| ring.atom(i).element.is_wildcard()).unwrap();
        assert_eq!(ring.degree(star), 2);
        for neighbor in ring.neighbors(star) {
            assert_eq!(ring.bond_between(star, neighbor).unwrap().order, BondOrder::Aromatic);
        }
        assert!(parse_smiles("*1ccccc1").is_ok());
    }

    #[test]
    fn test_wildcard_substituent_bond_is_single() {
        let phenyl = parse("c1ccccc1*");
        let star = phenyl.atoms().find(|&i| phenyl.atom(i).element.is_wildcard()).unwrap();
        let ring_atom = phenyl.neighbors(star).next().unwrap();
        assert_eq!(phenyl.bond_between(star, ring_atom).unwrap().order, BondOrder::Single);
        assert_eq!(parse("**").bond_between(NodeIndex::new(0), NodeIndex::new(1)).unwrap().order, BondOrder::Single);
    }
}
