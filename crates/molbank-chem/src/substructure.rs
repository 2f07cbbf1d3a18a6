//! Substructure containment by backtracking subgraph monomorphism.
//!
//! Query atoms are visited in breadth-first order so every atom after the
//! first of its fragment has an already-mapped anchor; its candidates are
//! then limited to the anchor image's neighbours. Backtracking keeps its own
//! stack of levels, so query size does not bound thread stack depth.

use std::cmp::Reverse;
use std::collections::VecDeque;

use crate::graph::{Atom, AtomIndex, Bond, Molecule};

/// `(query atom, target atom)` pairs, ordered by query atom index.
pub type AtomMapping = Vec<(AtomIndex, AtomIndex)>;

impl Molecule {
    /// Does `query` occur as a (not necessarily induced) subgraph of `self`?
    pub fn has_substructure(&self, query: &Molecule) -> bool {
        self.substructure_match(query).is_some()
    }

    /// First embedding of `query` into `self`, if any.
    pub fn substructure_match(&self, query: &Molecule) -> Option<AtomMapping> {
        if query.atom_count() > self.atom_count() || query.bond_count() > self.bond_count() {
            return None;
        }

        let mut matcher = Matcher {
            target: self,
            query,
            order: search_order(query),
            mapping: vec![None; query.atom_count()],
            used: vec![false; self.atom_count()],
        };
        if !matcher.search() {
            return None;
        }

        Some(
            query
                .atoms()
                .filter_map(|q| matcher.mapping[q.index()].map(|t| (q, t)))
                .collect(),
        )
    }
}

/// Atom-level compatibility of a query atom with a target atom.
pub fn atom_matches(query: &Atom, target: &Atom) -> bool {
    if query.element.is_wildcard() {
        return true;
    }
    query.element == target.element
        && query.aromatic == target.aromatic
        && (query.charge == 0 || query.charge == target.charge)
        && query.isotope.map_or(true, |isotope| target.isotope == Some(isotope))
}

pub fn bond_matches(query: &Bond, target: &Bond) -> bool {
    query.order == target.order
}

/// Each entry is an atom and the earlier atom it hangs off (`None` for fragment roots).
fn search_order(query: &Molecule) -> Vec<(AtomIndex, Option<AtomIndex>)> {
    let mut roots: Vec<AtomIndex> = query.atoms().collect();
    roots.sort_by_key(|&atom| Reverse(query.degree(atom)));

    let mut order = Vec::with_capacity(query.atom_count());
    let mut seen = vec![false; query.atom_count()];
    for root in roots {
        if seen[root.index()] {
            continue;
        }
        seen[root.index()] = true;
        let mut queue = VecDeque::from([(root, None)]);
        while let Some((atom, anchor)) = queue.pop_front() {
            order.push((atom, anchor));
            for next in query.neighbors(atom) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    queue.push_back((next, Some(atom)));
                }
            }
        }
    }
    order
}

/// Candidate targets for one query atom and how far through them we are.
struct Level {
    candidates: Vec<AtomIndex>,
    next: usize,
}

struct Matcher<'a> {
    target: &'a Molecule,
    query: &'a Molecule,
    order: Vec<(AtomIndex, Option<AtomIndex>)>,
    mapping: Vec<Option<AtomIndex>>,
    used: Vec<bool>,
}

impl Matcher<'_> {
    fn search(&mut self) -> bool {
        if self.order.is_empty() {
            return true;
        }
        let mut stack = vec![self.level(0)];

        while let Some(depth) = stack.len().checked_sub(1) {
            let (q, _) = self.order[depth];
            if let Some(t) = self.mapping[q.index()].take() {
                self.used[t.index()] = false;
            }

            let level = &mut stack[depth];
            let mut chosen = None;
            while let Some(&t) = level.candidates.get(level.next) {
                level.next += 1;
                if !self.used[t.index()] && self.feasible(q, t) {
                    chosen = Some(t);
                    break;
                }
            }

            match chosen {
                Some(t) => {
                    self.mapping[q.index()] = Some(t);
                    self.used[t.index()] = true;
                    if depth + 1 == self.order.len() {
                        return true;
                    }
                    let next = self.level(depth + 1);
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }
        false
    }

    fn level(&self, depth: usize) -> Level {
        let (_, anchor) = self.order[depth];
        let candidates = match anchor.and_then(|a| self.mapping[a.index()]) {
            Some(image) => self.target.neighbors(image).collect(),
            None => self.target.atoms().collect(),
        };
        Level { candidates, next: 0 }
    }

    fn feasible(&self, q: AtomIndex, t: AtomIndex) -> bool {
        if !atom_matches(self.query.atom(q), self.target.atom(t)) {
            return false;
        }
        if self.target.degree(t) < self.query.degree(q) {
            return false;
        }
        self.query.neighbors(q).all(|qn| match self.mapping[qn.index()] {
            None => true,
            Some(tn) => match (self.query.bond_between(q, qn), self.target.bond_between(t, tn)) {
                (Some(qb), Some(tb)) => bond_matches(qb, tb),
                _ => false,
            },
        })
    }
}
