//! SMILES parse errors. Positions are byte offsets into the input string.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SmilesError {
    #[error("empty SMILES string")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedCharacter { ch: char, pos: usize },

    #[error("unknown element symbol '{symbol}' at position {pos}")]
    UnknownElement { symbol: String, pos: usize },

    #[error("malformed bracket atom at position {pos}: {reason}")]
    MalformedBracketAtom { pos: usize, reason: &'static str },

    #[error("unmatched ')' at position {pos}")]
    UnmatchedParenthesis { pos: usize },

    #[error("branch opened at position {pos} is never closed")]
    UnclosedBranch { pos: usize },

    #[error("empty branch at position {pos}")]
    EmptyBranch { pos: usize },

    #[error("bond at position {pos} is not preceded by an atom")]
    BondWithoutAtom { pos: usize },

    #[error("bond at position {pos} is not followed by an atom")]
    DanglingBond { pos: usize },

    #[error("ring closure {label} opened at position {pos} is never closed")]
    UnclosedRing { label: u16, pos: usize },

    #[error("ring closure {label} at position {pos} bonds an atom to itself")]
    RingSelfBond { label: u16, pos: usize },

    #[error("ring closure {label} at position {pos} duplicates an existing bond")]
    DuplicateBond { label: u16, pos: usize },

    #[error("conflicting bond symbols on ring closure {label} at position {pos}")]
    RingBondConflict { label: u16, pos: usize },

    #[error("atom '{symbol}' at position {pos} exceeds its allowed valence")]
    ValenceExceeded { symbol: &'static str, pos: usize },

    #[error("aromatic atom '{symbol}' at position {pos} is not part of an aromatic ring")]
    AromaticOutsideRing { symbol: &'static str, pos: usize },
}
