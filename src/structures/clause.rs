//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use mrsort_sat::structures::clause::Clause;
//! let clause = vec![3, -1];
//! let valuation = vec![true, true, false, false];
//!
//! assert_eq!(clause.as_dimacs(true), "3 -1 0");
//! assert!(!clause.satisfied_on(&valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Clauses are paired with a [Weight] only when written, as every clause of a family shares a weight.

use crate::structures::{
    atom::Atom,
    literal::{IntLiteral, Literal},
    valuation::Valuation,
};

/// The weight of a clause, i.e. the cost of violating the clause.
pub type Weight = u64;

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order of addition.
    fn literals(&self) -> impl Iterator<Item = &IntLiteral>;

    /// An iterator over all atoms in the clause, in order of addition.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// Returns whether some literal of the clause has the polarity of its atom on the given valuation.
    ///
    /// Atoms outside of the valuation satisfy nothing.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<IntLiteral>;

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &IntLiteral> {
        self.iter()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
    }
}
