/*!
A function from atoms to truth values.

The canonical representation of a valuation is a vector of booleans, where:
- The zero index (first) element is true, interpreted as some arbitrary tautology.
- Each non-zero index of the vector is interpreted as an atom.

As the atoms of an instance are a contiguous slice of positive integers starting from 1 --- [1..] --- the value of atom *i* is the contents of the *i*th index of the vector.

```rust
# use mrsort_sat::structures::valuation::Valuation;
let valuation = vec![true, false, true];

assert_eq!(valuation.value_of(1), Some(false));
assert_eq!(valuation.value_of(3), None);
assert_eq!(valuation.atom_count(), 2);
```
*/

use crate::structures::{
    atom::{Atom, TOP_ATOM},
    literal::{IntLiteral, Literal},
};

/// Valuation methods, implemented for anything which dereferences to a slice of booleans.
pub trait Valuation {
    /// The value of an atom, if the atom is within the valuation.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The count of atoms valued, excluding the top atom.
    fn atom_count(&self) -> usize;

    /// The valuation as a sequence of literals, in order of atom.
    fn literals(&self) -> impl Iterator<Item = IntLiteral>;
}

impl<T: std::ops::Deref<Target = [bool]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied()
    }

    fn atom_count(&self) -> usize {
        self.len().saturating_sub(1)
    }

    fn literals(&self) -> impl Iterator<Item = IntLiteral> {
        self.iter()
            .enumerate()
            .skip(1)
            .map(|(atom, value)| IntLiteral::new(atom as Atom, *value))
    }
}

/// A valuation with every atom of [1..=*atom_count*] false.
pub fn all_false(atom_count: usize) -> Vec<bool> {
    let mut valuation = vec![false; atom_count + 1];
    valuation[TOP_ATOM as usize] = true;
    valuation
}

/// A valuation of [1..=*atom_count*] from a sequence of literals.
///
/// Atoms without a literal are false, and literals over atoms outside of the valuation are ignored.
pub fn from_literals(
    atom_count: usize,
    literals: impl IntoIterator<Item = IntLiteral>,
) -> Vec<bool> {
    let mut valuation = all_false(atom_count);
    for literal in literals {
        if let Some(value) = valuation.get_mut(literal.atom() as usize) {
            if literal.atom() != TOP_ATOM {
                *value = literal.polarity();
            }
        }
    }
    valuation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_round_trip() {
        let valuation = from_literals(4, [2, -1, 4, 9]);
        assert_eq!(valuation, vec![true, false, true, false, true]);
        assert_eq!(valuation.literals().collect::<Vec<_>>(), vec![-1, 2, -3, 4]);
    }
}
