/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

The atom 0 is never written to an instance, as the weighted clause format reserves `0` to terminate a clause.
So, the atoms of an instance with *m* variables are [1..=*m*], and the atom 0 is reserved as an index for valuations.

Atoms are allocated by a [VariableSpace](crate::encoding::variables::VariableSpace), which also records the name of the atom --- either a threshold or a coalition.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom reserved for the index of a valuation.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
