/*!
Coalitions, aka. subsets of subjects.

A coalition is a fixed-width bitmask, with bit *i* set if and only if subject *i* is a member.
So, inclusion, disjointness, and complements are each a single operation on integers.

The power set of *n* subjects is enumerated by increasing size, and within a size by the lexicographic order of members, e.g. for three subjects:

```rust
# use mrsort_sat::structures::coalition::power_set;
let names = power_set(3).iter().map(|c| c.to_string()).collect::<Vec<_>>();
assert_eq!(
    names,
    vec!["{}", "{0}", "{1}", "{2}", "{0, 1}", "{0, 2}", "{1, 2}", "{0, 1, 2}"]
);
```
*/

use serde::Serialize;

use crate::structures::dataset::Subject;

/// The most subjects a coalition may range over.
pub const COALITION_WIDTH: usize = 20;

/// A subset of subjects, as a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "Vec<Subject>")]
pub struct Coalition(u32);

impl Coalition {
    /// The coalition without members.
    pub const EMPTY: Coalition = Coalition(0);

    /// The coalition of all subjects in [0, *subjects*).
    pub fn full(subjects: usize) -> Self {
        debug_assert!(subjects <= COALITION_WIDTH);
        Coalition(((1_u64 << subjects) - 1) as u32)
    }

    pub fn from_bits(bits: u32) -> Self {
        Coalition(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// The coalition extended with the given subject.
    pub fn with(self, subject: Subject) -> Self {
        Coalition(self.0 | (1 << subject))
    }

    pub fn contains(&self, subject: Subject) -> bool {
        subject < COALITION_WIDTH && self.0 & (1 << subject) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_subset_of(&self, other: &Coalition) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn is_strict_subset_of(&self, other: &Coalition) -> bool {
        self.is_subset_of(other) && self.0 != other.0
    }

    pub fn is_disjoint(&self, other: &Coalition) -> bool {
        self.0 & other.0 == 0
    }

    pub fn union(&self, other: &Coalition) -> Coalition {
        Coalition(self.0 | other.0)
    }

    /// The members of `within` which are not members of the coalition.
    pub fn complement_within(&self, within: &Coalition) -> Coalition {
        Coalition(within.0 & !self.0)
    }

    /// The members of the coalition, in increasing order.
    pub fn subjects(&self) -> impl Iterator<Item = Subject> {
        let coalition = *self;
        (0..COALITION_WIDTH).filter(move |subject| coalition.contains(*subject))
    }
}

impl FromIterator<Subject> for Coalition {
    fn from_iter<I: IntoIterator<Item = Subject>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Coalition::EMPTY, |coalition, subject| coalition.with(subject))
    }
}

impl From<Coalition> for Vec<Subject> {
    fn from(value: Coalition) -> Self {
        value.subjects().collect()
    }
}

impl std::fmt::Display for Coalition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let members = self
            .subjects()
            .map(|subject| subject.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{members}}}")
    }
}

/// Every coalition of subjects in [0, *subjects*), by increasing size and then lexicographically.
pub fn power_set(subjects: usize) -> Vec<Coalition> {
    let mut coalitions = Vec::with_capacity(1 << subjects);
    for size in 0..=subjects {
        combinations(subjects, size, &mut coalitions);
    }
    coalitions
}

// Pushes each size-element combination of [0, subjects) in lexicographic order.
fn combinations(subjects: usize, size: usize, out: &mut Vec<Coalition>) {
    let mut indices = (0..size).collect::<Vec<_>>();
    loop {
        out.push(indices.iter().copied().collect());

        let Some(pivot) = (0..size)
            .rev()
            .find(|&i| indices[i] != i + subjects - size)
        else {
            return;
        };

        indices[pivot] += 1;
        for i in pivot + 1..size {
            indices[i] = indices[i - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_set_sizes() {
        for subjects in 0..=8 {
            let coalitions = power_set(subjects);
            assert_eq!(coalitions.len(), 1 << subjects);

            let mut bits = coalitions.iter().map(|c| c.bits()).collect::<Vec<_>>();
            bits.sort();
            bits.dedup();
            assert_eq!(bits.len(), 1 << subjects);

            assert!(coalitions.windows(2).all(|pair| pair[0].len() <= pair[1].len()));
        }
    }

    #[test]
    fn lexicographic_within_size() {
        let pairs = power_set(4)
            .into_iter()
            .filter(|c| c.len() == 2)
            .map(Vec::<Subject>::from)
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn relations() {
        let full = Coalition::full(4);
        let a: Coalition = [0, 2].into_iter().collect();
        let b: Coalition = [0].into_iter().collect();

        assert!(b.is_strict_subset_of(&a));
        assert!(a.is_subset_of(&a));
        assert!(!a.is_strict_subset_of(&a));

        let complement = a.complement_within(&full);
        assert_eq!(complement.subjects().collect::<Vec<_>>(), vec![1, 3]);
        assert!(complement.is_disjoint(&a));
        assert_eq!(complement.union(&a), full);
    }
}
