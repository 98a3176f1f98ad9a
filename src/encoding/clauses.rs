/*!
The five families of clauses of an MR-Sort instance.

Structural clauses axiomatise an MR-Sort model, independent of any data:
1. Ascending scales --- for each subject and boundary, a threshold true at mark *k* is true at every higher mark.
2. Profile hierarchy --- for each subject and mark, a threshold true at a boundary is true at every lower boundary.
3. Coalition strength --- a coalition with a sufficient subset is sufficient.

Dataset clauses tie a model to the labeled students:
4. Upper consistency --- a student of class *h - 1* does not clear boundary *h* through a sufficient coalition.
5. Lower consistency --- a student of class *h* or higher clears boundary *h*, so for any coalition *B* either the student clears some subject of *B*, or the complement of *B* is sufficient.

Each family is generated in a fixed order, so the same variable space and partition always give the same clauses.
*/

use std::collections::HashSet;

use crate::{
    encoding::variables::VariableSpace,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        coalition::Coalition,
        dataset::{Mark, Partition, Subject},
        literal::{IntLiteral, Literal},
    },
    types::err::EncodingError,
};

/// The clauses of an instance, split by weight tier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClauseSet {
    /// Clauses of families 1, 2, and 3.
    pub structural: Vec<CClause>,

    /// Clauses of families 4 and 5.
    pub dataset: Vec<CClause>,
}

impl ClauseSet {
    pub fn clause_count(&self) -> usize {
        self.structural.len() + self.dataset.len()
    }
}

/// Generates every clause of an instance.
pub fn generate(space: &VariableSpace, partition: &Partition) -> Result<ClauseSet, EncodingError> {
    let mut structural = ascending_scales(space)?;
    structural.extend(profile_hierarchy(space)?);
    structural.extend(coalition_strength(space)?);

    let mut dataset = upper_consistency(space, partition)?;
    dataset.extend(lower_consistency(space, partition)?);

    log::info!(target: targets::CLAUSES,
        "{} structural and {} dataset clauses",
        structural.len(),
        dataset.len());

    Ok(ClauseSet {
        structural,
        dataset,
    })
}

/// `x(i,h,k') ∨ ¬x(i,h,k)` for every subject, every boundary, and every pair of marks *k* < *k'*.
pub fn ascending_scales(space: &VariableSpace) -> Result<Vec<CClause>, EncodingError> {
    let mut clauses = Vec::default();
    for subject in 0..space.subject_count() {
        for boundary in 0..space.class_count() {
            for mark in 0..space.max_mark() {
                let lower = space.threshold(subject, boundary, mark)?;
                for higher_mark in mark + 1..=space.max_mark() {
                    let higher = space.threshold(subject, boundary, higher_mark)?;
                    clauses.push(vec![
                        IntLiteral::new(higher, true),
                        IntLiteral::new(lower, false),
                    ]);
                }
            }
        }
    }
    log::debug!(target: targets::CLAUSES, "Ascending scales: {}", clauses.len());
    Ok(clauses)
}

/// `x(i,h,k) ∨ ¬x(i,h',k)` for every subject, every mark, and every pair of boundaries *h* < *h'*.
pub fn profile_hierarchy(space: &VariableSpace) -> Result<Vec<CClause>, EncodingError> {
    let mut clauses = Vec::default();
    for subject in 0..space.subject_count() {
        for boundary in 0..space.class_count() {
            for higher_boundary in boundary + 1..space.class_count() {
                for mark in 0..=space.max_mark() {
                    let lower = space.threshold(subject, boundary, mark)?;
                    let higher = space.threshold(subject, higher_boundary, mark)?;
                    clauses.push(vec![
                        IntLiteral::new(lower, true),
                        IntLiteral::new(higher, false),
                    ]);
                }
            }
        }
    }
    log::debug!(target: targets::CLAUSES, "Profile hierarchy: {}", clauses.len());
    Ok(clauses)
}

/// `y(B) ∨ ¬y(B')` for every coalition *B* and every strict subset *B'* of *B*.
///
/// As coalitions are enumerated by size, every strict subset of a coalition is met before the coalition.
pub fn coalition_strength(space: &VariableSpace) -> Result<Vec<CClause>, EncodingError> {
    let mut clauses = Vec::default();
    let mut seen: HashSet<(IntLiteral, IntLiteral)> = HashSet::default();

    for coalition in space.coalitions() {
        let stronger = space.coalition(*coalition)?;
        for subset in strict_subsets(*coalition) {
            let weaker = space.coalition(subset)?;
            let pair = (
                IntLiteral::new(stronger, true),
                IntLiteral::new(weaker, false),
            );
            if seen.insert(pair) {
                clauses.push(vec![pair.0, pair.1]);
            }
        }
    }
    log::debug!(target: targets::CLAUSES, "Coalition strength: {}", clauses.len());
    Ok(clauses)
}

/// `¬y(B) ∨ ⋁_{i∈B} ¬x(i,h,mark_i)` for every coalition *B*, every boundary *h* in [1, *C*), and every student of class *h - 1*.
pub fn upper_consistency(
    space: &VariableSpace,
    partition: &Partition,
) -> Result<Vec<CClause>, EncodingError> {
    let mut clauses = Vec::default();
    for coalition in space.coalitions() {
        let sufficient = space.coalition(*coalition)?;
        for boundary in 1..space.class_count() {
            for student in partition.class(boundary - 1) {
                let mut clause = vec![IntLiteral::new(sufficient, false)];
                for subject in coalition.subjects() {
                    let cleared = space.threshold(subject, boundary, mark_of(student, subject)?)?;
                    clause.push(IntLiteral::new(cleared, false));
                }
                clauses.push(clause);
            }
        }
    }
    log::debug!(target: targets::CLAUSES, "Upper consistency: {}", clauses.len());
    Ok(clauses)
}

/// `y(B̄) ∨ ⋁_{i∈B} x(i,h,mark_i)` for every coalition *B* with complement *B̄*, every boundary *h* in [1, *C*), and every student of class *h* or higher.
pub fn lower_consistency(
    space: &VariableSpace,
    partition: &Partition,
) -> Result<Vec<CClause>, EncodingError> {
    let mut clauses = Vec::default();
    for coalition in space.coalitions() {
        let complement = space.coalition(space.complement(*coalition)?)?;
        for boundary in 1..space.class_count() {
            for student in partition.at_least(boundary) {
                let mut clause = vec![IntLiteral::new(complement, true)];
                for subject in coalition.subjects() {
                    let cleared = space.threshold(subject, boundary, mark_of(student, subject)?)?;
                    clause.push(IntLiteral::new(cleared, true));
                }
                clauses.push(clause);
            }
        }
    }
    log::debug!(target: targets::CLAUSES, "Lower consistency: {}", clauses.len());
    Ok(clauses)
}

fn mark_of(student: &[Mark], subject: Subject) -> Result<Mark, EncodingError> {
    student
        .get(subject)
        .copied()
        .ok_or(EncodingError::MissingMark { subject })
}

// Every strict subset of a coalition, by descending bits.
fn strict_subsets(coalition: Coalition) -> impl Iterator<Item = Coalition> {
    let bits = coalition.bits();
    let first = match bits {
        0 => None,
        _ => Some((bits - 1) & bits),
    };
    std::iter::successors(first, move |subset| match subset {
        0 => None,
        _ => Some((subset - 1) & bits),
    })
    .map(Coalition::from_bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::clause::Clause;

    fn space(subjects: usize, classes: usize) -> VariableSpace {
        VariableSpace::new(subjects, classes, 20).unwrap()
    }

    #[test]
    fn ascending_count() {
        let space = space(3, 3);
        let clauses = ascending_scales(&space).unwrap();
        // C(21, 2) per subject and boundary.
        assert_eq!(clauses.len(), 3 * 3 * 210);

        let first = space.threshold(1, 2, 0).unwrap();
        let last = space.threshold(1, 2, 20).unwrap();
        let per_pair = clauses
            .iter()
            .filter(|clause| clause.atoms().all(|atom| (first..=last).contains(&atom)))
            .count();
        assert_eq!(per_pair, 210);
    }

    #[test]
    fn hierarchy_count() {
        let clauses = profile_hierarchy(&space(2, 3)).unwrap();
        // Three pairs of boundaries, each over 21 marks.
        assert_eq!(clauses.len(), 2 * 3 * 21);
    }

    #[test]
    fn strict_subset_enumeration() {
        let coalition: Coalition = [0, 2, 3].into_iter().collect();
        let subsets = strict_subsets(coalition).collect::<Vec<_>>();
        assert_eq!(subsets.len(), 7);
        assert!(subsets.iter().all(|s| s.is_strict_subset_of(&coalition)));
        assert!(subsets.contains(&Coalition::EMPTY));
        assert_eq!(strict_subsets(Coalition::EMPTY).count(), 0);
    }

    #[test]
    fn strength_without_duplicates() {
        let space = space(4, 2);
        let clauses = coalition_strength(&space).unwrap();

        let pairs = clauses
            .iter()
            .map(|clause| (clause[0], clause[1]))
            .collect::<HashSet<_>>();
        assert_eq!(pairs.len(), clauses.len());

        // Each coalition of size s has 2^s - 1 strict subsets, so 3^4 - 2^4 in total.
        assert_eq!(clauses.len(), 81 - 16);
        assert!(clauses.iter().all(|clause| clause[0].polarity() && !clause[1].polarity()));
    }

    #[test]
    fn dataset_counts() {
        let space = space(2, 3);
        let marks: Vec<Vec<Mark>> = vec![vec![3, 4], vec![10, 12], vec![19, 20], vec![15, 9]];
        let partition = Partition::new(&marks, &[0, 1, 2, 1], 2, 3).unwrap();

        // Four coalitions, against class 0 at boundary 1 and class 1 at boundary 2.
        let upper = upper_consistency(&space, &partition).unwrap();
        assert_eq!(upper.len(), 4 * (1 + 2));

        // Four coalitions, against classes 1 and 2 at boundary 1, and class 2 at boundary 2.
        let lower = lower_consistency(&space, &partition).unwrap();
        assert_eq!(lower.len(), 4 * (3 + 1));

        assert!(upper.iter().all(|clause| clause.literals().all(|l| !l.polarity())));
        assert!(lower.iter().all(|clause| clause.literals().all(|l| l.polarity())));
    }

    #[test]
    fn rows_narrower_than_the_space_are_errors() {
        let space = space(3, 2);
        let marks: Vec<Vec<Mark>> = vec![vec![3, 4], vec![10, 12]];
        let partition = Partition::new(&marks, &[0, 1], 2, 2).unwrap();
        assert_eq!(
            generate(&space, &partition),
            Err(EncodingError::MissingMark { subject: 2 })
        );
    }

    #[test]
    fn unmapped_marks_are_errors() {
        let space = space(2, 2);
        let marks: Vec<Vec<Mark>> = vec![vec![3, 4], vec![10, 21]];
        let partition = Partition::new(&marks, &[0, 1], 2, 2).unwrap();
        assert!(matches!(
            lower_consistency(&space, &partition),
            Err(EncodingError::UnmappedVariable(_))
        ));
    }
}
