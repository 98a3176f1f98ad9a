/*!
The variable space of an instance.

Variables are of two families, and each variable is given a dense index, starting from 1:
- Thresholds `x(i, h, k)` occupy [1, *n*·*C*·(*M*+1)], with the index of a threshold computed directly as 1 + (*i*·*C* + *h*)·(*M*+1) + *k*.
- Coalitions `y(B)` follow immediately, in the order of the [power set](crate::structures::coalition::power_set).

The index of a coalition is read from a rank table indexed by the bits of the coalition, and the complement of a coalition is read in the same way.

```rust
# use mrsort_sat::encoding::variables::VariableSpace;
# use mrsort_sat::structures::{coalition::Coalition, variable::Variable};
let space = VariableSpace::new(2, 2, 20).unwrap();

assert_eq!(space.threshold_count(), 2 * 2 * 21);
assert_eq!(space.coalition_count(), 4);

assert_eq!(space.threshold(0, 0, 0), Ok(1));
assert_eq!(space.coalition(Coalition::EMPTY), Ok(85));
assert_eq!(
    space.variable(2),
    Some(Variable::Threshold { subject: 0, boundary: 0, mark: 1 })
);
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        coalition::{power_set, Coalition, COALITION_WIDTH},
        dataset::{Boundary, Mark, Shape, Subject},
        variable::Variable,
    },
    types::err::{ConfigError, EncodingError},
};

/// The variables of an instance, and the map between variables and atoms.
#[derive(Clone, Debug)]
pub struct VariableSpace {
    subjects: usize,
    classes: usize,
    max_mark: Mark,

    /// Every coalition, in power set order.
    coalitions: Vec<Coalition>,

    /// The position of each coalition in `coalitions`, indexed by the bits of the coalition.
    ranks: Vec<Option<usize>>,
}

impl VariableSpace {
    /// Builds the variable space of `subjects` subjects, `classes` classes, and marks in [0, `max_mark`].
    pub fn new(subjects: usize, classes: usize, max_mark: Mark) -> Result<Self, ConfigError> {
        if subjects == 0 {
            return Err(ConfigError::NoSubjects);
        }
        if subjects > COALITION_WIDTH {
            return Err(ConfigError::TooManySubjects {
                subjects,
                max: COALITION_WIDTH,
            });
        }
        if classes < 2 {
            return Err(ConfigError::TooFewClasses { classes });
        }

        let required = subjects
            .checked_mul(classes)
            .and_then(|count| count.checked_mul(max_mark as usize + 1))
            .and_then(|count| count.checked_add(1 << subjects));
        match required {
            Some(count) if count <= ATOM_MAX as usize => {}
            _ => {
                return Err(ConfigError::VariableOverflow {
                    max: ATOM_MAX as usize,
                })
            }
        }

        let coalitions = power_set(subjects);
        let mut ranks = vec![None; coalitions.len()];
        for (rank, coalition) in coalitions.iter().enumerate() {
            ranks[coalition.bits() as usize] = Some(rank);
        }

        let space = VariableSpace {
            subjects,
            classes,
            max_mark,
            coalitions,
            ranks,
        };

        log::info!(target: targets::VARIABLES,
            "{} threshold and {} coalition variables for {subjects} subjects and {classes} classes",
            space.threshold_count(),
            space.coalition_count());

        Ok(space)
    }

    /// The variable space of a validated dataset.
    pub fn for_shape(shape: &Shape, max_mark: Mark) -> Result<Self, ConfigError> {
        VariableSpace::new(shape.subjects(), shape.classes(), max_mark)
    }

    pub fn subject_count(&self) -> usize {
        self.subjects
    }

    pub fn class_count(&self) -> usize {
        self.classes
    }

    pub fn max_mark(&self) -> Mark {
        self.max_mark
    }

    /// The count of marks, i.e. the size of [0, max_mark].
    pub fn mark_count(&self) -> usize {
        self.max_mark as usize + 1
    }

    pub fn threshold_count(&self) -> usize {
        self.subjects * self.classes * self.mark_count()
    }

    pub fn coalition_count(&self) -> usize {
        self.coalitions.len()
    }

    pub fn variable_count(&self) -> usize {
        self.threshold_count() + self.coalition_count()
    }

    /// Every coalition, in power set order.
    pub fn coalitions(&self) -> &[Coalition] {
        &self.coalitions
    }

    /// The coalition of every subject.
    pub fn full_coalition(&self) -> Coalition {
        Coalition::full(self.subjects)
    }

    /// The atom of threshold `x(subject, boundary, mark)`.
    pub fn threshold(
        &self,
        subject: Subject,
        boundary: Boundary,
        mark: Mark,
    ) -> Result<Atom, EncodingError> {
        if subject >= self.subjects || boundary >= self.classes || mark > self.max_mark {
            return Err(EncodingError::UnmappedVariable(Variable::Threshold {
                subject,
                boundary,
                mark,
            }));
        }
        let index = (subject * self.classes + boundary) * self.mark_count() + mark as usize;
        Ok(index as Atom + 1)
    }

    /// The atom of coalition `y(coalition)`.
    pub fn coalition(&self, coalition: Coalition) -> Result<Atom, EncodingError> {
        match self.rank(coalition) {
            Some(rank) => Ok((self.threshold_count() + rank) as Atom + 1),
            None => Err(EncodingError::UnmappedVariable(Variable::Coalition(
                coalition,
            ))),
        }
    }

    /// The atom of a variable.
    pub fn atom(&self, variable: &Variable) -> Result<Atom, EncodingError> {
        match variable {
            Variable::Threshold {
                subject,
                boundary,
                mark,
            } => self.threshold(*subject, *boundary, *mark),
            Variable::Coalition(coalition) => self.coalition(*coalition),
        }
    }

    /// The variable of an atom, if the atom is part of the space.
    pub fn variable(&self, atom: Atom) -> Option<Variable> {
        let index = (atom as usize).checked_sub(1)?;
        match index.checked_sub(self.threshold_count()) {
            None => {
                let mark = (index % self.mark_count()) as Mark;
                let rest = index / self.mark_count();
                Some(Variable::Threshold {
                    subject: rest / self.classes,
                    boundary: rest % self.classes,
                    mark,
                })
            }
            Some(rank) => self.coalitions.get(rank).copied().map(Variable::Coalition),
        }
    }

    /// The coalition which is disjoint from the given coalition and which together with the given coalition covers every subject.
    pub fn complement(&self, coalition: Coalition) -> Result<Coalition, EncodingError> {
        let full = self.full_coalition();
        if !coalition.is_subset_of(&full) {
            return Err(EncodingError::UnmappedVariable(Variable::Coalition(
                coalition,
            )));
        }
        let complement = coalition.complement_within(&full);
        match self.rank(complement) {
            Some(_) => Ok(complement),
            None => Err(EncodingError::MissingComplement(coalition)),
        }
    }

    /// Every threshold variable, in order of atom.
    pub fn thresholds(&self) -> impl Iterator<Item = Variable> + '_ {
        (1..=self.threshold_count()).filter_map(|atom| self.variable(atom as Atom))
    }

    /// Every variable paired with its atom, in order of atom.
    pub fn variables(&self) -> impl Iterator<Item = (Atom, Variable)> + '_ {
        (1..=self.variable_count())
            .filter_map(|atom| self.variable(atom as Atom).map(|v| (atom as Atom, v)))
    }

    fn rank(&self, coalition: Coalition) -> Option<usize> {
        self.ranks.get(coalition.bits() as usize).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        for subjects in 1..=5 {
            for classes in 2..=4 {
                let space = VariableSpace::new(subjects, classes, 20).unwrap();
                assert_eq!(space.threshold_count(), subjects * classes * 21);
                assert_eq!(space.coalition_count(), 1 << subjects);
                assert_eq!(space.thresholds().count(), space.threshold_count());
            }
        }
    }

    #[test]
    fn round_trip() {
        let space = VariableSpace::new(3, 3, 20).unwrap();

        let mut seen = vec![false; space.variable_count() + 1];
        for (atom, variable) in space.variables() {
            assert_eq!(space.atom(&variable), Ok(atom));
            assert!(!seen[atom as usize]);
            seen[atom as usize] = true;
        }
        assert!(seen.iter().skip(1).all(|s| *s));

        assert_eq!(space.variable(0), None);
        assert_eq!(space.variable(space.variable_count() as Atom + 1), None);
    }

    #[test]
    fn coalitions_follow_thresholds() {
        let space = VariableSpace::new(2, 3, 20).unwrap();
        let last_threshold = space.threshold(1, 2, 20).unwrap();
        assert_eq!(last_threshold as usize, space.threshold_count());
        assert_eq!(space.coalition(Coalition::EMPTY), Ok(last_threshold + 1));
        assert_eq!(
            space.coalition(space.full_coalition()),
            Ok(space.variable_count() as Atom)
        );
    }

    #[test]
    fn unique_complements() {
        let space = VariableSpace::new(4, 2, 20).unwrap();
        let full = space.full_coalition();
        for coalition in space.coalitions() {
            let complement = space.complement(*coalition).unwrap();
            let matches = space
                .coalitions()
                .iter()
                .filter(|c| c.is_disjoint(coalition) && c.union(coalition) == full)
                .collect::<Vec<_>>();
            assert_eq!(matches, vec![&complement]);
        }
    }

    #[test]
    fn unmapped() {
        let space = VariableSpace::new(2, 2, 20).unwrap();
        assert!(matches!(
            space.threshold(2, 0, 0),
            Err(EncodingError::UnmappedVariable(_))
        ));
        assert!(matches!(
            space.threshold(0, 0, 21),
            Err(EncodingError::UnmappedVariable(_))
        ));
        let outside = Coalition::EMPTY.with(3);
        assert!(space.coalition(outside).is_err());
        assert!(space.complement(outside).is_err());
    }

    #[test]
    fn invalid_counts() {
        assert_eq!(
            VariableSpace::new(0, 2, 20).unwrap_err(),
            ConfigError::NoSubjects
        );
        assert_eq!(
            VariableSpace::new(2, 1, 20).unwrap_err(),
            ConfigError::TooFewClasses { classes: 1 }
        );
        assert!(matches!(
            VariableSpace::new(COALITION_WIDTH + 1, 2, 20),
            Err(ConfigError::TooManySubjects { .. })
        ));
    }
}
