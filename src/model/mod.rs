/*!
MR-Sort models.

An MR-Sort model sorts students into ordered classes:
- Each subject has a weight, with weights summing to one.
- Each boundary *h* in [1, *C*) has, for each subject, a frontier mark.
  A student clears a subject at a boundary if their mark is at or above the frontier.
- A student clears a boundary if the summed weight of the subjects cleared at the boundary reaches the majority threshold `lambda`.

A student is sorted into the class of the last consecutive boundary cleared, from boundary 1, and into class 0 if boundary 1 is not cleared.

```rust
# use mrsort_sat::model::MrSortModel;
let model = MrSortModel::new(vec![0.5, 0.5], vec![vec![12], vec![14]], 0.75);

assert_eq!(model.classify(&[10, 15]), 0);
assert_eq!(model.classify(&[18, 19]), 1);
```

A [LearnedModel] is read back from an assignment, and replaces the weights and threshold with an explicit collection of sufficient coalitions.
*/

use serde::{Deserialize, Serialize};

use crate::{
    encoding::variables::VariableSpace,
    structures::{
        coalition::Coalition,
        dataset::{Boundary, Class, Mark, Subject},
        valuation::all_false,
    },
    types::err::EncodingError,
};

mod learned;
pub use learned::LearnedModel;

/// A weighted MR-Sort model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MrSortModel {
    /// The weight of each subject.
    pub weights: Vec<f64>,

    /// Frontier marks, indexed by subject and then by boundary, from boundary 1.
    pub frontiers: Vec<Vec<Mark>>,

    /// The majority threshold.
    pub lambda: f64,
}

impl MrSortModel {
    pub fn new(weights: Vec<f64>, frontiers: Vec<Vec<Mark>>, lambda: f64) -> Self {
        MrSortModel {
            weights,
            frontiers,
            lambda,
        }
    }

    pub fn subject_count(&self) -> usize {
        self.weights.len()
    }

    pub fn class_count(&self) -> usize {
        self.frontiers.first().map_or(1, |boundaries| boundaries.len() + 1)
    }

    /// The frontier of a subject at a boundary in [1, *C*).
    pub fn frontier(&self, subject: Subject, boundary: Boundary) -> Option<Mark> {
        let index = boundary.checked_sub(1)?;
        self.frontiers.get(subject)?.get(index).copied()
    }

    /// The summed weight of a coalition, added in order of subject.
    pub fn coalition_weight(&self, coalition: Coalition) -> f64 {
        coalition
            .subjects()
            .filter_map(|subject| self.weights.get(subject))
            .sum()
    }

    /// The subjects cleared by some marks at a boundary in [1, *C*).
    pub fn cleared(&self, marks: &[Mark], boundary: Boundary) -> Coalition {
        marks
            .iter()
            .enumerate()
            .filter(|(subject, mark)| {
                self.frontier(*subject, boundary)
                    .is_some_and(|frontier| **mark >= frontier)
            })
            .map(|(subject, _)| subject)
            .collect()
    }

    pub fn is_sufficient(&self, coalition: Coalition) -> bool {
        self.coalition_weight(coalition) >= self.lambda
    }

    /// The class of some marks.
    pub fn classify(&self, marks: &[Mark]) -> Class {
        let mut class = 0;
        for boundary in 1..self.class_count() {
            match self.is_sufficient(self.cleared(marks, boundary)) {
                true => class = boundary,
                false => break,
            }
        }
        class
    }

    /// The valuation the model induces on a variable space.
    ///
    /// - Every threshold at boundary 0 is true.
    /// - A threshold at boundary *h* > 0 is true exactly when the mark is at or above the frontier of *h*.
    /// - A coalition is true exactly when it is sufficient.
    ///
    /// On a dataset labeled by the model, with sorted frontiers, this valuation violates no clause.
    pub fn certificate(&self, space: &VariableSpace) -> Result<Vec<bool>, EncodingError> {
        let mut valuation = all_false(space.variable_count());

        for subject in 0..space.subject_count() {
            for boundary in 0..space.class_count() {
                for mark in 0..=space.max_mark() {
                    let value = match boundary {
                        0 => true,
                        _ => self
                            .frontier(subject, boundary)
                            .is_some_and(|frontier| mark >= frontier),
                    };
                    valuation[space.threshold(subject, boundary, mark)? as usize] = value;
                }
            }
        }

        for coalition in space.coalitions() {
            valuation[space.coalition(*coalition)? as usize] = self.is_sufficient(*coalition);
        }

        Ok(valuation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::valuation::Valuation;

    fn model() -> MrSortModel {
        MrSortModel::new(vec![0.2, 0.3, 0.5], vec![vec![8, 14], vec![10, 12], vec![5, 15]], 0.7)
    }

    #[test]
    fn classification() {
        let model = model();
        assert_eq!(model.class_count(), 3);

        assert_eq!(model.classify(&[0, 0, 0]), 0);
        // Subjects 1 and 2 clear boundary 1, for 0.8.
        assert_eq!(model.classify(&[0, 11, 6]), 1);
        // Every subject clears boundary 2.
        assert_eq!(model.classify(&[20, 20, 20]), 2);
        // Subjects 0 and 1 fall short of the threshold.
        assert_eq!(model.classify(&[14, 12, 4]), 0);
    }

    #[test]
    fn certificate_values() {
        let model = model();
        let space = VariableSpace::new(3, 3, 20).unwrap();
        let certificate = model.certificate(&space).unwrap();

        let value = |atom| certificate.value_of(atom);
        assert_eq!(value(space.threshold(0, 0, 0).unwrap()), Some(true));
        assert_eq!(value(space.threshold(0, 1, 7).unwrap()), Some(false));
        assert_eq!(value(space.threshold(0, 1, 8).unwrap()), Some(true));
        assert_eq!(value(space.threshold(2, 2, 15).unwrap()), Some(true));

        let strong: Coalition = [1, 2].into_iter().collect();
        let weak: Coalition = [0, 1].into_iter().collect();
        assert_eq!(value(space.coalition(strong).unwrap()), Some(true));
        assert_eq!(value(space.coalition(weak).unwrap()), Some(false));
        assert_eq!(value(space.coalition(Coalition::EMPTY).unwrap()), Some(false));
    }
}
