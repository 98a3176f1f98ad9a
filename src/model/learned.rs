use serde::Serialize;

use crate::{
    encoding::variables::VariableSpace,
    structures::{
        coalition::Coalition,
        dataset::{Boundary, Class, Dataset, Mark, Subject},
        valuation::Valuation,
    },
    types::err::EncodingError,
};

/// A model read back from an assignment to the variables of an instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LearnedModel {
    /// Frontier marks, indexed by subject and then by boundary, from boundary 1.
    /// A frontier is `None` if no mark clears the boundary.
    pub frontiers: Vec<Vec<Option<Mark>>>,

    /// The sufficient coalitions, in power set order.
    pub sufficient: Vec<Coalition>,
}

impl LearnedModel {
    /// Reads a model from an assignment.
    ///
    /// The frontier of a subject at a boundary is the least mark whose threshold is true.
    pub fn from_assignment(
        space: &VariableSpace,
        assignment: &impl Valuation,
    ) -> Result<Self, EncodingError> {
        let mut frontiers = Vec::with_capacity(space.subject_count());
        for subject in 0..space.subject_count() {
            let mut boundaries = Vec::with_capacity(space.class_count() - 1);
            for boundary in 1..space.class_count() {
                let mut frontier = None;
                for mark in 0..=space.max_mark() {
                    let atom = space.threshold(subject, boundary, mark)?;
                    if assignment.value_of(atom) == Some(true) {
                        frontier = Some(mark);
                        break;
                    }
                }
                boundaries.push(frontier);
            }
            frontiers.push(boundaries);
        }

        let mut sufficient = Vec::default();
        for coalition in space.coalitions() {
            if assignment.value_of(space.coalition(*coalition)?) == Some(true) {
                sufficient.push(*coalition);
            }
        }

        Ok(LearnedModel {
            frontiers,
            sufficient,
        })
    }

    pub fn subject_count(&self) -> usize {
        self.frontiers.len()
    }

    pub fn class_count(&self) -> usize {
        self.frontiers.first().map_or(1, |boundaries| boundaries.len() + 1)
    }

    /// The frontier of a subject at a boundary in [1, *C*), if some mark clears the boundary.
    pub fn frontier(&self, subject: Subject, boundary: Boundary) -> Option<Mark> {
        let index = boundary.checked_sub(1)?;
        self.frontiers.get(subject)?.get(index).copied().flatten()
    }

    pub fn is_sufficient(&self, coalition: Coalition) -> bool {
        self.sufficient.contains(&coalition)
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

    /// The class of some marks, i.e. the count of consecutive boundaries cleared through a sufficient coalition.
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

    /// The share of students of a dataset the model sorts into their labeled class.
    pub fn accuracy(&self, dataset: &Dataset) -> f64 {
        match dataset.student_count() {
            0 => 0.0,
            count => {
                let correct = dataset
                    .students()
                    .filter(|(marks, label)| self.classify(marks) == *label)
                    .count();
                correct as f64 / count as f64
            }
        }
    }
}
