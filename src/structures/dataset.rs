/*!
Labeled datasets of marks, and their partition by class.

A dataset is a matrix of marks (a row for each student, a column for each subject) with a parallel vector of class labels.
Classes are ordered, with a higher index for a better category, and the labels must be dense: if *C* distinct labels are observed, these are exactly [0, *C*).

Validation of a dataset returns its [Shape], from which the rest of the library takes counts of subjects and classes.

```rust
# use mrsort_sat::config::Config;
# use mrsort_sat::structures::dataset::Dataset;
let dataset = Dataset::new(vec![vec![10, 15], vec![18, 19]], vec![0, 1]);

let shape = dataset.validate(&Config::default()).unwrap();
assert_eq!((shape.subjects(), shape.classes()), (2, 2));

let partition = dataset.partition(&shape).unwrap();
assert_eq!(partition.class(1).len(), 1);
assert_eq!(partition.class(1)[0], [18, 19]);
```
*/

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{config::Config, types::err::ConfigError};

/// A mark, in [0, max_mark].
pub type Mark = u32;

/// The index of a class, in [0, classes).
pub type Class = usize;

/// The index of a subject, in [0, subjects).
pub type Subject = usize;

/// The index of a boundary between classes.
/// Boundary *h*, for *h* > 0, separates class *h - 1* from class *h*.
pub type Boundary = usize;

/// A matrix of marks and a parallel vector of labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub marks: Vec<Vec<Mark>>,
    pub labels: Vec<Class>,
}

/// The counts of subjects and classes of a validated dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    subjects: usize,
    classes: usize,
}

impl Shape {
    pub fn subjects(&self) -> usize {
        self.subjects
    }

    pub fn classes(&self) -> usize {
        self.classes
    }
}

impl Dataset {
    pub fn new(marks: Vec<Vec<Mark>>, labels: Vec<Class>) -> Self {
        Dataset { marks, labels }
    }

    pub fn student_count(&self) -> usize {
        self.marks.len()
    }

    /// Each student, as marks paired with a label.
    pub fn students(&self) -> impl Iterator<Item = (&[Mark], Class)> {
        self.marks
            .iter()
            .map(|row| row.as_slice())
            .zip(self.labels.iter().copied())
    }

    /// Checks the dataset is rectangular, within the bounds of the config, and densely labelled.
    pub fn validate(&self, config: &Config) -> Result<Shape, ConfigError> {
        let Some(first) = self.marks.first() else {
            return Err(ConfigError::EmptyDataset);
        };

        if self.marks.len() != self.labels.len() {
            return Err(ConfigError::LabelCountMismatch {
                students: self.marks.len(),
                labels: self.labels.len(),
            });
        }

        let subjects = first.len();
        if subjects == 0 {
            return Err(ConfigError::NoSubjects);
        }
        if subjects > config.max_subjects.value {
            return Err(ConfigError::TooManySubjects {
                subjects,
                max: config.max_subjects.value,
            });
        }

        let max = config.max_mark.value;
        for (student, row) in self.marks.iter().enumerate() {
            if row.len() != subjects {
                return Err(ConfigError::RaggedRow {
                    student,
                    expected: subjects,
                    found: row.len(),
                });
            }
            if let Some((subject, mark)) = row.iter().enumerate().find(|(_, mark)| **mark > max) {
                return Err(ConfigError::MarkOutOfRange {
                    student,
                    subject,
                    mark: *mark,
                    max,
                });
            }
        }

        let observed = self.labels.iter().copied().collect::<BTreeSet<_>>();
        let classes = observed.len();
        if let Some(class) = (0..classes).find(|class| !observed.contains(class)) {
            return Err(ConfigError::MissingClass { class });
        }
        if classes < 2 {
            return Err(ConfigError::TooFewClasses { classes });
        }

        Ok(Shape { subjects, classes })
    }

    /// The students of the dataset grouped by class.
    pub fn partition(&self, shape: &Shape) -> Result<Partition<'_>, ConfigError> {
        Partition::new(&self.marks, &self.labels, shape.subjects, shape.classes)
    }
}

/// Students grouped by class, each student kept as a borrowed row of marks.
#[derive(Clone, Debug)]
pub struct Partition<'d> {
    classes: Vec<Vec<&'d [Mark]>>,
}

impl<'d> Partition<'d> {
    /// Groups the rows of `marks` by the parallel `labels`, keeping the order of rows within each group.
    ///
    /// Each row must have a mark for each of `subjects` subjects.
    pub fn new(
        marks: &'d [Vec<Mark>],
        labels: &[Class],
        subjects: usize,
        classes: usize,
    ) -> Result<Self, ConfigError> {
        if marks.len() != labels.len() {
            return Err(ConfigError::LabelCountMismatch {
                students: marks.len(),
                labels: labels.len(),
            });
        }

        let mut groups = vec![Vec::default(); classes];
        for (student, (row, label)) in marks.iter().zip(labels).enumerate() {
            if row.len() != subjects {
                return Err(ConfigError::RaggedRow {
                    student,
                    expected: subjects,
                    found: row.len(),
                });
            }
            match groups.get_mut(*label) {
                Some(group) => group.push(row.as_slice()),
                None => {
                    return Err(ConfigError::LabelOutOfRange {
                        student,
                        label: *label,
                        classes,
                    })
                }
            }
        }

        Ok(Partition { classes: groups })
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn student_count(&self) -> usize {
        self.classes.iter().map(|group| group.len()).sum()
    }

    /// The students of the given class, empty if there is no such class.
    pub fn class(&self, class: Class) -> &[&'d [Mark]] {
        self.classes
            .get(class)
            .map(|group| group.as_slice())
            .unwrap_or_default()
    }

    /// The students of the given class or any higher class.
    pub fn at_least(&self, class: Class) -> impl Iterator<Item = &'d [Mark]> + '_ {
        self.classes
            .iter()
            .skip(class)
            .flat_map(|group| group.iter().copied())
    }
}
