/*!
Synthetic datasets, labeled by a random MR-Sort model.

A model is drawn as:
- Integer weights in [0, 30) for each subject, normalised to sum to one (and redrawn if every weight is zero).
- For each subject, a sorted sample of *C - 1* distinct frontier marks from [1, *M*].
- A majority threshold in [0.5, 1).

Students are then given uniform marks in [0, *M*] and labeled by the model.
As a dataset must contain every class, marks are redrawn until each class occurs, up to a bounded number of attempts.

```rust
# use rand::{rngs::StdRng, SeedableRng};
# use mrsort_sat::generator::generate;
let mut rng = StdRng::seed_from_u64(7);
let generated = generate(&mut rng, 20, 3, 2, 20).unwrap();

assert_eq!(generated.dataset.student_count(), 20);
for (marks, label) in generated.dataset.students() {
    assert_eq!(generated.model.classify(marks), label);
}
```
*/

use rand::{seq::index::sample, Rng};
use serde::{Deserialize, Serialize};

use crate::{
    misc::log::targets::{self},
    model::MrSortModel,
    structures::dataset::{Dataset, Mark},
    types::err::ConfigError,
};

/// The most draws of marks before giving up on a dataset with every class.
pub const MAX_ATTEMPTS: usize = 10_000;

/// The (exclusive) upper bound on an unnormalised weight.
const WEIGHT_BOUND: u32 = 30;

/// A dataset together with the model which labeled it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Generated {
    pub model: MrSortModel,
    pub dataset: Dataset,
}

/// Draws a model and a dataset labeled by the model.
pub fn generate(
    rng: &mut impl Rng,
    students: usize,
    subjects: usize,
    classes: usize,
    max_mark: Mark,
) -> Result<Generated, ConfigError> {
    if students <= classes {
        return Err(ConfigError::TooFewStudents { students, classes });
    }
    let model = generate_model(rng, subjects, classes, max_mark)?;
    let dataset = generate_dataset(rng, &model, students, max_mark)?;
    Ok(Generated { model, dataset })
}

/// Draws a model over the given counts of subjects and classes.
pub fn generate_model(
    rng: &mut impl Rng,
    subjects: usize,
    classes: usize,
    max_mark: Mark,
) -> Result<MrSortModel, ConfigError> {
    if subjects == 0 {
        return Err(ConfigError::NoSubjects);
    }
    if classes < 2 {
        return Err(ConfigError::TooFewClasses { classes });
    }
    if classes - 1 > max_mark as usize {
        return Err(ConfigError::TooManyClasses {
            classes,
            max: max_mark,
        });
    }

    let raw = loop {
        let raw = (0..subjects)
            .map(|_| rng.gen_range(0..WEIGHT_BOUND))
            .collect::<Vec<_>>();
        if raw.iter().any(|weight| *weight > 0) {
            break raw;
        }
    };
    let total: u32 = raw.iter().sum();
    let weights = raw
        .iter()
        .map(|weight| *weight as f64 / total as f64)
        .collect::<Vec<_>>();

    let frontiers = (0..subjects)
        .map(|_| {
            let mut marks = sample(rng, max_mark as usize, classes - 1)
                .into_iter()
                .map(|index| index as Mark + 1)
                .collect::<Vec<_>>();
            marks.sort_unstable();
            marks
        })
        .collect::<Vec<_>>();

    let lambda = rng.gen_range(0.5..1.0);

    log::debug!(target: targets::GENERATOR, "Weights {weights:?}, lambda {lambda}");
    log::debug!(target: targets::GENERATOR, "Frontiers {frontiers:?}");

    Ok(MrSortModel::new(weights, frontiers, lambda))
}

/// Draws marks for the given count of students until every class of the model occurs.
pub fn generate_dataset(
    rng: &mut impl Rng,
    model: &MrSortModel,
    students: usize,
    max_mark: Mark,
) -> Result<Dataset, ConfigError> {
    let classes = model.class_count();
    if students <= classes {
        return Err(ConfigError::TooFewStudents { students, classes });
    }

    for attempt in 1..=MAX_ATTEMPTS {
        let marks = (0..students)
            .map(|_| {
                (0..model.subject_count())
                    .map(|_| rng.gen_range(0..=max_mark))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let labels = marks
            .iter()
            .map(|row| model.classify(row))
            .collect::<Vec<_>>();

        let mut present = vec![false; classes];
        for label in &labels {
            present[*label] = true;
        }
        if present.iter().all(|p| *p) {
            log::info!(target: targets::GENERATOR, "Dataset of {students} students after {attempt} attempts");
            return Ok(Dataset::new(marks, labels));
        }
    }

    Err(ConfigError::UnpopulatedClasses {
        attempts: MAX_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn model_shape() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            let model = generate_model(&mut rng, 4, 4, 20).unwrap();
            assert_eq!(model.subject_count(), 4);
            assert_eq!(model.class_count(), 4);

            let total: f64 = model.weights.iter().sum();
            assert!((total - 1.0).abs() < 1e-9);
            assert!((0.5..1.0).contains(&model.lambda));

            for frontiers in &model.frontiers {
                assert!(frontiers.windows(2).all(|pair| pair[0] < pair[1]));
                assert!(frontiers.iter().all(|mark| (1..=20).contains(mark)));
            }
        }
    }

    #[test]
    fn every_class_present() {
        let mut rng = StdRng::seed_from_u64(11);
        let generated = generate(&mut rng, 30, 3, 2, 20).unwrap();

        let mut labels = generated.dataset.labels.clone();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels, vec![0, 1]);
    }

    #[test]
    fn seeded_draws_repeat() {
        let first = generate(&mut StdRng::seed_from_u64(3), 12, 2, 2, 20).unwrap();
        let second = generate(&mut StdRng::seed_from_u64(3), 12, 2, 2, 20).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_requests() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate(&mut rng, 2, 2, 2, 20).unwrap_err(),
            ConfigError::TooFewStudents {
                students: 2,
                classes: 2
            }
        );
        assert_eq!(
            generate_model(&mut rng, 2, 5, 3).unwrap_err(),
            ConfigError::TooManyClasses { classes: 5, max: 3 }
        );
    }
}
