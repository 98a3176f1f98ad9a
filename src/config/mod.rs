/*!
Configuration of a learner.

All configuration is contained within [Config], and each configurable value is a [ConfigOption] which pairs the value with the bounds it must respect.

The defaults reproduce the reference setting: marks out of twenty, structural clauses weighted at one hundred and dataset clauses at one, and ten seconds for the solver.
*/

use std::time::Duration;

mod config_option;
pub use config_option::ConfigOption;

pub mod defaults;

use crate::{
    structures::{clause::Weight, coalition::COALITION_WIDTH, dataset::Mark},
    types::err::ConfigError,
};

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The highest mark a student may be given, the lowest is always zero.
    pub max_mark: ConfigOption<Mark>,

    /// The most subjects a dataset may have.
    /// The coalition space doubles with each subject, so this is kept small.
    pub max_subjects: ConfigOption<usize>,

    /// The weight given to each clause which axiomatises an MR-Sort model.
    pub structural_weight: ConfigOption<Weight>,

    /// The weight given to each clause which ties a model to the dataset.
    pub dataset_weight: ConfigOption<Weight>,

    /// The wall-clock bound on an external solver.
    pub time_limit: ConfigOption<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            max_mark: ConfigOption {
                name: "max_mark",
                min: 1,
                max: 1_000,
                value: MAX_MARK,
            },

            max_subjects: ConfigOption {
                name: "max_subjects",
                min: 1,
                max: COALITION_WIDTH,
                value: MAX_SUBJECTS,
            },

            structural_weight: ConfigOption {
                name: "structural_weight",
                min: 2,
                max: 1_000_000,
                value: STRUCTURAL_WEIGHT,
            },

            dataset_weight: ConfigOption {
                name: "dataset_weight",
                min: 1,
                max: 1_000_000,
                value: DATASET_WEIGHT,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_millis(1),
                max: Duration::from_secs(60 * 60 * 24),
                value: TIME_LIMIT,
            },
        }
    }
}

impl Config {
    /// Checks every option is within bounds, and that dataset clauses are cheaper to violate than structural clauses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.max_mark.check()?;
        self.max_subjects.check()?;
        self.structural_weight.check()?;
        self.dataset_weight.check()?;
        self.time_limit.check()?;

        if self.dataset_weight.value >= self.structural_weight.value {
            return Err(ConfigError::WeightTiers {
                structural: self.structural_weight.value,
                dataset: self.dataset_weight.value,
            });
        }
        Ok(())
    }
}
