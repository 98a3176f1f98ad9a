use std::time::Duration;

use crate::structures::{clause::Weight, dataset::Mark};

pub const MAX_MARK: Mark = 20;
pub const MAX_SUBJECTS: usize = 10;

pub const STRUCTURAL_WEIGHT: Weight = 100;
pub const DATASET_WEIGHT: Weight = 1;

pub const TIME_LIMIT: Duration = Duration::from_secs(10);
