use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use mrsort_sat::{
    config::defaults,
    structures::{clause::Weight, dataset::Mark},
};

/// Learns MR-Sort models from labeled marks through weighted MaxSAT
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a dataset labeled by a random MR-Sort model
    Generate {
        /// The count of students
        #[arg(long, default_value_t = 20)]
        students: usize,

        /// The count of subjects
        #[arg(long, default_value_t = 5)]
        subjects: usize,

        /// The count of classes
        #[arg(long, default_value_t = 3)]
        classes: usize,

        /// Seed for the random draws, drawn from entropy if absent
        #[arg(long)]
        seed: Option<u64>,

        /// The highest mark
        #[arg(long, default_value_t = defaults::MAX_MARK)]
        max_mark: Mark,

        /// Where to write the dataset, stdout if absent
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the weighted instance of a dataset
    Encode {
        /// The dataset, as JSON
        #[arg(short, long)]
        dataset: PathBuf,

        /// Where to write the instance, stdout if absent
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Learn a model of a dataset with an external solver
    Learn {
        /// The dataset, as JSON
        #[arg(short, long)]
        dataset: PathBuf,

        /// The MaxSAT solver binary
        #[arg(short, long)]
        solver: PathBuf,

        /// An argument passed to the solver ahead of the instance, may be repeated
        #[arg(long = "solver-arg", allow_hyphen_values = true)]
        solver_args: Vec<String>,

        /// Seconds to wait for the solver
        #[arg(short, long, default_value_t = defaults::TIME_LIMIT.as_secs_f64())]
        timeout: f64,

        /// Print the solution as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        #[command(flatten)]
        model: ModelArgs,
    },
}

/// Options which shape the instance
#[derive(Args, Debug)]
pub struct ModelArgs {
    /// The highest mark
    #[arg(long, default_value_t = defaults::MAX_MARK)]
    pub max_mark: Mark,

    /// The most subjects permitted
    #[arg(long, default_value_t = defaults::MAX_SUBJECTS)]
    pub max_subjects: usize,

    /// The weight of each structural clause
    #[arg(long, default_value_t = defaults::STRUCTURAL_WEIGHT)]
    pub structural_weight: Weight,

    /// The weight of each dataset clause
    #[arg(long, default_value_t = defaults::DATASET_WEIGHT)]
    pub dataset_weight: Weight,
}
