//! Error types used in the library.
//!
//! - Configuration errors are raised before any clause is generated, and describe what was wrong with the request.
//! - Encoding errors indicate some internal invariant was broken while building an instance. \
//!   These are defects, and are surfaced rather than defaulted.
//! - Solver errors concern the external process. \
//!   Note, a solver which runs correctly but fails to find an optimum is *not* an error, see [SolverOutcome](crate::solver::SolverOutcome).
//!
//! Names of the error enums --- for the most part --- overlap with the module they concern.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use std::{path::PathBuf, time::Duration};

use thiserror::Error;

use crate::structures::{
    atom::Atom,
    coalition::Coalition,
    dataset::{Class, Mark, Subject},
    variable::Variable,
};

/// The general error returned from a call to learn a model.
#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("encoding: {0}")]
    Encoding(#[from] EncodingError),

    #[error("solver: {0}")]
    Solver(#[from] SolverError),
}

impl From<ProtocolError> for ErrorKind {
    fn from(e: ProtocolError) -> Self {
        ErrorKind::Solver(SolverError::Protocol(e))
    }
}

/// Noted errors in a configuration or in the shape of a dataset.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// A dataset without any students.
    #[error("the dataset has no students")]
    EmptyDataset,

    /// Students without any marks.
    #[error("students must be marked on at least one subject")]
    NoSubjects,

    /// More subjects than the coalition space permits.
    #[error("{subjects} subjects exceeds the permitted maximum of {max}")]
    TooManySubjects { subjects: usize, max: usize },

    /// Fewer than two classes, so there is no boundary to learn.
    #[error("at least two classes are required, found {classes}")]
    TooFewClasses { classes: usize },

    /// The marks matrix and the label vector are not parallel.
    #[error("{students} rows of marks but {labels} labels")]
    LabelCountMismatch { students: usize, labels: usize },

    /// A row of marks with a different length to the first row.
    #[error("student {student} has {found} marks, expected {expected}")]
    RaggedRow {
        student: usize,
        expected: usize,
        found: usize,
    },

    /// A mark outside of [0, max].
    #[error("student {student} has mark {mark} on subject {subject}, above the maximum of {max}")]
    MarkOutOfRange {
        student: usize,
        subject: usize,
        mark: Mark,
        max: Mark,
    },

    /// A label outside of [0, classes).
    #[error("student {student} is labelled {label}, but only {classes} classes were observed")]
    LabelOutOfRange {
        student: usize,
        label: Class,
        classes: usize,
    },

    /// A class index with no student, so the labels are not dense.
    #[error("no student is labelled with class {class}")]
    MissingClass { class: Class },

    /// The variables required do not fit the integer representation of a literal.
    #[error("the instance would require more than {max} variables")]
    VariableOverflow { max: usize },

    /// Some configuration option was given a value outside of its bounds.
    #[error("{name} must be between {min} and {max}, found {value}")]
    OptionOutOfRange {
        name: &'static str,
        value: String,
        min: String,
        max: String,
    },

    /// The weight of a dataset clause must be strictly less than that of a structural clause.
    #[error("dataset weight {dataset} must be less than structural weight {structural}")]
    WeightTiers { structural: u64, dataset: u64 },

    /// A generated dataset must have more students than classes.
    #[error("{students} students is too few to populate {classes} classes")]
    TooFewStudents { students: usize, classes: usize },

    /// Each class needs a distinct frontier mark in [1, max].
    #[error("{classes} classes need more distinct frontier marks than a maximum mark of {max} allows")]
    TooManyClasses { classes: usize, max: Mark },

    /// The generator failed to sample a dataset in which every class occurs.
    #[error("no dataset with every class present was found after {attempts} attempts")]
    UnpopulatedClasses { attempts: usize },
}

/// Noted errors while building variables or clauses.
///
/// Each of these indicates a broken invariant, rather than an issue with the input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum EncodingError {
    /// The complement of a coalition is not part of the enumerated power set.
    #[error("no complement of coalition {0} in the variable space")]
    MissingComplement(Coalition),

    /// A variable with no index in the variable space.
    #[error("variable {0} is not mapped to an index")]
    UnmappedVariable(Variable),

    /// A student without a mark on some subject of the variable space.
    #[error("a student has no mark on subject {subject}")]
    MissingMark { subject: Subject },
}

/// Errors from an external solver.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The solver process could not be started.
    #[error("failed to launch {program:?}: {source}")]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    /// Some I/O around the solver went wrong, e.g. writing the clause file.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),

    /// The solver exited unsuccessfully, or was killed by a signal (in which case there is no code).
    #[error("process failed with exit code {code:?}: {stderr}")]
    ProcessFailure { code: Option<i32>, stderr: String },

    /// The solver ran past the time limit and was killed.
    #[error("no response within {0:?}")]
    Timeout(Duration),

    /// The output of the solver did not follow the expected layout.
    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Deviations from the expected layout of solver output.
///
/// The layout is fixed by line:
/// 0. A comment.
/// 1. `o <objective>`
/// 2. `s <status>`
/// 3. `v <literal> … [0]`
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ProtocolError {
    /// Output ended before the status line.
    #[error("expected at least three lines of output, found {lines}")]
    Truncated { lines: usize },

    /// The status line was not of the form `s <status>`.
    #[error("malformed status line {0:?}")]
    StatusLine(String),

    /// The objective line was not of the form `o <integer>`.
    #[error("malformed objective line {0:?}")]
    ObjectiveLine(String),

    /// An optimum was reported without a model line.
    #[error("an optimum was reported without a model")]
    MissingModel,

    /// The model line was not of the form `v <literals>`.
    #[error("malformed model line {0:?}")]
    ModelLine(String),

    /// Some token of the model line is not a literal.
    #[error("malformed literal {0:?}")]
    Literal(String),

    /// A literal over a variable outside of the instance.
    #[error("variable {0} is not part of the instance")]
    UnknownVariable(u64),

    /// A variable given a value twice.
    #[error("variable {0} is valued more than once")]
    RepeatedVariable(Atom),

    /// Some variable of the instance was not given a value.
    #[error("the model values {found} of {expected} variables")]
    IncompleteModel { expected: usize, found: usize },
}
