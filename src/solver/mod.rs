/*!
Solving a weighted instance.

Solving is delegated to a [MaxSatBackend], and the only backend provided is an [ExternalSolver] which runs a solver binary as a child process.
Other backends, e.g. a stub returning a known model, may be used in place of a solver.

A backend which runs to completion returns a [SolverOutcome]:
- [Optimum](SolverOutcome::Optimum), with the objective and a literal for each variable of the instance.
- [NoOptimum](SolverOutcome::NoOptimum), with the status reported.

Failing to find an optimum is an outcome, and only a failure to run the solver or to read what was said is an [error](crate::types::err::SolverError).
*/

use std::time::Duration;

use crate::{
    encoding::wcnf::WcnfInstance,
    structures::{clause::Weight, literal::IntLiteral},
    types::err::SolverError,
};

pub mod external;
pub use external::ExternalSolver;

pub mod output;

/// The status reported alongside an optimal assignment.
pub const OPTIMUM_FOUND: &str = "OPTIMUM FOUND";

/// What a solver which ran to completion reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolverOutcome {
    /// An optimal assignment, with the summed weight of clauses it violates.
    Optimum {
        objective: Weight,
        literals: Vec<IntLiteral>,
    },

    /// Any status other than an optimum, e.g. `UNSATISFIABLE` or `UNKNOWN`.
    NoOptimum { status: String },
}

/// Something which solves a weighted instance within a time limit.
pub trait MaxSatBackend {
    fn solve(
        &self,
        instance: &WcnfInstance,
        time_limit: Duration,
    ) -> Result<SolverOutcome, SolverError>;
}
