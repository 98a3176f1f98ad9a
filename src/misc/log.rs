/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, mostly to note the size of what was built and what the solver said.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [variable space](crate::encoding::variables)
    pub const VARIABLES: &str = "variables";

    /// Logs related to [clause generation](crate::encoding::clauses)
    pub const CLAUSES: &str = "clauses";

    /// Logs related to [writing instances](crate::encoding::wcnf)
    pub const WCNF: &str = "wcnf";

    /// Logs related to [solver processes](crate::solver)
    pub const SOLVER: &str = "solver";

    /// Logs related to reading a model back from a solver
    pub const DECODING: &str = "decoding";

    /// Logs related to [dataset generation](crate::generator)
    pub const GENERATOR: &str = "generator";
}
