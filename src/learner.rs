/*!
Learning a model from a dataset, in a single call.

A call to [solve](Learner::solve):
1. Validates the dataset against the config, and partitions the students by class.
2. Builds the variable space and generates each family of clauses.
3. Hands the weighted instance to a backend.
4. Reads the assignment returned back into named variables and a [LearnedModel].

Any issue with the config or the dataset is returned before the backend is called.

```rust
# use std::time::Duration;
# use mrsort_sat::{config::Config, learner::Learner, structures::dataset::Dataset};
# use mrsort_sat::encoding::wcnf::WcnfInstance;
# use mrsort_sat::solver::{MaxSatBackend, SolverOutcome};
# use mrsort_sat::types::err::SolverError;
struct Unsure;

impl MaxSatBackend for Unsure {
    fn solve(&self, _: &WcnfInstance, _: Duration) -> Result<SolverOutcome, SolverError> {
        Ok(SolverOutcome::NoOptimum { status: "UNKNOWN".to_string() })
    }
}

let learner = Learner::from_config(Config::default()).unwrap();
let dataset = Dataset::new(vec![vec![10, 15], vec![18, 19]], vec![0, 1]);

let solution = learner.solve(&dataset, &Unsure).unwrap();
assert!(!solution.optimal);
assert!(solution.model.is_none());
```
*/

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::{
    config::Config,
    encoding::{clauses, variables::VariableSpace, wcnf::WcnfInstance},
    misc::log::targets::{self},
    model::LearnedModel,
    solver::{MaxSatBackend, SolverOutcome, OPTIMUM_FOUND},
    structures::{
        clause::Weight,
        dataset::Dataset,
        literal::{IntLiteral, Literal},
        valuation::from_literals,
        variable::Variable,
    },
    types::err::{ConfigError, ErrorKind, ProtocolError},
};

/// Learns models under a fixed config.
#[derive(Clone, Debug)]
pub struct Learner {
    config: Config,
}

/// The variable space and weighted instance of a dataset.
#[derive(Clone, Debug)]
pub struct Encoded {
    pub space: VariableSpace,
    pub instance: WcnfInstance,
}

/// The result of a solve.
#[derive(Clone, Debug, Serialize)]
pub struct Solution {
    /// Whether the backend reported an optimum.
    pub optimal: bool,

    /// The status reported by the backend.
    pub status: String,

    /// The summed weight of violated clauses, on an optimum.
    pub objective: Option<Weight>,

    /// A literal for each variable, on an optimum.
    pub literals: Vec<IntLiteral>,

    /// The value of each named variable, on an optimum.
    ///
    /// Serialized as `[name, value]` pairs, in order of variable.
    #[serde(serialize_with = "named_values")]
    pub assignment: HashMap<Variable, bool>,

    /// The model read from the assignment, on an optimum.
    pub model: Option<LearnedModel>,
}

impl Solution {
    fn without_optimum(status: String) -> Self {
        Solution {
            optimal: false,
            status,
            objective: None,
            literals: Vec::default(),
            assignment: HashMap::default(),
            model: None,
        }
    }
}

fn named_values<S: Serializer>(
    assignment: &HashMap<Variable, bool>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut pairs = assignment
        .iter()
        .map(|(variable, value)| (*variable, *value))
        .collect::<Vec<_>>();
    pairs.sort_unstable();
    serializer.collect_seq(
        pairs
            .into_iter()
            .map(|(variable, value)| (variable.to_string(), value)),
    )
}

impl Learner {
    /// A learner with the given config, if the config is valid.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Learner { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the variable space and weighted instance of a dataset.
    pub fn prepare(&self, dataset: &Dataset) -> Result<Encoded, ErrorKind> {
        let shape = dataset.validate(&self.config)?;
        let partition = dataset.partition(&shape)?;
        let space = VariableSpace::for_shape(&shape, self.config.max_mark.value)?;

        let clauses = clauses::generate(&space, &partition)?;
        let instance = WcnfInstance::new(
            space.variable_count(),
            clauses,
            self.config.structural_weight.value,
            self.config.dataset_weight.value,
        );

        Ok(Encoded { space, instance })
    }

    /// Learns a model of a dataset with the given backend.
    pub fn solve(
        &self,
        dataset: &Dataset,
        backend: &impl MaxSatBackend,
    ) -> Result<Solution, ErrorKind> {
        let encoded = self.prepare(dataset)?;
        self.solve_encoded(&encoded, backend)
    }

    /// Solves a prepared instance with the given backend.
    pub fn solve_encoded(
        &self,
        encoded: &Encoded,
        backend: &impl MaxSatBackend,
    ) -> Result<Solution, ErrorKind> {
        let Encoded { space, instance } = encoded;

        let (objective, literals) = match backend.solve(instance, self.config.time_limit.value)? {
            SolverOutcome::NoOptimum { status } => return Ok(Solution::without_optimum(status)),
            SolverOutcome::Optimum {
                objective,
                literals,
            } => (objective, literals),
        };

        let valuation = from_literals(space.variable_count(), literals.iter().copied());
        let violated = instance.violated_weight(&valuation);
        if violated != objective {
            log::warn!(target: targets::DECODING,
                "Reported objective {objective} differs from the violated weight {violated}");
        }

        let mut assignment = HashMap::with_capacity(literals.len());
        for literal in &literals {
            let Some(variable) = space.variable(literal.atom()) else {
                return Err(ProtocolError::UnknownVariable(literal.atom() as u64).into());
            };
            if assignment.insert(variable, literal.polarity()).is_some() {
                return Err(ProtocolError::RepeatedVariable(literal.atom()).into());
            }
        }
        if assignment.len() != space.variable_count() {
            return Err(ProtocolError::IncompleteModel {
                expected: space.variable_count(),
                found: assignment.len(),
            }
            .into());
        }

        let model = LearnedModel::from_assignment(space, &valuation)?;

        Ok(Solution {
            optimal: true,
            status: OPTIMUM_FOUND.to_string(),
            objective: Some(objective),
            literals,
            assignment,
            model: Some(model),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config() {
        let mut config = Config::default();
        config.dataset_weight.value = 500;
        assert!(matches!(
            Learner::from_config(config),
            Err(ConfigError::WeightTiers { .. })
        ));
    }

    #[test]
    fn assignment_in_json() {
        let mut solution = Solution::without_optimum(OPTIMUM_FOUND.to_string());
        let both = [0, 1].into_iter().collect();
        solution.assignment.insert(Variable::Coalition(both), true);
        solution.assignment.insert(
            Variable::Threshold {
                subject: 1,
                boundary: 1,
                mark: 7,
            },
            false,
        );

        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(
            json["assignment"],
            serde_json::json!([["x(1, 1, 7)", false], ["y{0, 1}", true]])
        );
    }

    #[test]
    fn prepared_counts() {
        let learner = Learner::from_config(Config::default()).unwrap();
        let dataset = Dataset::new(vec![vec![10, 15], vec![18, 19]], vec![0, 1]);
        let Encoded { space, instance } = learner.prepare(&dataset).unwrap();

        assert_eq!(space.variable_count(), 2 * 2 * 21 + 4);
        assert_eq!(instance.variable_count(), space.variable_count());

        // Four coalitions against a single student for each of the dataset families.
        assert_eq!(instance.clauses().dataset.len(), 8);
    }
}
