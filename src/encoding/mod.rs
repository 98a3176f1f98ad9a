/*!
Encoding the learning problem as a weighted instance.

An encoding proceeds in three steps:
- A [VariableSpace](variables::VariableSpace) is built from the counts of subjects and classes and the highest mark.
- The [clauses](clauses) of the five families are generated over the variable space and a [Partition](crate::structures::dataset::Partition) of the dataset.
- The clauses are paired with weights as a [WcnfInstance](wcnf::WcnfInstance), which may be written for a solver.

For the most part, the [Learner](crate::learner::Learner) takes care of these steps.
*/

pub mod clauses;
pub mod variables;
pub mod wcnf;
