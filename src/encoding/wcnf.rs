/*!
Weighted instances, and their text form.

An instance is written as:

```text
c <comment>
p wcnf <variables> <clauses>
<weight> <literal> … 0
```

Structural clauses are written first, each with the structural weight, followed by the dataset clauses, each with the dataset weight.

```rust
# use mrsort_sat::encoding::{clauses::ClauseSet, wcnf::WcnfInstance};
let clauses = ClauseSet {
    structural: vec![vec![2, -1]],
    dataset: vec![vec![-2]],
};
let instance = WcnfInstance::new(2, clauses, 100, 1);

let text = instance.as_wcnf();
let mut lines = text.lines().skip(1);
assert_eq!(lines.next(), Some("p wcnf 2 2"));
assert_eq!(lines.next(), Some("100 2 -1 0"));
assert_eq!(lines.next(), Some("1 -2 0"));
```
*/

use std::io::Write;

use crate::{
    encoding::clauses::ClauseSet,
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause, Weight},
        valuation::Valuation,
    },
};

/// A weighted instance, ready to be written.
#[derive(Clone, Debug)]
pub struct WcnfInstance {
    variable_count: usize,
    clauses: ClauseSet,
    structural_weight: Weight,
    dataset_weight: Weight,
}

impl WcnfInstance {
    pub fn new(
        variable_count: usize,
        clauses: ClauseSet,
        structural_weight: Weight,
        dataset_weight: Weight,
    ) -> Self {
        WcnfInstance {
            variable_count,
            clauses,
            structural_weight,
            dataset_weight,
        }
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.clause_count()
    }

    pub fn clauses(&self) -> &ClauseSet {
        &self.clauses
    }

    pub fn structural_weight(&self) -> Weight {
        self.structural_weight
    }

    pub fn dataset_weight(&self) -> Weight {
        self.dataset_weight
    }

    /// Each clause paired with its weight, in the order written.
    pub fn weighted_clauses(&self) -> impl Iterator<Item = (Weight, &CClause)> {
        let (structural_weight, dataset_weight) = (self.structural_weight, self.dataset_weight);
        let structural = self
            .clauses
            .structural
            .iter()
            .map(move |clause| (structural_weight, clause));
        let dataset = self
            .clauses
            .dataset
            .iter()
            .map(move |clause| (dataset_weight, clause));
        structural.chain(dataset)
    }

    /// The summed weight of clauses which are not satisfied on the valuation.
    pub fn violated_weight(&self, valuation: &impl Valuation) -> Weight {
        self.weighted_clauses()
            .filter(|(_, clause)| !clause.satisfied_on(valuation))
            .map(|(weight, _)| weight)
            .sum()
    }

    /// Writes the instance to the given sink.
    pub fn write(&self, sink: &mut impl Write) -> std::io::Result<()> {
        for line in self.lines() {
            writeln!(sink, "{line}")?;
        }
        sink.flush()?;

        log::info!(target: targets::WCNF,
            "Wrote {} variables and {} clauses",
            self.variable_count,
            self.clause_count());
        Ok(())
    }

    /// The instance as a string, with each line terminated by a newline.
    pub fn as_wcnf(&self) -> String {
        let mut the_string = String::default();
        for line in self.lines() {
            the_string.push_str(&line);
            the_string.push('\n');
        }
        the_string
    }

    fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let preamble = [
            format!(
                "c MR-Sort instance with {} structural and {} dataset clauses",
                self.clauses.structural.len(),
                self.clauses.dataset.len()
            ),
            format!("p wcnf {} {}", self.variable_count, self.clause_count()),
        ];
        preamble.into_iter().chain(
            self.weighted_clauses()
                .map(|(weight, clause)| format!("{weight} {}", clause.as_dimacs(true))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::valuation::all_false;

    fn instance() -> WcnfInstance {
        let clauses = ClauseSet {
            structural: vec![vec![1, -2], vec![3]],
            dataset: vec![vec![-1, -3], vec![2]],
        };
        WcnfInstance::new(3, clauses, 100, 1)
    }

    #[test]
    fn header() {
        let text = instance().as_wcnf();
        let lines = text.lines().collect::<Vec<_>>();
        assert!(lines[0].starts_with("c "));
        assert_eq!(lines[1], "p wcnf 3 4");
        assert_eq!(&lines[2..], ["100 1 -2 0", "100 3 0", "1 -1 -3 0", "1 2 0"]);
    }

    #[test]
    fn idempotent() {
        let instance = instance();
        assert_eq!(instance.as_wcnf(), instance.as_wcnf());

        let mut written = Vec::default();
        instance.write(&mut written).unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), instance.as_wcnf());
    }

    #[test]
    fn violation() {
        let instance = instance();

        // Only [3] and [2] are violated.
        let valuation = all_false(3);
        assert_eq!(instance.violated_weight(&valuation), 101);

        let valuation = vec![true, true, true, true];
        assert_eq!(instance.violated_weight(&valuation), 1);
    }
}
