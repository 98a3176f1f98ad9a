use std::collections::HashSet;

use rand::{rngs::StdRng, SeedableRng};

use mrsort_sat::{
    config::Config,
    encoding::{clauses, variables::VariableSpace},
    generator,
    learner::Learner,
    model::MrSortModel,
    structures::{
        clause::Clause,
        dataset::{Dataset, Partition},
        literal::Literal,
    },
};

mod variables {
    use super::*;

    #[test]
    fn counts_and_round_trip() {
        for subjects in 1..=6 {
            for classes in 2..=4 {
                let space = VariableSpace::new(subjects, classes, 20).unwrap();
                assert_eq!(space.threshold_count(), subjects * classes * 21);
                assert_eq!(space.coalition_count(), 2_usize.pow(subjects as u32));

                let mut atoms = HashSet::new();
                for (atom, variable) in space.variables() {
                    assert!(atoms.insert(atom));
                    assert_eq!(space.variable(space.atom(&variable).unwrap()), Some(variable));
                }
                assert_eq!(atoms.len(), space.variable_count());
                assert_eq!(atoms.iter().max().copied(), Some(space.variable_count() as u32));
            }
        }
    }

    #[test]
    fn complements() {
        let space = VariableSpace::new(5, 2, 20).unwrap();
        let full = space.full_coalition();
        for coalition in space.coalitions() {
            let complement = space.complement(*coalition).unwrap();
            assert!(complement.is_disjoint(coalition));
            assert_eq!(complement.union(coalition), full);
        }
    }
}

mod clause_families {
    use super::*;

    #[test]
    fn ascending_scales_per_pair() {
        let space = VariableSpace::new(2, 3, 20).unwrap();
        let clauses = clauses::ascending_scales(&space).unwrap();

        for subject in 0..2 {
            for boundary in 0..3 {
                let lowest = space.threshold(subject, boundary, 0).unwrap();
                let highest = space.threshold(subject, boundary, 20).unwrap();
                let count = clauses
                    .iter()
                    .filter(|clause| clause.atoms().all(|atom| (lowest..=highest).contains(&atom)))
                    .count();
                assert_eq!(count, 21 * 20 / 2);
            }
        }
    }

    #[test]
    fn coalition_strength_is_duplicate_free() {
        let space = VariableSpace::new(5, 2, 20).unwrap();
        let clauses = clauses::coalition_strength(&space).unwrap();
        let pairs = clauses
            .iter()
            .map(|clause| (clause[0], clause[1]))
            .collect::<HashSet<_>>();
        assert_eq!(pairs.len(), clauses.len());
    }

    #[test]
    fn dataset_clauses_reference_mapped_variables() {
        let space = VariableSpace::new(2, 2, 20).unwrap();
        let marks = vec![vec![10, 15], vec![18, 19]];
        let partition = Partition::new(&marks, &[0, 1], 2, 2).unwrap();

        let set = clauses::generate(&space, &partition).unwrap();
        for clause in set.structural.iter().chain(&set.dataset) {
            for literal in clause.literals() {
                assert!(space.variable(literal.atom()).is_some());
            }
        }
    }
}

mod certificates {
    use super::*;

    #[test]
    fn two_students() {
        let model = MrSortModel::new(vec![0.5, 0.5], vec![vec![12], vec![14]], 0.75);
        let dataset = Dataset::new(vec![vec![10, 15], vec![18, 19]], vec![0, 1]);

        let learner = Learner::from_config(Config::default()).unwrap();
        let encoded = learner.prepare(&dataset).unwrap();
        let certificate = model.certificate(&encoded.space).unwrap();

        assert_eq!(encoded.instance.violated_weight(&certificate), 0);
    }

    #[test]
    fn generated_datasets() {
        let learner = Learner::from_config(Config::default()).unwrap();

        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let generated = generator::generate(&mut rng, 25, 3, 3, 20).unwrap();

            let encoded = learner.prepare(&generated.dataset).unwrap();
            let certificate = generated.model.certificate(&encoded.space).unwrap();
            assert_eq!(encoded.instance.violated_weight(&certificate), 0);
        }
    }

    #[test]
    fn mislabeled_students_cost_dataset_weight() {
        let model = MrSortModel::new(vec![0.5, 0.5], vec![vec![12], vec![14]], 0.75);
        // The second student is labeled below the class the model gives.
        let dataset = Dataset::new(vec![vec![10, 15], vec![18, 19], vec![1, 2]], vec![0, 0, 1]);

        let learner = Learner::from_config(Config::default()).unwrap();
        let encoded = learner.prepare(&dataset).unwrap();
        let certificate = model.certificate(&encoded.space).unwrap();

        let violated = encoded.instance.violated_weight(&certificate);
        assert!(violated > 0);
        assert!(violated < Config::default().structural_weight.value);
    }
}

mod wcnf {
    use super::*;

    #[test]
    fn idempotent() {
        let learner = Learner::from_config(Config::default()).unwrap();
        let dataset = Dataset::new(vec![vec![10, 15, 3], vec![18, 19, 12]], vec![0, 1]);

        let first = learner.prepare(&dataset).unwrap().instance.as_wcnf();
        let second = learner.prepare(&dataset).unwrap().instance.as_wcnf();
        assert_eq!(first, second);
    }

    #[test]
    fn layout() {
        let learner = Learner::from_config(Config::default()).unwrap();
        let dataset = Dataset::new(vec![vec![10, 15], vec![18, 19]], vec![0, 1]);
        let instance = learner.prepare(&dataset).unwrap().instance;
        let text = instance.as_wcnf();

        let lines = text.lines().collect::<Vec<_>>();
        assert!(lines[0].starts_with('c'));
        assert_eq!(
            lines[1],
            format!("p wcnf {} {}", instance.variable_count(), instance.clause_count())
        );
        assert_eq!(lines.len(), 2 + instance.clause_count());

        let structural = instance.clauses().structural.len();
        assert!(lines[2..2 + structural].iter().all(|line| line.starts_with("100 ")));
        assert!(lines[2 + structural..].iter().all(|line| line.starts_with("1 ")));
        assert!(lines[2..].iter().all(|line| line.ends_with(" 0")));
    }
}
