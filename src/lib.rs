//! A library for learning MR-Sort models from labeled examples through weighted MaxSAT.
//!
//! mrsort_sat compiles the problem of learning a Majority-Rule Sorting (MR-Sort) model into a weighted MaxSAT instance, hands the instance to an external solver, and reads the assignment returned back into the parameters of a model.
//!
//! An MR-Sort model sorts students into ordered classes from their marks on a handful of subjects.
//! Each boundary between classes has a frontier mark for each subject, and a student clears a boundary if the subjects they clear form a *sufficient coalition*.
//! Rather than search for weights, the instance asks a solver for a set of frontiers and sufficient coalitions which agree with as many labeled students as possible.
//!
//! # Orientation
//!
//! The library is designed around a [learner](crate::learner::Learner), built from a [configuration](crate::config).
//!
//! A call to learn from a [dataset](crate::structures::dataset) proceeds through:
//! - A [variable space](crate::encoding::variables), of threshold variables `x(i, h, k)` and coalition variables `y(B)`.
//! - Five families of [clauses](crate::encoding::clauses), three structural and two tied to the dataset.
//! - A [weighted instance](crate::encoding::wcnf), in which structural clauses outweigh dataset clauses.
//! - A [backend](crate::solver::MaxSatBackend), typically an [external solver](crate::solver::ExternalSolver) run as a child process.
//!
//! Useful starting points, then, may be:
//! - The [clauses](crate::encoding::clauses) to see how an MR-Sort model is axiomatised.
//! - The [model](crate::model) to see how students are sorted, and how a model is read from an assignment.
//! - The [generator](crate::generator) for synthetic datasets with a known model.
//!
//! # Examples
//!
//! + Encode a small dataset, and check the model which labeled it violates no clause.
//!
//! ```rust
//! # use mrsort_sat::config::Config;
//! # use mrsort_sat::learner::Learner;
//! # use mrsort_sat::model::MrSortModel;
//! # use mrsort_sat::structures::dataset::Dataset;
//! let model = MrSortModel::new(vec![0.5, 0.5], vec![vec![12], vec![14]], 0.75);
//!
//! let marks = vec![vec![10, 15], vec![18, 19], vec![3, 20], vec![13, 14]];
//! let labels = marks.iter().map(|row| model.classify(row)).collect();
//! let dataset = Dataset::new(marks, labels);
//!
//! let learner = Learner::from_config(Config::default()).unwrap();
//! let encoded = learner.prepare(&dataset).unwrap();
//!
//! let certificate = model.certificate(&encoded.space).unwrap();
//! assert_eq!(encoded.instance.violated_weight(&certificate), 0);
//! ```
//!
//! + Write an instance for a solver.
//!
//! ```rust
//! # use mrsort_sat::config::Config;
//! # use mrsort_sat::learner::Learner;
//! # use mrsort_sat::structures::dataset::Dataset;
//! let learner = Learner::from_config(Config::default()).unwrap();
//! let dataset = Dataset::new(vec![vec![10, 15], vec![18, 19]], vec![0, 1]);
//!
//! let wcnf = learner.prepare(&dataset).unwrap().instance.as_wcnf();
//! assert!(wcnf.lines().nth(1).is_some_and(|line| line.starts_with("p wcnf 88 ")));
//! ```
//!
//! # Logs
//!
//! Calls to [log] are made with [targets](crate::misc::log::targets), and no logger is provided by the library.

pub mod config;
pub mod encoding;
pub mod generator;
pub mod learner;
pub mod misc;
pub mod model;
pub mod solver;
pub mod structures;
pub mod types;
