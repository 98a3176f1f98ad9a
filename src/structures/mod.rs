//! Structures used to build an instance.
//!
//! - [Atoms](atom), [literals](literal), [clauses](clause), and [valuations](valuation) are the usual objects of satisfiability.
//! - [Coalitions](coalition), [datasets](dataset), and [variables](variable) are the objects of an MR-Sort model.

pub mod atom;
pub mod clause;
pub mod coalition;
pub mod dataset;
pub mod literal;
pub mod valuation;
pub mod variable;
