#![deny(missing_docs)]
#![doc = "Randomized axiom-verification engine: assembles per-level axiom suites and drives them against element factories."]

//! Passing `trials_per_axiom` randomized checks is evidence, not proof,
//! that an axiom holds: the engine gathers counterexamples when it can and
//! confidence when it cannot.

/// Single reusable axiom checks and their trial loop.
pub mod axiom;
/// Run configuration and defaults.
pub mod config;
/// Test outcomes and the reporter capability.
pub mod report;
/// Per-level suite assembly and the public run entry points.
pub mod suite;

pub use axiom::{AxiomTest, Predicate};
pub use config::RunConfig;
pub use report::{ConsoleReporter, NullReporter, RecordingReporter, Reporter, TestOutcome};
pub use suite::{
    run_field_suite, run_group_suite, run_monoid_suite, run_ring_suite, run_suite, SuiteSummary,
};
