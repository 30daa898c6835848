use commalg_core::StructureLevel;
use commalg_elem::{IntegerFactory, NaturalFactory, RationalFactory, ResidueFactory};
use commalg_suite::{
    run_field_suite, run_monoid_suite, run_ring_suite, run_suite, NullReporter, RunConfig,
};

const FIELD_AXIOM_ORDER: [&str; 9] = [
    "zero is zero",
    "additive commutativity",
    "additive identity",
    "additive associativity",
    "additive inverse",
    "one is one",
    "multiplicative commutativity",
    "multiplicative associativity",
    "multiplicative inverse",
];

#[test]
fn rationals_pass_the_field_suite() {
    let mut factory = RationalFactory::from_seed(42);
    let summary =
        run_field_suite(&mut factory, &RunConfig::default(), &mut NullReporter).unwrap();
    assert_eq!(summary.level, StructureLevel::Field);
    assert!(summary.passed);
    let names: Vec<&str> = summary
        .outcomes
        .iter()
        .map(|outcome| outcome.name.as_str())
        .collect();
    assert_eq!(names, FIELD_AXIOM_ORDER);
    assert!(summary.outcomes.iter().all(|outcome| outcome.passed));
    assert!(summary
        .outcomes
        .iter()
        .all(|outcome| outcome.counterexample.is_none()));
}

#[test]
fn suite_runs_are_deterministic_per_seed() {
    let config = RunConfig::default();
    let mut first = RationalFactory::from_seed(99);
    let mut second = RationalFactory::from_seed(99);
    let summary_a = run_field_suite(&mut first, &config, &mut NullReporter).unwrap();
    let summary_b = run_field_suite(&mut second, &config, &mut NullReporter).unwrap();
    assert_eq!(summary_a, summary_b);
}

#[test]
fn explicit_level_selects_the_cumulative_prefix() {
    let config = RunConfig::default();
    for (level, expected_count) in [
        (StructureLevel::Monoid, 4),
        (StructureLevel::Group, 5),
        (StructureLevel::Ring, 8),
        (StructureLevel::Field, 9),
    ] {
        let mut factory = RationalFactory::from_seed(7);
        let summary = run_suite(&mut factory, level, &config, &mut NullReporter).unwrap();
        assert_eq!(summary.level, level);
        assert_eq!(summary.outcomes.len(), expected_count);
        assert!(summary.passed);
        let prefix: Vec<&str> = FIELD_AXIOM_ORDER[..expected_count].to_vec();
        let names: Vec<&str> = summary
            .outcomes
            .iter()
            .map(|outcome| outcome.name.as_str())
            .collect();
        assert_eq!(names, prefix);
    }
}

#[test]
fn integers_pass_the_ring_suite() {
    let mut factory = IntegerFactory::from_seed(5);
    let summary = run_ring_suite(&mut factory, &RunConfig::default(), &mut NullReporter).unwrap();
    assert_eq!(summary.level, StructureLevel::Ring);
    assert_eq!(summary.outcomes.len(), 8);
    assert!(summary.passed);
}

#[test]
fn naturals_pass_the_monoid_suite() {
    let mut factory = NaturalFactory::from_seed(11);
    let summary =
        run_monoid_suite(&mut factory, &RunConfig::default(), &mut NullReporter).unwrap();
    assert_eq!(summary.level, StructureLevel::Monoid);
    assert_eq!(summary.outcomes.len(), 4);
    assert!(summary.passed);
}

#[test]
fn residues_pass_the_ring_suite() {
    let mut factory = ResidueFactory::from_seed(13, 97).unwrap();
    let summary = run_ring_suite(&mut factory, &RunConfig::default(), &mut NullReporter).unwrap();
    assert!(summary.passed);
}

#[test]
fn trial_count_is_configurable() {
    let config = RunConfig {
        trials_per_axiom: 3,
        verbose: false,
    };
    let mut factory = RationalFactory::from_seed(1);
    let summary = run_field_suite(&mut factory, &config, &mut NullReporter).unwrap();
    assert!(summary.passed);
}
