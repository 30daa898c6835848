use commalg_core::StructureLevel;
use commalg_suite::{RunConfig, SuiteSummary, TestOutcome};

#[test]
fn outcome_roundtrip_preserves_counterexample() {
    let outcome = TestOutcome::fail(
        "additive commutativity",
        vec!["1/2".to_string(), "-3/4".to_string()],
    );
    let json = serde_json::to_string(&outcome).unwrap();
    let back: TestOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(outcome, back);
}

#[test]
fn passing_outcome_omits_the_counterexample_field() {
    let outcome = TestOutcome::pass("zero is zero");
    let json = serde_json::to_string(&outcome).unwrap();
    assert!(!json.contains("counterexample"));
}

#[test]
fn summary_roundtrip() {
    let summary = SuiteSummary {
        level: StructureLevel::Field,
        outcomes: vec![
            TestOutcome::pass("zero is zero"),
            TestOutcome::fail("additive inverse", vec!["5/6".to_string()]),
        ],
        passed: false,
    };
    let json = serde_json::to_string(&summary).unwrap();
    let back: SuiteSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(summary, back);
}

#[test]
fn empty_config_document_yields_the_defaults() {
    let config: RunConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, RunConfig::default());
    assert_eq!(config.trials_per_axiom, 100);
    assert!(config.verbose);
}

#[test]
fn partial_config_document_fills_the_rest() {
    let config: RunConfig = serde_json::from_str("{\"trials_per_axiom\": 7}").unwrap();
    assert_eq!(config.trials_per_axiom, 7);
    assert!(config.verbose);
}
