use commalg_core::{
    AbelianGroupElement, AbelianGroupElementFactory, CommalgError, CommutativeMonoidElement,
    CommutativeMonoidElementFactory, CommutativeRingElement, CommutativeRingElementFactory,
    ElementFactory, FieldElement, FieldElementFactory, StructureLevel,
};
use serde::{Deserialize, Serialize};

use crate::axiom::AxiomTest;
use crate::config::RunConfig;
use crate::report::{Reporter, TestOutcome};

/// Aggregate result of one suite run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteSummary {
    /// Structure level the suite was assembled for.
    pub level: StructureLevel,
    /// Per-axiom outcomes in execution order.
    pub outcomes: Vec<TestOutcome>,
    /// Logical AND over every outcome.
    pub passed: bool,
}

impl SuiteSummary {
    fn from_outcomes(level: StructureLevel, outcomes: Vec<TestOutcome>) -> Self {
        let passed = outcomes.iter().all(|outcome| outcome.passed);
        Self {
            level,
            outcomes,
            passed,
        }
    }
}

/// Axiom tests for a commutative monoid, in their fixed execution order.
fn monoid_axioms<F>(factory: &F) -> Vec<AxiomTest<F::Element>>
where
    F: CommutativeMonoidElementFactory,
    F::Element: CommutativeMonoidElement,
{
    let claimed_zero = factory.zero();
    let identity_zero = factory.zero();
    vec![
        AxiomTest::with_pinned(
            "zero is zero",
            vec![claimed_zero],
            0,
            Box::new(|xs: &[F::Element]| Ok(xs[0].is_zero())),
        ),
        AxiomTest::new(
            "additive commutativity",
            2,
            Box::new(|xs: &[F::Element]| Ok(xs[0].add_to(&xs[1])? == xs[1].add_to(&xs[0])?)),
        ),
        AxiomTest::with_pinned(
            "additive identity",
            vec![identity_zero],
            1,
            Box::new(|xs: &[F::Element]| Ok(xs[1].add_to(&xs[0])? == xs[1])),
        ),
        AxiomTest::new(
            "additive associativity",
            3,
            Box::new(|xs: &[F::Element]| {
                let left = xs[0].add_to(&xs[1])?.add_to(&xs[2])?;
                let right = xs[0].add_to(&xs[1].add_to(&xs[2])?)?;
                Ok(left == right)
            }),
        ),
    ]
}

/// Monoid axioms plus the additive-inverse law.
fn group_axioms<F>(factory: &F) -> Vec<AxiomTest<F::Element>>
where
    F: AbelianGroupElementFactory,
    F::Element: AbelianGroupElement,
{
    let mut tests = monoid_axioms(factory);
    tests.push(AxiomTest::new(
        "additive inverse",
        1,
        Box::new(|xs: &[F::Element]| {
            let negated = xs[0].negative()?;
            Ok(negated.add_to(&xs[0])?.is_zero() && xs[0].add_to(&negated)?.is_zero())
        }),
    ));
    tests
}

/// Group axioms plus the multiplicative monoid laws.
fn ring_axioms<F>(factory: &F) -> Vec<AxiomTest<F::Element>>
where
    F: CommutativeRingElementFactory,
    F::Element: CommutativeRingElement,
{
    let mut tests = group_axioms(factory);
    let claimed_one = factory.one();
    tests.push(AxiomTest::with_pinned(
        "one is one",
        vec![claimed_one],
        0,
        Box::new(|xs: &[F::Element]| Ok(xs[0].is_one())),
    ));
    tests.push(AxiomTest::new(
        "multiplicative commutativity",
        2,
        Box::new(|xs: &[F::Element]| {
            Ok(xs[0].multiply_by(&xs[1])? == xs[1].multiply_by(&xs[0])?)
        }),
    ));
    tests.push(AxiomTest::new(
        "multiplicative associativity",
        3,
        Box::new(|xs: &[F::Element]| {
            let left = xs[0].multiply_by(&xs[1])?.multiply_by(&xs[2])?;
            let right = xs[0].multiply_by(&xs[1].multiply_by(&xs[2])?)?;
            Ok(left == right)
        }),
    ));
    tests
}

/// Ring axioms plus the multiplicative-inverse law.
fn field_axioms<F>(factory: &F) -> Vec<AxiomTest<F::Element>>
where
    F: FieldElementFactory,
    F::Element: FieldElement,
{
    let mut tests = ring_axioms(factory);
    tests.push(AxiomTest::new(
        "multiplicative inverse",
        1,
        Box::new(|xs: &[F::Element]| {
            // Zero has no inverse; the axiom quantifies over nonzero
            // elements, so a zero draw passes trivially. The underlying
            // `inverse` stays partial at zero on purpose.
            if xs[0].is_zero() {
                return Ok(true);
            }
            let inverse = xs[0].inverse()?;
            Ok(inverse.multiply_by(&xs[0])?.is_one() && xs[0].multiply_by(&inverse)?.is_one())
        }),
    ));
    tests
}

fn execute<F>(
    level: StructureLevel,
    tests: Vec<AxiomTest<F::Element>>,
    factory: &mut F,
    config: &RunConfig,
    reporter: &mut dyn Reporter,
) -> Result<SuiteSummary, CommalgError>
where
    F: ElementFactory,
{
    config.validate()?;
    reporter.announce_start(level, config.trials_per_axiom);
    let mut outcomes = Vec::with_capacity(tests.len());
    for test in &tests {
        outcomes.push(test.run(factory, config.trials_per_axiom, reporter)?);
    }
    let summary = SuiteSummary::from_outcomes(level, outcomes);
    reporter.announce_end(summary.passed);
    Ok(summary)
}

/// Runs the commutative-monoid axioms against a monoid-level factory.
pub fn run_monoid_suite<F>(
    factory: &mut F,
    config: &RunConfig,
    reporter: &mut dyn Reporter,
) -> Result<SuiteSummary, CommalgError>
where
    F: CommutativeMonoidElementFactory,
    F::Element: CommutativeMonoidElement,
{
    let tests = monoid_axioms(factory);
    execute(StructureLevel::Monoid, tests, factory, config, reporter)
}

/// Runs the abelian-group axioms against a group-level factory.
pub fn run_group_suite<F>(
    factory: &mut F,
    config: &RunConfig,
    reporter: &mut dyn Reporter,
) -> Result<SuiteSummary, CommalgError>
where
    F: AbelianGroupElementFactory,
    F::Element: AbelianGroupElement,
{
    let tests = group_axioms(factory);
    execute(StructureLevel::Group, tests, factory, config, reporter)
}

/// Runs the commutative-ring axioms against a ring-level factory.
pub fn run_ring_suite<F>(
    factory: &mut F,
    config: &RunConfig,
    reporter: &mut dyn Reporter,
) -> Result<SuiteSummary, CommalgError>
where
    F: CommutativeRingElementFactory,
    F::Element: CommutativeRingElement,
{
    let tests = ring_axioms(factory);
    execute(StructureLevel::Ring, tests, factory, config, reporter)
}

/// Runs the field axioms against a field-level factory.
pub fn run_field_suite<F>(
    factory: &mut F,
    config: &RunConfig,
    reporter: &mut dyn Reporter,
) -> Result<SuiteSummary, CommalgError>
where
    F: FieldElementFactory,
    F::Element: FieldElement,
{
    let tests = field_axioms(factory);
    execute(StructureLevel::Field, tests, factory, config, reporter)
}

/// Runs the cumulative axiom suite for `level` against a field-capable
/// factory.
///
/// The test list nests by structure level, so group-dependent failures
/// surface before ring-dependent ones and those before field-dependent
/// ones. Outcomes come back in that fixed order; the aggregate verdict is
/// their logical AND.
pub fn run_suite<F>(
    factory: &mut F,
    level: StructureLevel,
    config: &RunConfig,
    reporter: &mut dyn Reporter,
) -> Result<SuiteSummary, CommalgError>
where
    F: FieldElementFactory,
    F::Element: FieldElement,
{
    let tests = match level {
        StructureLevel::Monoid => monoid_axioms(factory),
        StructureLevel::Group => group_axioms(factory),
        StructureLevel::Ring => ring_axioms(factory),
        StructureLevel::Field => field_axioms(factory),
    };
    execute(level, tests, factory, config, reporter)
}
