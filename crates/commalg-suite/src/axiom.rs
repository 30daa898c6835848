use commalg_core::{CommalgError, Element, ElementFactory, ErrorInfo};

use crate::report::{Reporter, TestOutcome};

/// Boolean predicate over an element tuple. `Ok(false)` is an axiom
/// failure; `Err` means the trial itself could not be carried out and
/// aborts the whole run.
pub type Predicate<E> = Box<dyn Fn(&[E]) -> Result<bool, CommalgError>>;

/// One reusable axiom check, driven by randomized trials.
///
/// The predicate sees the *pinned* elements (identities captured when the
/// suite was assembled) followed by `arity` freshly drawn elements. Between
/// trials the test keeps no state beyond the most recent tuple, which
/// becomes the counterexample if that trial falsifies the predicate.
pub struct AxiomTest<E: Element> {
    name: &'static str,
    arity: usize,
    pinned: Vec<E>,
    predicate: Predicate<E>,
}

impl<E: Element> AxiomTest<E> {
    /// Builds an axiom test that draws `arity` random elements per trial.
    pub fn new(name: &'static str, arity: usize, predicate: Predicate<E>) -> Self {
        Self {
            name,
            arity,
            pinned: Vec::new(),
            predicate,
        }
    }

    /// Builds an axiom test that also hands `pinned` elements (identities,
    /// typically) to the predicate ahead of the random draws.
    pub fn with_pinned(
        name: &'static str,
        pinned: Vec<E>,
        arity: usize,
        predicate: Predicate<E>,
    ) -> Self {
        Self {
            name,
            arity,
            pinned,
            predicate,
        }
    }

    /// Axiom name as shown in outcomes.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of random elements drawn per trial.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Runs the trial loop against a factory.
    ///
    /// The first falsifying trial short-circuits the remaining ones and the
    /// failing tuple is retained as the counterexample. Tests with arity
    /// zero state a fact about the pinned identities alone, so they execute
    /// exactly one trial regardless of `trials_per_axiom`.
    pub fn run<F>(
        &self,
        factory: &mut F,
        trials_per_axiom: u32,
        reporter: &mut dyn Reporter,
    ) -> Result<TestOutcome, CommalgError>
    where
        F: ElementFactory<Element = E>,
    {
        reporter.announce_axiom(self.name);
        let trials = if self.arity == 0 { 1 } else { trials_per_axiom };
        let mut elements: Vec<E> = Vec::with_capacity(self.pinned.len() + self.arity);
        for trial in 1..=trials {
            elements.clear();
            elements.extend(self.pinned.iter().cloned());
            for _ in 0..self.arity {
                elements.push(factory.get_random());
            }
            let passed = self.evaluate(&elements)?;
            if reporter.wants_trial_detail() {
                reporter.record_trial(trial, &render(&elements), passed);
            }
            if !passed {
                let outcome = TestOutcome::fail(self.name, render(&elements));
                reporter.record_outcome(&outcome);
                return Ok(outcome);
            }
        }
        let outcome = TestOutcome::pass(self.name);
        reporter.record_outcome(&outcome);
        Ok(outcome)
    }

    /// Evaluates the predicate over an explicit tuple.
    ///
    /// Handing over the wrong number of elements is an engine contract
    /// violation surfaced as [`CommalgError::Arity`]; it aborts the run
    /// instead of masquerading as an axiom failure.
    pub fn evaluate(&self, elements: &[E]) -> Result<bool, CommalgError> {
        let expected = self.pinned.len() + self.arity;
        if elements.len() != expected {
            return Err(CommalgError::Arity(
                ErrorInfo::new(
                    "wrong-arity",
                    "predicate received the wrong number of elements",
                )
                .with_context("axiom", self.name)
                .with_context("expected", expected.to_string())
                .with_context("actual", elements.len().to_string()),
            ));
        }
        (self.predicate)(elements)
    }
}

fn render<E: Element>(elements: &[E]) -> Vec<String> {
    elements.iter().map(|element| element.to_string()).collect()
}
