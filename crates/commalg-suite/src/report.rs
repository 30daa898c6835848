use std::io::{self, Write};

use commalg_core::StructureLevel;
use serde::{Deserialize, Serialize};

/// Result of one axiom test over one run.
///
/// An axiom failure is a normal, expected outcome: `passed: false` plus the
/// element tuple that falsified the predicate. It is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Human-readable axiom name, stable across runs.
    pub name: String,
    /// Whether every trial satisfied the predicate.
    pub passed: bool,
    /// Display renderings of the falsifying element tuple, in draw order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterexample: Option<Vec<String>>,
}

impl TestOutcome {
    /// Builds a passing outcome.
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            counterexample: None,
        }
    }

    /// Builds a failing outcome retaining the falsifying tuple.
    pub fn fail(name: impl Into<String>, counterexample: Vec<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            counterexample: Some(counterexample),
        }
    }

    /// One-line (or two for failures) rendering for plain-text logs.
    pub fn log_entry(&self) -> String {
        match &self.counterexample {
            None if self.passed => format!("(---PASSED---) {}", self.name),
            Some(elements) if !self.passed => format!(
                "(***FAILED***) {}\n\t[counterexample :: {}]",
                self.name,
                elements.join(", ")
            ),
            _ => format!(
                "({}) {}",
                if self.passed { "---PASSED---" } else { "***FAILED***" },
                self.name
            ),
        }
    }
}

/// Observer for one suite run, injected by the caller.
///
/// Every method has a no-op default so implementations only pick up the
/// events they care about. The reporter's lifecycle is scoped to a single
/// run; the engine holds no other reporting state.
pub trait Reporter {
    /// Called once before the first axiom executes.
    fn announce_start(&mut self, _level: StructureLevel, _trials_per_axiom: u32) {}

    /// Called when an axiom test begins.
    fn announce_axiom(&mut self, _name: &str) {}

    /// Whether [`Reporter::record_trial`] should be fed per-trial detail.
    /// The engine skips rendering element strings when this is `false`.
    fn wants_trial_detail(&self) -> bool {
        false
    }

    /// Called after each trial when trial detail is requested.
    fn record_trial(&mut self, _trial: u32, _elements: &[String], _passed: bool) {}

    /// Called once per axiom with its final outcome.
    fn record_outcome(&mut self, _outcome: &TestOutcome) {}

    /// Called once after the last axiom with the aggregate verdict.
    fn announce_end(&mut self, _all_passed: bool) {}
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Reporter writing plain text to an [`io::Write`] sink.
///
/// With `verbose` set, every trial is logged; otherwise only per-axiom
/// outcomes and the run summary appear. Write failures are swallowed: the
/// sink is a diagnostic channel, never part of the engine contract.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    verbose: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Console reporter on standard output.
    pub fn stdout(verbose: bool) -> Self {
        Self {
            out: io::stdout(),
            verbose,
        }
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Console reporter on an arbitrary sink.
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    /// Consumes the reporter and returns the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn announce_start(&mut self, level: StructureLevel, trials_per_axiom: u32) {
        let _ = writeln!(
            self.out,
            "checking {level} axioms ({trials_per_axiom} trials per axiom)"
        );
    }

    fn announce_axiom(&mut self, name: &str) {
        if self.verbose {
            let _ = writeln!(self.out, "-- {name}");
        }
    }

    fn wants_trial_detail(&self) -> bool {
        self.verbose
    }

    fn record_trial(&mut self, trial: u32, elements: &[String], passed: bool) {
        let verdict = if passed { "ok" } else { "FAILED" };
        let _ = writeln!(
            self.out,
            "   trial {trial}: [{}] {verdict}",
            elements.join(", ")
        );
    }

    fn record_outcome(&mut self, outcome: &TestOutcome) {
        let _ = writeln!(self.out, "{}", outcome.log_entry());
    }

    fn announce_end(&mut self, all_passed: bool) {
        let _ = if all_passed {
            writeln!(self.out, "all axioms passed")
        } else {
            writeln!(self.out, "axiom failures detected")
        };
    }
}

/// Reporter that records every event in memory; used by tests.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    /// Level and trial count from `announce_start`, if seen.
    pub started: Option<(StructureLevel, u32)>,
    /// Axiom names in announcement order.
    pub announced: Vec<String>,
    /// Number of trial-detail events received.
    pub trials_seen: usize,
    /// Final outcomes in execution order.
    pub outcomes: Vec<TestOutcome>,
    /// Aggregate verdict from `announce_end`, if seen.
    pub finished: Option<bool>,
}

impl Reporter for RecordingReporter {
    fn announce_start(&mut self, level: StructureLevel, trials_per_axiom: u32) {
        self.started = Some((level, trials_per_axiom));
    }

    fn announce_axiom(&mut self, name: &str) {
        self.announced.push(name.to_string());
    }

    fn wants_trial_detail(&self) -> bool {
        true
    }

    fn record_trial(&mut self, _trial: u32, _elements: &[String], _passed: bool) {
        self.trials_seen += 1;
    }

    fn record_outcome(&mut self, outcome: &TestOutcome) {
        self.outcomes.push(outcome.clone());
    }

    fn announce_end(&mut self, all_passed: bool) {
        self.finished = Some(all_passed);
    }
}
