use commalg_core::{CommalgError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Parameters governing one axiom-suite run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of randomized trials executed for each axiom.
    #[serde(default = "default_trials_per_axiom")]
    pub trials_per_axiom: u32,
    /// Whether reporters should receive per-trial detail.
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

fn default_trials_per_axiom() -> u32 {
    100
}

fn default_verbose() -> bool {
    true
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            trials_per_axiom: default_trials_per_axiom(),
            verbose: default_verbose(),
        }
    }
}

impl RunConfig {
    /// Checks the configuration before a run starts.
    pub fn validate(&self) -> Result<(), CommalgError> {
        if self.trials_per_axiom == 0 {
            return Err(CommalgError::Config(
                ErrorInfo::new("zero-trials", "trials_per_axiom must be positive")
                    .with_hint("use the default of 100 trials per axiom"),
            ));
        }
        Ok(())
    }
}
