//! Structured error types shared across commalg crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`CommalgError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (operands, moduli, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the commalg engine.
///
/// A predicate evaluating to `false` is an axiom *failure*, reported through
/// a `TestOutcome`; it is never represented by one of these variants. The
/// variants cover conditions under which the run itself cannot continue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CommalgError {
    /// Value construction rejected (zero denominator, zero modulus, ...).
    #[error("construction error: {0}")]
    Construction(ErrorInfo),
    /// An arithmetic result is not exactly representable; never wrapped.
    #[error("overflow error: {0}")]
    Overflow(ErrorInfo),
    /// Operation is mathematically undefined for the given operands.
    #[error("undefined operation: {0}")]
    Undefined(ErrorInfo),
    /// Two elements of incompatible runtime variants were combined.
    #[error("type mismatch: {0}")]
    TypeMismatch(ErrorInfo),
    /// A predicate received the wrong number of elements (engine bug).
    #[error("arity error: {0}")]
    Arity(ErrorInfo),
    /// Run configuration is invalid.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl CommalgError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CommalgError::Construction(info)
            | CommalgError::Overflow(info)
            | CommalgError::Undefined(info)
            | CommalgError::TypeMismatch(info)
            | CommalgError::Arity(info)
            | CommalgError::Config(info) => info,
        }
    }
}
