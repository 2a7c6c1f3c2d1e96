//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::Interpreter;
use crate::config::{EvalConfig, UnderflowPolicy};

/// Builder for [`Interpreter`] instances.
///
/// Starts from [`EvalConfig::default`]; each setter overrides one field.
#[derive(Clone, Debug, Default)]
pub struct InterpreterBuilder {
    config: EvalConfig,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set what happens when a node needs more arguments than remain.
    #[must_use]
    pub fn underflow(mut self, policy: UnderflowPolicy) -> Self {
        self.config.underflow = policy;
        self
    }

    /// Cap the number of capture groups exported per regex match.
    #[must_use]
    pub fn max_regex_captures(mut self, max: usize) -> Self {
        self.config.max_regex_captures = max;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            config: self.config,
        }
    }
}
