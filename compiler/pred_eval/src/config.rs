//! Evaluation configuration.

/// Capture groups exported per match unless configured otherwise.
pub const DEFAULT_MAX_REGEX_CAPTURES: usize = 255;

/// What to do when a node asks for more arguments than remain.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnderflowPolicy {
    /// Fail with `ArgumentUnderflow`.
    #[default]
    Fail,
    /// Substitute `undefined` for each missing argument and log a warning.
    PadUndefined,
}

/// Settings for an [`Interpreter`](crate::Interpreter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    pub underflow: UnderflowPolicy,
    /// Upper bound on capture groups written to a regex sink or callback.
    pub max_regex_captures: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            underflow: UnderflowPolicy::default(),
            max_regex_captures: DEFAULT_MAX_REGEX_CAPTURES,
        }
    }
}
