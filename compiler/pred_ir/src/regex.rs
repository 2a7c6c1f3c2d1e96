//! Regular-expression literal with a lazily compiled matcher.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use bitflags::bitflags;
use pred_value::{regex_compile_failed, EvalError};
use regex_automata::meta::{BuildError, Regex};
use regex_automata::util::syntax;

bitflags! {
    /// Regex compile flags, one bit per flag letter.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RegexFlags: u8 {
        /// `g`: accepted for compatibility; a predicate always runs one search.
        const GLOBAL = 1 << 0;
        /// `i`
        const IGNORE_CASE = 1 << 1;
        /// `m`: `^`/`$` match at line boundaries.
        const MULTILINE = 1 << 2;
        /// `s`: `.` matches newlines.
        const DOT_ALL = 1 << 3;
        /// `u`: empty matches never split a UTF-8 encoded code point.
        const UNICODE = 1 << 4;
        /// `y`: the match must start at offset zero.
        const STICKY = 1 << 5;
    }
}

const FLAG_LETTERS: [(RegexFlags, char); 6] = [
    (RegexFlags::GLOBAL, 'g'),
    (RegexFlags::IGNORE_CASE, 'i'),
    (RegexFlags::MULTILINE, 'm'),
    (RegexFlags::DOT_ALL, 's'),
    (RegexFlags::UNICODE, 'u'),
    (RegexFlags::STICKY, 'y'),
];

/// An unrecognized regex flag letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagParseError {
    pub flag: char,
}

impl fmt::Display for FlagParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid regular expression flag '{}'", self.flag)
    }
}

impl std::error::Error for FlagParseError {}

impl RegexFlags {
    /// Parse a flag string such as `"gi"`. Repeated letters are accepted.
    pub fn parse(flags: &str) -> Result<Self, FlagParseError> {
        flags.chars().try_fold(RegexFlags::empty(), |acc, c| {
            FLAG_LETTERS
                .iter()
                .find(|(_, letter)| *letter == c)
                .map(|(flag, _)| acc | *flag)
                .ok_or(FlagParseError { flag: c })
        })
    }
}

impl FromStr for RegexFlags {
    type Err = FlagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical flag string, letters in `gimsuy` order.
impl fmt::Display for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, letter) in &FLAG_LETTERS {
            if self.contains(*flag) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// Pattern source, flags, and the compiled form once built.
///
/// The compile result (success or failure) is computed at most once per
/// node. Cloning yields a node with an empty cache.
#[derive(Debug)]
pub struct RegexPredicate {
    source: Box<str>,
    flags: RegexFlags,
    compiled: OnceLock<Result<Regex, String>>,
}

impl RegexPredicate {
    pub fn new(source: &str, flags: RegexFlags) -> Self {
        RegexPredicate {
            source: source.into(),
            flags,
            compiled: OnceLock::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> RegexFlags {
        self.flags
    }

    /// Whether compilation has been attempted.
    pub fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }

    /// The compiled matcher, compiling on first call.
    ///
    /// A pattern that fails to compile fails the same way on every call.
    pub fn compiled(&self) -> Result<&Regex, EvalError> {
        self.compiled
            .get_or_init(|| {
                let result = build(&self.source, self.flags).map_err(|e| build_reason(&e));
                match &result {
                    Ok(re) => tracing::debug!(
                        pattern = %self.source,
                        flags = %self.flags,
                        captures = re.captures_len(),
                        "compiled regex"
                    ),
                    Err(reason) => tracing::debug!(
                        pattern = %self.source,
                        %reason,
                        "regex compile failed"
                    ),
                }
                result
            })
            .as_ref()
            .map_err(|reason| regex_compile_failed(&self.source, reason))
    }

    /// Number of capture groups, including the implicit whole-match group.
    pub fn capture_count(&self) -> Result<usize, EvalError> {
        Ok(self.compiled()?.captures_len())
    }
}

impl Clone for RegexPredicate {
    fn clone(&self) -> Self {
        RegexPredicate::new(&self.source, self.flags)
    }
}

/// Patterns are parsed with Unicode classes enabled so non-ASCII ranges
/// compile, but may match arbitrary bytes so buffer inputs still search.
/// Lookaround and backreferences are not supported and fail to compile.
fn build(source: &str, flags: RegexFlags) -> Result<Regex, BuildError> {
    Regex::builder()
        .syntax(
            syntax::Config::new()
                .case_insensitive(flags.contains(RegexFlags::IGNORE_CASE))
                .multi_line(flags.contains(RegexFlags::MULTILINE))
                .dot_matches_new_line(flags.contains(RegexFlags::DOT_ALL))
                .unicode(true)
                .utf8(false),
        )
        .configure(Regex::config().utf8_empty(flags.contains(RegexFlags::UNICODE)))
        .build(source)
}

/// The parser's diagnostic when there is one, else the build error itself.
fn build_reason(err: &BuildError) -> String {
    err.syntax_error()
        .map_or_else(|| err.to_string(), ToString::to_string)
}
