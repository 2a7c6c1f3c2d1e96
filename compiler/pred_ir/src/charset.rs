//! Character-set literal with a lazily decoded code-point cache.

use std::sync::OnceLock;

/// A set of accepted code points, stored as its literal text.
///
/// The decoded code points are computed on first use and cached for the
/// lifetime of the node. The fill is guarded by `OnceLock`, so concurrent
/// first use decodes at most once.
#[derive(Clone, Debug)]
pub struct Charset {
    set: Box<str>,
    chars: OnceLock<Vec<char>>,
}

impl Charset {
    pub fn new(set: &str) -> Self {
        Charset {
            set: set.into(),
            chars: OnceLock::new(),
        }
    }

    /// The literal set text.
    pub fn set(&self) -> &str {
        &self.set
    }

    /// Decoded code points in literal order, decoding on first call.
    pub fn chars(&self) -> &[char] {
        self.chars.get_or_init(|| {
            let chars: Vec<char> = self.set.chars().collect();
            tracing::debug!(set = %self.set, count = chars.len(), "decoded charset");
            chars
        })
    }

    /// Whether the cache has been filled.
    pub fn is_decoded(&self) -> bool {
        self.chars.get().is_some()
    }

    /// True iff every code point of `input` is in the set. Vacuously true
    /// for empty input.
    pub fn contains_all(&self, input: &[char]) -> bool {
        let set = self.chars();
        input.iter().all(|c| set.contains(c))
    }
}
