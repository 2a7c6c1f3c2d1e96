//! Capture spans produced by one regex execution.
//!
//! Spans are byte offsets into the input. They live only for the duration
//! of the evaluation that produced them; exporting copies them into host
//! values.

use pred_ir::regex_automata::{meta::Regex, Anchored, Input};
use pred_value::{Array, Value};
use smallvec::SmallVec;

type Span = Option<(usize, usize)>;

/// Group spans of a successful match. Group 0 is the whole match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captures {
    spans: SmallVec<[Span; 8]>,
}

impl Captures {
    /// Run `regex` over `haystack` from offset zero.
    ///
    /// A sticky search only accepts a match starting at offset zero.
    pub fn search(regex: &Regex, haystack: &[u8], sticky: bool) -> Option<Self> {
        let mut input = Input::new(haystack);
        if sticky {
            input = input.anchored(Anchored::Yes);
        }
        let mut caps = regex.create_captures();
        regex.search_captures(&input, &mut caps);
        if !caps.is_match() {
            return None;
        }
        let spans = (0..caps.group_len())
            .map(|i| caps.get_group(i).map(|span| (span.start, span.end)))
            .collect();
        Some(Captures { spans })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Span of group `index`, `None` if it did not participate.
    pub fn get(&self, index: usize) -> Option<(usize, usize)> {
        self.spans.get(index).copied().flatten()
    }

    /// Export at most `limit` groups as `[[start, end] | null, ...]`.
    pub fn to_value(&self, limit: usize) -> Value {
        Value::array(self.spans.iter().take(limit).map(span_value).collect())
    }

    /// Write at most `limit` groups into `sink`, replacing its contents.
    pub fn fill(&self, sink: &Array, limit: usize) {
        let count = self.len().min(limit);
        sink.set_len(count);
        for (i, span) in self.spans.iter().take(count).enumerate() {
            sink.set(i, span_value(span));
        }
    }
}

fn span_value(span: &Span) -> Value {
    match *span {
        Some((start, end)) => Value::array(vec![offset(start), offset(end)]),
        None => Value::Null,
    }
}

fn offset(n: usize) -> Value {
    Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
}
