//! Parameter names assigned to consumed arguments.
//!
//! Every unset operand reached while rendering takes the next name in the
//! list. Names already in the list are reused in order, so rendering two
//! siblings after a [`ParamNames::rewind`] gives them the same parameters.
//! Past the end of the list a fresh name is derived from a hint.

use rustc_hash::FxHashSet;

use crate::FormatError;

/// Ordered parameter names with a read position.
#[derive(Clone, Debug, Default)]
pub struct ParamNames {
    names: Vec<String>,
    taken: FxHashSet<String>,
    pos: usize,
}

impl ParamNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` generated names: `a`, `b`, ... `z`, `a1`, `b1`, ...
    pub fn seeded(count: usize) -> Result<Self, FormatError> {
        let mut params = Self::new();
        params
            .names
            .try_reserve_exact(count)
            .map_err(|_| FormatError::allocation(count))?;
        params
            .taken
            .try_reserve(count)
            .map_err(|_| FormatError::allocation(count))?;
        for index in 0..count {
            params.insert(letter_name(index));
        }
        Ok(params)
    }

    /// Use caller-chosen names, in order. Duplicates are kept once.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut params = Self::new();
        for name in names {
            params.insert(name.into());
        }
        params
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of names handed out since the last rewind.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Start handing out names from the beginning again.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Next name, extending the list from `hint` when exhausted.
    pub(crate) fn next(&mut self, hint: &str) -> Result<String, FormatError> {
        if self.pos == self.names.len() {
            self.names
                .try_reserve(1)
                .map_err(|_| FormatError::allocation(self.names.len() + 1))?;
            let name = self.unique(hint);
            self.insert(name);
        }
        let name = self.names[self.pos].clone();
        self.pos += 1;
        Ok(name)
    }

    /// Make room for `additional` names past the read position, failing
    /// up front instead of partway through a long run of [`Self::next`].
    pub(crate) fn reserve_ahead(&mut self, additional: usize) -> Result<(), FormatError> {
        let missing = self
            .pos
            .saturating_add(additional)
            .saturating_sub(self.names.len());
        if missing == 0 {
            return Ok(());
        }
        let requested = self.names.len().saturating_add(missing);
        self.names
            .try_reserve(missing)
            .map_err(|_| FormatError::allocation(requested))?;
        self.taken
            .try_reserve(missing)
            .map_err(|_| FormatError::allocation(requested))
    }

    fn insert(&mut self, name: String) {
        if self.taken.insert(name.clone()) {
            self.names.push(name);
        }
    }

    fn unique(&self, hint: &str) -> String {
        if !self.taken.contains(hint) {
            return hint.to_string();
        }
        (2usize..)
            .map(|n| format!("{hint}{n}"))
            .find(|candidate| !self.taken.contains(candidate))
            .unwrap_or_else(|| hint.to_string())
    }
}

fn letter_name(index: usize) -> String {
    let letter = char::from(b'a' + u8::try_from(index % 26).unwrap_or(0));
    match index / 26 {
        0 => letter.to_string(),
        round => format!("{letter}{round}"),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeded_letters() {
        let params = ParamNames::seeded(3).unwrap();
        assert_eq!(params.names(), ["a", "b", "c"]);
        let many = ParamNames::seeded(28).unwrap();
        assert_eq!(many.names()[25], "z");
        assert_eq!(many.names()[26], "a1");
        assert_eq!(many.names()[27], "b1");
    }

    #[test]
    fn next_walks_then_extends_from_hint() {
        let mut params = ParamNames::seeded(1).unwrap();
        assert_eq!(params.next("value").unwrap(), "a");
        assert_eq!(params.next("value").unwrap(), "value");
        assert_eq!(params.next("value").unwrap(), "value2");
        assert_eq!(params.position(), 3);
        assert_eq!(params.names(), ["a", "value", "value2"]);
    }

    #[test]
    fn rewind_reuses_names() {
        let mut params = ParamNames::new();
        assert_eq!(params.next("x").unwrap(), "x");
        params.rewind();
        assert_eq!(params.next("y").unwrap(), "x");
        assert_eq!(params.names().len(), 1);
    }

    #[test]
    fn reserve_ahead_counts_from_position() {
        let mut params = ParamNames::seeded(2).unwrap();
        params.reserve_ahead(2).unwrap();
        params.next("x").unwrap();
        params.reserve_ahead(1).unwrap();
        assert_eq!(params.names(), ["a", "b"]);
        assert_eq!(
            params.reserve_ahead(usize::MAX),
            Err(FormatError::Allocation { requested: usize::MAX })
        );
    }

    #[test]
    fn seeding_too_many_fails() {
        assert_eq!(
            ParamNames::seeded(usize::MAX).unwrap_err(),
            FormatError::Allocation { requested: usize::MAX }
        );
    }

    #[test]
    fn from_names_dedupes() {
        let params = ParamNames::from_names(["s", "t", "s"]);
        assert_eq!(params.names(), ["s", "t"]);
    }
}
