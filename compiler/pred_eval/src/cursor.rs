//! The argument cursor threaded through one evaluation call.

use pred_value::{argument_underflow, EvalError, Value};
use smallvec::SmallVec;

use crate::config::UnderflowPolicy;

/// Arguments collected for a single call; most callables take few.
pub type ArgBuffer = SmallVec<[Value; 4]>;

/// Position-advancing view over an argument slice.
///
/// One cursor is shared by every node evaluated within a call, so sibling
/// operands consume arguments left to right without overlap. Pass it by
/// `&mut`; start a new one only at a new call boundary.
#[derive(Debug)]
pub struct Cursor<'a> {
    args: &'a [Value],
    pos: usize,
    policy: UnderflowPolicy,
}

impl<'a> Cursor<'a> {
    pub fn new(args: &'a [Value], policy: UnderflowPolicy) -> Self {
        Cursor {
            args,
            pos: 0,
            policy,
        }
    }

    /// Index of the next argument.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.args.len() - self.pos
    }

    /// Arguments not yet consumed.
    #[inline]
    pub fn rest(&self) -> &'a [Value] {
        &self.args[self.pos..]
    }

    /// Next argument without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&'a Value> {
        self.args.get(self.pos)
    }

    /// Consume and return the next argument.
    pub fn shift(&mut self) -> Result<Value, EvalError> {
        if let Some(value) = self.args.get(self.pos) {
            self.pos += 1;
            return Ok(value.clone());
        }
        self.underflow(1, 0)?;
        Ok(Value::Undefined)
    }

    /// Skip `n` arguments.
    pub fn shift_n(&mut self, n: usize) -> Result<(), EvalError> {
        let available = n.min(self.remaining());
        self.pos += available;
        if available < n {
            self.underflow(n, available)?;
        }
        Ok(())
    }

    /// Consume the next `n` arguments.
    pub fn take(&mut self, n: usize) -> Result<ArgBuffer, EvalError> {
        let available = n.min(self.remaining());
        let mut out: ArgBuffer = self.args[self.pos..self.pos + available].iter().cloned().collect();
        self.pos += available;
        if available < n {
            self.underflow(n, available)?;
            out.resize(n, Value::Undefined);
        }
        Ok(out)
    }

    /// Apply the underflow policy to a request for `requested` arguments
    /// when only `remaining` were left.
    fn underflow(&self, requested: usize, remaining: usize) -> Result<(), EvalError> {
        match self.policy {
            UnderflowPolicy::Fail => Err(argument_underflow(requested, remaining)),
            UnderflowPolicy::PadUndefined => {
                tracing::warn!(requested, remaining, "argument underflow, padding with undefined");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pred_value::EvalErrorKind;

    fn args() -> Vec<Value> {
        vec![Value::int(1), Value::int(2), Value::int(3)]
    }

    #[test]
    fn shift_advances() {
        let args = args();
        let mut cursor = Cursor::new(&args, UnderflowPolicy::Fail);
        assert_eq!(cursor.shift().unwrap(), Value::int(1));
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.peek(), Some(&Value::int(2)));
        assert_eq!(cursor.rest().len(), 2);
    }

    #[test]
    fn shift_n_skips() {
        let args = args();
        let mut cursor = Cursor::new(&args, UnderflowPolicy::Fail);
        cursor.shift_n(2).unwrap();
        assert_eq!(cursor.shift().unwrap(), Value::int(3));
    }

    #[test]
    fn fail_policy_reports_shortfall() {
        let args = args();
        let mut cursor = Cursor::new(&args, UnderflowPolicy::Fail);
        cursor.shift_n(2).unwrap();
        let err = cursor.take(3).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::ArgumentUnderflow {
                requested: 3,
                remaining: 1
            }
        );
        let err = cursor.shift().unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::ArgumentUnderflow {
                requested: 1,
                remaining: 0
            }
        );
    }

    #[test]
    fn pad_policy_fills_undefined() {
        let args = args();
        let mut cursor = Cursor::new(&args, UnderflowPolicy::PadUndefined);
        let taken = cursor.take(5).unwrap();
        assert_eq!(taken.len(), 5);
        assert_eq!(taken[2], Value::int(3));
        assert_eq!(taken[4], Value::Undefined);
        assert_eq!(cursor.shift().unwrap(), Value::Undefined);
        cursor.shift_n(4).unwrap();
        assert_eq!(cursor.remaining(), 0);
    }
}
