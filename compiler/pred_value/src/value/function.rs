//! Host callables.

use std::fmt;
use std::sync::Arc;

use super::{Heap, ObjectRef, Value};
use crate::errors::EvalResult;

/// Native function signature: `(this, args) -> result`.
pub type NativeFn = dyn Fn(&Value, &[Value]) -> EvalResult + Send + Sync;

/// A callable value supplied by the host.
///
/// Cloning shares the underlying closure; identity comparison uses
/// [`FunctionValue::ptr_eq`].
#[derive(Clone)]
pub struct FunctionValue {
    name: Heap<str>,
    arity: usize,
    func: Heap<NativeFn>,
    prototype: Option<ObjectRef>,
    source: Option<Heap<str>>,
}

impl FunctionValue {
    /// Wrap a closure as a callable with the given name and declared arity.
    pub fn new<F>(name: &str, arity: usize, func: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> EvalResult + Send + Sync + 'static,
    {
        let func: Arc<NativeFn> = Arc::new(func);
        FunctionValue {
            name: Heap::from_arc(Arc::from(name)),
            arity,
            func: Heap::from_arc(func),
            prototype: None,
            source: None,
        }
    }

    /// Attach the object that instances of this constructor inherit from.
    #[must_use]
    pub fn with_prototype(mut self, prototype: ObjectRef) -> Self {
        self.prototype = Some(prototype);
        self
    }

    /// Attach source text, used when rendering predicates back to code.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(Heap::from_arc(Arc::from(source)));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter count.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn prototype(&self) -> Option<&ObjectRef> {
        self.prototype.as_ref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Invoke with an explicit receiver.
    #[inline]
    pub fn call(&self, this: &Value, args: &[Value]) -> EvalResult {
        (*self.func)(this, args)
    }

    /// Whether both values wrap the same closure.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Heap::ptr_eq(&a.func, &b.func)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &&*self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
