//! Shared mutable containers: plain objects and arrays.
//!
//! Both sit behind a `Heap` handle and an internal lock, so a predicate that
//! holds a reference observes (and may perform) mutations made elsewhere.

use indexmap::IndexMap;
use parking_lot::RwLock;

use super::{Heap, Value};

/// Handle to a shared object.
pub type ObjectRef = Heap<Object>;

/// Handle to a shared array.
pub type ArrayRef = Heap<Array>;

/// Object with insertion-ordered own properties and an optional prototype.
#[derive(Debug)]
pub struct Object {
    properties: RwLock<IndexMap<String, Value>>,
    prototype: Option<ObjectRef>,
}

impl Object {
    pub(super) fn new(properties: IndexMap<String, Value>, prototype: Option<ObjectRef>) -> Self {
        Object {
            properties: RwLock::new(properties),
            prototype,
        }
    }

    /// The prototype this object was created with.
    pub fn prototype(&self) -> Option<&ObjectRef> {
        self.prototype.as_ref()
    }

    /// Own property lookup; does not consult the prototype chain.
    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.properties.read().get(key).cloned()
    }

    /// Property lookup along the prototype chain.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.get_own(key) {
            return Some(value);
        }
        let mut proto = self.prototype.as_ref();
        while let Some(object) = proto {
            if let Some(value) = object.get_own(key) {
                return Some(value);
            }
            proto = object.prototype.as_ref();
        }
        None
    }

    /// Whether `key` resolves anywhere on the prototype chain.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set (or overwrite) an own property. Insertion order is preserved for
    /// existing keys.
    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.properties.write().insert(key.into(), value);
    }

    /// Own property keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.properties.read().keys().cloned().collect()
    }

    /// Snapshot of own properties in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.properties
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Whether this object appears on `other`'s prototype chain.
    pub fn is_prototype_of(this: &ObjectRef, other: &Object) -> bool {
        let mut proto = other.prototype.as_ref();
        while let Some(object) = proto {
            if Heap::ptr_eq(object, this) {
                return true;
            }
            proto = object.prototype.as_ref();
        }
        false
    }
}

/// Growable array of values.
#[derive(Debug, Default)]
pub struct Array {
    items: RwLock<Vec<Value>>,
}

impl Array {
    pub(super) fn new(items: Vec<Value>) -> Self {
        Array {
            items: RwLock::new(items),
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.items.read().get(index).cloned()
    }

    /// Store `value` at `index`, growing the array with `undefined` as needed.
    pub fn set(&self, index: usize, value: Value) {
        let mut items = self.items.write();
        if index >= items.len() {
            items.resize(index + 1, Value::Undefined);
        }
        items[index] = value;
    }

    /// Truncate or extend (with `undefined`) to exactly `len` elements.
    pub fn set_len(&self, len: usize) {
        self.items.write().resize(len, Value::Undefined);
    }

    pub fn push(&self, value: Value) {
        self.items.write().push(value);
    }

    /// Snapshot of the elements.
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.read().clone()
    }
}
