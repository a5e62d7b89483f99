//! Object values and the plain ordered-mapping object.
//!
//! Anything stored behind [`Value::Object`] implements [`HostObject`]. The
//! class registry implements it for classes and instances; [`PlainObject`]
//! is the ordinary key/value mapping used for parameter maps and nested
//! data.

use std::any::Any;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{ClassResult, PrimitiveType, Value};

/// Shared handle to an object value
pub type ObjectHandle = Arc<dyn HostObject>;

/// Behavior every object value provides.
pub trait HostObject: Send + Sync {
    /// Read a property, `Value::Undefined` when absent
    fn get(&self, key: &str) -> Value;

    /// Write a property
    fn set(&self, key: &str, value: Value) -> ClassResult<()>;

    /// Own enumerable keys in enumeration order
    fn own_keys(&self) -> Vec<String>;

    /// Reflected type of the object
    fn type_of(&self) -> PrimitiveType {
        PrimitiveType::Object
    }

    /// Name of the constructor that produced the object
    fn constructor_name(&self) -> String {
        "Object".to_string()
    }

    /// String conversion
    fn display(&self) -> String {
        "[object Object]".to_string()
    }

    /// Invoke the object as a function.
    fn call(&self, _this: &Value, _args: &[Value]) -> ClassResult<Value> {
        Err(crate::ClassError::NotCallable(self.display()))
    }

    /// Upcast for downcasting to the concrete type
    fn as_any(&self) -> &dyn Any;

    /// Upcast an owned handle for downcasting to the concrete type
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// A plain mapping object with insertion-ordered keys.
///
/// Re-assigning an existing key keeps its original position, the same way
/// an object literal enumerates.
///
/// # Examples
///
/// ```
/// use core_types::{PlainObject, Value};
///
/// let params = PlainObject::new();
/// params.insert("x", Value::from(5));
/// params.insert("y", Value::from(10));
///
/// assert_eq!(params.keys(), vec!["x".to_string(), "y".to_string()]);
/// assert_eq!(params.lookup("x"), Some(Value::Number(5.0)));
/// ```
#[derive(Debug, Default)]
pub struct PlainObject {
    entries: RwLock<Vec<(String, Value)>>,
}

impl PlainObject {
    /// Create an empty object
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object from key/value pairs
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let object = Self::new();
        for (key, value) in pairs {
            object.insert(key, value);
        }
        object
    }

    /// Insert or overwrite a key
    pub fn insert(&self, key: impl Into<String>, value: Value) {
        let key = key.into();
        let mut entries = self.entries.write();
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => entries.push((key, value)),
        }
    }

    /// Look up an own key
    pub fn lookup(&self, key: &str) -> Option<Value> {
        self.entries
            .read()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    /// Own keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().iter().map(|(k, _)| k.clone()).collect()
    }

    /// Snapshot of all entries in insertion order
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.entries.read().clone()
    }

    /// Number of own keys
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the object has no own keys
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl HostObject for PlainObject {
    fn get(&self, key: &str) -> Value {
        self.lookup(key).unwrap_or(Value::Undefined)
    }

    fn set(&self, key: &str, value: Value) -> ClassResult<()> {
        self.insert(key, value);
        Ok(())
    }

    fn own_keys(&self) -> Vec<String> {
        self.keys()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}
