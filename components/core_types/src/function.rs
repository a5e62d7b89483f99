//! Native callables stored as member values.

use std::fmt;
use std::sync::Arc;

use crate::{ClassResult, Value};

type NativeFn = dyn Fn(&Value, &[Value]) -> ClassResult<Value> + Send + Sync;

/// A host function value.
///
/// The function receives the receiver (`this`) and the call arguments.
/// Cloning shares the underlying closure; equality is identity.
#[derive(Clone)]
pub struct NativeFunction {
    name: String,
    func: Arc<NativeFn>,
}

impl NativeFunction {
    /// Create a named function
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> ClassResult<Value> + Send + Sync + 'static,
    {
        NativeFunction {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// The name the function was created with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke with the given receiver and arguments
    pub fn call(&self, this: &Value, args: &[Value]) -> ClassResult<Value> {
        (self.func)(this, args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeFunction").field(&self.name).finish()
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}
