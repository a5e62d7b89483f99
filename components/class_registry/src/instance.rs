//! Instances produced by constructing a class.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use core_types::{ClassResult, HostObject, Value};
use parking_lot::RwLock;

use crate::typed::TypedSlot;
use crate::Class;

/// One object produced by a [`Class`], carrying a unique id.
///
/// Reads fall back from the instance's own fields to the class prototype;
/// writes to typed properties are checked.
#[derive(Clone)]
pub struct Instance {
    inner: Arc<InstanceInner>,
}

pub(crate) struct InstanceInner {
    class: Class,
    id: String,
    fields: RwLock<InstanceFields>,
}

/// Own fields of an instance in first-assignment order.
#[derive(Debug, Default)]
pub(crate) struct InstanceFields {
    entries: Vec<(String, Field)>,
}

#[derive(Debug)]
enum Field {
    Plain(Value),
    Typed(TypedSlot),
}

impl InstanceFields {
    /// Write `key`, routing typed properties through their slot.
    pub(crate) fn assign(&mut self, class: &Class, key: &str, value: Value) -> ClassResult<()> {
        if let Some((_, field)) = self.entries.iter_mut().find(|(k, _)| k == key) {
            return match field {
                Field::Plain(current) => {
                    *current = value;
                    Ok(())
                }
                Field::Typed(slot) => slot.set(value),
            };
        }

        let field = match class.typed_property(key) {
            Some(property) => {
                let mut slot = TypedSlot::new(property);
                slot.set(value)?;
                Field::Typed(slot)
            }
            None => Field::Plain(value),
        };
        self.entries.push((key.to_string(), field));
        Ok(())
    }

    fn read(&self, key: &str) -> Option<Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, field)| match field {
                Field::Plain(value) => Some(value.clone()),
                Field::Typed(slot) => slot.get().cloned(),
            })
    }

    fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }
}

pub(crate) fn instance_label(prefix: &str, id: &str) -> String {
    format!("<{}.{} instance>", prefix, id)
}

impl Instance {
    pub(crate) fn new(class: Class, id: String, fields: InstanceFields) -> Self {
        Instance {
            inner: Arc::new(InstanceInner {
                class,
                id,
                fields: RwLock::new(fields),
            }),
        }
    }

    /// The identity string `"<ClassName>_<ordinal>"`
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// The class this instance was constructed from
    pub fn class(&self) -> &Class {
        &self.inner.class
    }

    /// Read a property: own field first, then the prototype.
    pub fn get(&self, key: &str) -> Value {
        self.inner.lookup(key)
    }

    /// Write an own field.
    ///
    /// Fails with `TypeMismatch` when `key` is a typed property and the
    /// value does not satisfy it; the previous value is kept.
    pub fn set(&self, key: &str, value: Value) -> ClassResult<()> {
        self.inner.assign(key, value)
    }

    /// Names of own fields in first-assignment order
    pub fn own_keys(&self) -> Vec<String> {
        self.inner.fields.read().keys()
    }

    /// Call a member function with this instance as receiver
    pub fn call(&self, method: &str, args: &[Value]) -> ClassResult<Value> {
        self.get(method).call(&self.to_value(), args)
    }

    /// Invoke the prototype's `getId`
    pub fn get_id(&self) -> ClassResult<Value> {
        self.call("getId", &[])
    }

    /// Invoke the prototype's `toString`, e.g. `<Game.Point_1 instance>`
    pub fn to_display_string(&self) -> ClassResult<String> {
        Ok(self.call("toString", &[])?.to_string())
    }

    /// This instance as a value
    pub fn to_value(&self) -> Value {
        Value::Object(self.inner.clone())
    }

    /// Recover an instance from a value produced by [`Instance::to_value`]
    pub fn from_value(value: &Value) -> Option<Instance> {
        let inner = value.as_object()?.clone().into_any().downcast::<InstanceInner>().ok()?;
        Some(Instance { inner })
    }
}

impl InstanceInner {
    fn lookup(&self, key: &str) -> Value {
        let own = self.fields.read().read(key);
        own.or_else(|| self.class.prototype_member(key))
            .unwrap_or(Value::Undefined)
    }

    fn assign(&self, key: &str, value: Value) -> ClassResult<()> {
        self.fields.write().assign(&self.class, key, value)
    }
}

impl HostObject for InstanceInner {
    fn get(&self, key: &str) -> Value {
        self.lookup(key)
    }

    fn set(&self, key: &str, value: Value) -> ClassResult<()> {
        self.assign(key, value)
    }

    fn own_keys(&self) -> Vec<String> {
        self.fields.read().keys()
    }

    fn constructor_name(&self) -> String {
        self.class.name().to_string()
    }

    fn display(&self) -> String {
        instance_label(self.class.prefix(), &self.id)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.display())
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("id", &self.inner.id)
            .field("fields", &self.own_keys())
            .finish()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
