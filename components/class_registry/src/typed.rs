//! Typed property enforcement.
//!
//! A [`TypedProperty`] is a declared `(name, type)` pair on a class. Values
//! written to it live in a [`TypedSlot`], whose setter is the only way in.

use std::sync::Arc;

use core_types::{ClassError, ClassResult, PrimitiveType, Value};

/// A primitive-type constraint on one property of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedProperty {
    name: String,
    ty: PrimitiveType,
}

impl TypedProperty {
    /// Declare `name` as holding values of type `ty`
    pub fn new(name: impl Into<String>, ty: PrimitiveType) -> Self {
        TypedProperty {
            name: name.into(),
            ty,
        }
    }

    /// Property name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type
    pub fn ty(&self) -> PrimitiveType {
        self.ty
    }

    /// Whether `value` satisfies the declaration.
    ///
    /// The reflected type must match exactly, and NaN is rejected for
    /// `number` even though it reflects as a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use class_registry::TypedProperty;
    /// use core_types::{PrimitiveType, Value};
    ///
    /// let x = TypedProperty::new("x", PrimitiveType::Number);
    /// assert!(x.accepts(&Value::from(5)));
    /// assert!(!x.accepts(&Value::from("5")));
    /// assert!(!x.accepts(&Value::Number(f64::NAN)));
    /// ```
    pub fn accepts(&self, value: &Value) -> bool {
        value.type_of() == self.ty && !(self.ty == PrimitiveType::Number && value.is_nan())
    }

    /// Check `value`, failing with [`ClassError::TypeMismatch`]
    pub fn check(&self, value: &Value) -> ClassResult<()> {
        if self.accepts(value) {
            return Ok(());
        }
        Err(ClassError::TypeMismatch {
            property: self.name.clone(),
            expected: self.ty,
            value: value.to_string(),
            actual: value.type_of(),
        })
    }
}

/// Storage for one typed property.
///
/// `get` returns `None` until a value has been accepted by `set`.
#[derive(Debug, Clone)]
pub struct TypedSlot {
    property: Arc<TypedProperty>,
    value: Option<Value>,
}

impl TypedSlot {
    /// Create an empty slot
    pub fn new(property: Arc<TypedProperty>) -> Self {
        TypedSlot {
            property,
            value: None,
        }
    }

    /// The declaration this slot enforces
    pub fn property(&self) -> &Arc<TypedProperty> {
        &self.property
    }

    /// Store `value` if it satisfies the declaration.
    ///
    /// A rejected write leaves the previous value in place.
    pub fn set(&mut self, value: Value) -> ClassResult<()> {
        self.property.check(&value)?;
        self.value = Some(value);
        Ok(())
    }

    /// The stored value
    pub fn get(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}
