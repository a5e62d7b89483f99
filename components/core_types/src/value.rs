//! Dynamic value representation.
//!
//! This module provides the core `Value` enum that member tables, instance
//! fields and parameter maps are built from.

use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::sync::Arc;

use crate::{ClassError, ClassResult, HostObject, NativeFunction, ObjectHandle, PlainObject, PrimitiveType};

/// Represents any value a member, field or parameter can hold.
///
/// Primitive values are stored inline, while objects are shared handles.
///
/// # Examples
///
/// ```
/// use core_types::{PrimitiveType, Value};
///
/// let undefined = Value::Undefined;
/// let number = Value::from(42);
/// let text = Value::from("bunny.png");
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(number.type_of(), PrimitiveType::Number);
/// assert_eq!(text.type_of(), PrimitiveType::String);
/// ```
#[derive(Clone)]
pub enum Value {
    /// undefined
    Undefined,
    /// null
    Null,
    /// Boolean (true or false)
    Boolean(bool),
    /// IEEE 754 double-precision floating point
    Number(f64),
    /// Arbitrary precision integer
    BigInt(BigInt),
    /// String value
    String(std::string::String),
    /// Native function
    Function(NativeFunction),
    /// Object handle (plain objects, classes, instances)
    Object(ObjectHandle),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Function(func) => f.debug_tuple("Function").field(&func.name()).finish(),
            Value::Object(obj) => f.debug_tuple("Object").field(&obj.display()).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            _ => false,
        }
    }
}

impl Value {
    /// Create a plain object value from key/value pairs
    pub fn object<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Arc::new(PlainObject::from_pairs(pairs)))
    }

    /// Create an empty plain object value
    pub fn empty_object() -> Self {
        Value::Object(Arc::new(PlainObject::new()))
    }

    /// Create a function value
    pub fn function<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> ClassResult<Value> + Send + Sync + 'static,
    {
        Value::Function(NativeFunction::new(name, func))
    }

    /// Returns whether this value is truthy.
    ///
    /// The falsy values are undefined, null, false, 0, NaN, 0n and the
    /// empty string. All objects and functions are truthy.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Number(f64::NAN).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::empty_object().is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::BigInt(n) => !n.is_zero(),
            Value::String(s) => !s.is_empty(),
            Value::Function(_) => true,
            Value::Object(_) => true,
        }
    }

    /// Returns the reflected type of this value.
    ///
    /// - undefined → "undefined"
    /// - null → "object" (historical quirk)
    /// - number, including NaN → "number"
    /// - functions and classes → "function"
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::{PrimitiveType, Value};
    ///
    /// assert_eq!(Value::Null.type_of(), PrimitiveType::Object);
    /// assert_eq!(Value::Number(f64::NAN).type_of(), PrimitiveType::Number);
    /// assert_eq!(Value::Boolean(true).type_of(), PrimitiveType::Boolean);
    /// ```
    pub fn type_of(&self) -> PrimitiveType {
        match self {
            Value::Undefined => PrimitiveType::Undefined,
            Value::Null => PrimitiveType::Object,
            Value::Boolean(_) => PrimitiveType::Boolean,
            Value::Number(_) => PrimitiveType::Number,
            Value::BigInt(_) => PrimitiveType::BigInt,
            Value::String(_) => PrimitiveType::String,
            Value::Function(_) => PrimitiveType::Function,
            Value::Object(obj) => obj.type_of(),
        }
    }

    /// Returns the name of the constructor kind of this value.
    ///
    /// `None` for undefined and null, which have no constructor.
    pub fn constructor_name(&self) -> Option<String> {
        match self {
            Value::Undefined | Value::Null => None,
            Value::Boolean(_) => Some("Boolean".to_string()),
            Value::Number(_) => Some("Number".to_string()),
            Value::BigInt(_) => Some("BigInt".to_string()),
            Value::String(_) => Some("String".to_string()),
            Value::Function(_) => Some("Function".to_string()),
            Value::Object(obj) => Some(obj.constructor_name()),
        }
    }

    /// Whether this is the number NaN
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Whether this is undefined or null
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the object handle
    pub fn as_object(&self) -> Option<&ObjectHandle> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Read a property. Primitives have no properties and read undefined.
    pub fn get(&self, key: &str) -> Value {
        match self {
            Value::Object(obj) => obj.get(key),
            _ => Value::Undefined,
        }
    }

    /// Write a property on an object value
    pub fn set(&self, key: &str, value: Value) -> ClassResult<()> {
        match self {
            Value::Object(obj) => obj.set(key, value),
            other => Err(ClassError::NotAnObject {
                key: key.to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// Own enumerable keys; primitives have none
    pub fn own_keys(&self) -> Vec<std::string::String> {
        match self {
            Value::Object(obj) => obj.own_keys(),
            _ => Vec::new(),
        }
    }

    /// Call this value with a receiver and arguments
    pub fn call(&self, this: &Value, args: &[Value]) -> ClassResult<Value> {
        match self {
            Value::Function(func) => func.call(this, args),
            Value::Object(obj) if obj.type_of() == PrimitiveType::Function => obj.call(this, args),
            other => Err(ClassError::NotCallable(other.to_string())),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<std::string::String> for Value {
    fn from(s: std::string::String) -> Self {
        Value::String(s)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<NativeFunction> for Value {
    fn from(f: NativeFunction) -> Self {
        Value::Function(f)
    }
}

impl<T: HostObject + 'static> From<Arc<T>> for Value {
    fn from(obj: Arc<T>) -> Self {
        Value::Object(obj)
    }
}


/// String conversion.
///
/// - undefined → "undefined"
/// - null → "null"
/// - boolean → "true" or "false"
/// - number → decimal representation
/// - object → the object's own display hook
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Boolean(true).to_string(), "true");
/// assert_eq!(Value::Number(42.0).to_string(), "42");
/// assert_eq!(Value::Number(1e21).to_string(), "1e+21");
/// assert_eq!(Value::empty_object().to_string(), "[object Object]");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Function(func) => write!(f, "function {}() {{ [native code] }}", func.name()),
            Value::Object(obj) => write!(f, "{}", obj.display()),
        }
    }
}

/// Number to string the way the host prints numbers.
///
/// Decimal notation in [1e-6, 1e21), exponential outside it; always the
/// shortest digits that round-trip.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Decimal point sits after `point` digits
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        format!("{}.{}", &digits[..point as usize], &digits[point as usize..])
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let (head, tail) = digits.split_at(1);
        let fraction = if tail.is_empty() { String::new() } else { format!(".{}", tail) };
        format!("{}{}e{:+}", head, fraction, point - 1)
    };
    format!("{}{}", sign, body)
}
