//! Primitive type tags produced by type reflection.

use std::fmt;
use std::str::FromStr;

use crate::ClassError;

/// The result of reflecting on a value's type.
///
/// These are the only tags a typed property may declare. Reflection is
/// shallow: every object-like value is `Object` except callables, which are
/// `Function`.
///
/// # Examples
///
/// ```
/// use core_types::PrimitiveType;
///
/// let ty: PrimitiveType = "number".parse().unwrap();
/// assert_eq!(ty, PrimitiveType::Number);
/// assert_eq!(ty.as_str(), "number");
/// assert!("array".parse::<PrimitiveType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// "undefined"
    Undefined,
    /// "object" (includes null)
    Object,
    /// "boolean"
    Boolean,
    /// "number" (includes NaN)
    Number,
    /// "bigint"
    BigInt,
    /// "string"
    String,
    /// "function"
    Function,
}

impl PrimitiveType {
    /// Returns the reflected type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Undefined => "undefined",
            PrimitiveType::Object => "object",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Number => "number",
            PrimitiveType::BigInt => "bigint",
            PrimitiveType::String => "string",
            PrimitiveType::Function => "function",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveType {
    type Err = ClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undefined" => Ok(PrimitiveType::Undefined),
            "object" => Ok(PrimitiveType::Object),
            "boolean" => Ok(PrimitiveType::Boolean),
            "number" => Ok(PrimitiveType::Number),
            "bigint" => Ok(PrimitiveType::BigInt),
            "string" => Ok(PrimitiveType::String),
            "function" => Ok(PrimitiveType::Function),
            other => Err(ClassError::UnknownType(other.to_string())),
        }
    }
}
