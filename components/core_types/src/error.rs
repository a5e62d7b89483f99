//! Error types raised by class definition, instantiation and property writes.
//!
//! Every failure is a hard stop propagated to the caller; nothing here is
//! recovered internally.

use thiserror::Error;

use crate::PrimitiveType;

/// The kind of a [`ClassError`].
///
/// Lets callers branch on the failure category without matching every
/// field of the error payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A typed property was assigned a value of the wrong primitive type
    TypeMismatch,
    /// A required constructor parameter was absent
    MissingRequiredParameter,
    /// A constructor parameter had the wrong constructor kind
    WrongParameterType,
    /// Malformed input to a definition call (names, keys, paths, tags)
    InvalidInput,
    /// Operation applied to a value that does not support it
    Unsupported,
    /// Error raised from inside a user-supplied function
    Thrown,
}

impl ErrorKind {
    /// Get the kind name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::TypeMismatch => "TypeMismatch",
            ErrorKind::MissingRequiredParameter => "MissingRequiredParameter",
            ErrorKind::WrongParameterType => "WrongParameterType",
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::Unsupported => "Unsupported",
            ErrorKind::Thrown => "Thrown",
        }
    }
}

/// An error raised by the class library.
///
/// # Examples
///
/// ```
/// use core_types::{ClassError, ErrorKind, PrimitiveType};
///
/// let error = ClassError::TypeMismatch {
///     property: "x".to_string(),
///     expected: PrimitiveType::Number,
///     value: "5".to_string(),
///     actual: PrimitiveType::String,
/// };
///
/// assert_eq!(error.kind(), ErrorKind::TypeMismatch);
/// assert_eq!(
///     error.to_string(),
///     "Property 'x' should be of type 'number', value is: '5' of type 'string'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassError {
    /// A typed property write failed its type predicate
    #[error("Property '{property}' should be of type '{expected}', value is: '{value}' of type '{actual}'")]
    TypeMismatch {
        /// Property being written
        property: String,
        /// Declared type of the property
        expected: PrimitiveType,
        /// String conversion of the rejected value
        value: String,
        /// Reflected type of the rejected value
        actual: PrimitiveType,
    },

    /// A parameter required by a template was absent
    #[error("missing required parameter '{name}'")]
    MissingRequiredParameter {
        /// Parameter name
        name: String,
    },

    /// A parameter had a different constructor kind than the template expects
    #[error("parameter '{name}' should be a {expected}, got {actual}")]
    WrongParameterType {
        /// Parameter name
        name: String,
        /// Expected constructor name
        expected: String,
        /// Actual constructor name
        actual: String,
    },

    /// Class names must be non-empty
    #[error("class name must not be empty")]
    EmptyClassName,

    /// A member key could not be split into a property name and type tag
    #[error("invalid member key '{0}'")]
    InvalidMemberKey(String),

    /// A type tag that names no primitive type
    #[error("unknown type '{0}'")]
    UnknownType(String),

    /// A namespace path with an empty segment
    #[error("invalid namespace path '{0}'")]
    InvalidNamespacePath(String),

    /// Property access on a primitive value
    #[error("cannot set property '{key}' on {value}")]
    NotAnObject {
        /// Property being written
        key: String,
        /// String conversion of the receiver
        value: String,
    },

    /// Call on something that is not a function
    #[error("{0} is not a function")]
    NotCallable(String),

    /// Raised from inside a member function
    #[error("{0}")]
    Thrown(String),
}

impl ClassError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClassError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ClassError::MissingRequiredParameter { .. } => ErrorKind::MissingRequiredParameter,
            ClassError::WrongParameterType { .. } => ErrorKind::WrongParameterType,
            ClassError::EmptyClassName
            | ClassError::InvalidMemberKey(_)
            | ClassError::UnknownType(_)
            | ClassError::InvalidNamespacePath(_) => ErrorKind::InvalidInput,
            ClassError::NotAnObject { .. } | ClassError::NotCallable(_) => ErrorKind::Unsupported,
            ClassError::Thrown(_) => ErrorKind::Thrown,
        }
    }

    /// Create an error thrown by user code
    pub fn thrown(message: impl Into<String>) -> Self {
        ClassError::Thrown(message.into())
    }
}

/// Result type for class library operations
pub type ClassResult<T> = Result<T, ClassError>;
