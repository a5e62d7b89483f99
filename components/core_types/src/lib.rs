//! Core value types and error handling for the class library.
//!
//! This crate provides the dynamic value model that class members,
//! instance fields and constructor parameters are expressed in, along with
//! the error taxonomy shared by every component.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of dynamic values
//! - [`PrimitiveType`] - Result of type reflection, used as a type tag
//! - [`HostObject`] / [`PlainObject`] - Object values
//! - [`NativeFunction`] - Callable member values
//! - [`ClassError`] - Errors with an [`ErrorKind`] projection
//!
//! # Examples
//!
//! ```
//! use core_types::{ClassError, ErrorKind, PrimitiveType, Value};
//!
//! let num = Value::from(42);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_of(), PrimitiveType::Number);
//!
//! let error = ClassError::MissingRequiredParameter { name: "x".to_string() };
//! assert_eq!(error.kind(), ErrorKind::MissingRequiredParameter);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod function;
mod object;
mod primitive;
mod value;

pub use error::{ClassError, ClassResult, ErrorKind};
pub use function::NativeFunction;
pub use object::{HostObject, ObjectHandle, PlainObject};
pub use primitive::PrimitiveType;
pub use value::Value;
