//! Class Registry - class definitions over a dynamic object model
//!
//! This component provides:
//! - Named scopes, one per prefix, created through [`ClassLibrary`]
//! - `define_class` from an ordered member mapping
//! - Typed properties declared with `"name:type"` keys and checked on write
//! - Identity-tracked instances (`"<Name>_<ordinal>"`)
//! - Static members and nested namespaces
//!
//! # Examples
//!
//! ```
//! use class_registry::{ClassLibrary, Members};
//! use core_types::Value;
//!
//! let library = ClassLibrary::new();
//! let scope = library.initialize("MyPrefix", false);
//!
//! scope
//!     .define_class("Math", Members::new())
//!     .unwrap()
//!     .add_static(Members::new().method("square", |_this, args| {
//!         let n = args.first().and_then(Value::as_number).unwrap_or(f64::NAN);
//!         Ok(Value::from(n * n))
//!     }));
//!
//! let math = scope.class("Math").unwrap();
//! assert_eq!(math.call_static("square", &[Value::from(4)]).unwrap(), Value::from(16));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod class;
mod config;
mod instance;
mod library;
mod members;
mod params;
mod scope;
mod typed;

pub use class::Class;
pub use config::LibraryConfig;
pub use instance::Instance;
pub use library::{initialize, ClassLibrary};
pub use members::{MemberDecl, Members};
pub use params::ParamTemplate;
pub use scope::{Namespace, Scope, ScopeEntry};
pub use typed::{TypedProperty, TypedSlot};
