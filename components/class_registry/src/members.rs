//! Member declarations for class definitions.
//!
//! A member key may carry a type tag using the composite form
//! `"propName:type"`. Keys are resolved once, when the class is defined.

use core_types::{ClassError, ClassResult, NativeFunction, PrimitiveType, Value};

/// Ordered member mapping passed to `define_class` and `add_static`.
///
/// Later entries with the same key replace earlier ones when the table is
/// built, the same way a repeated key in an object literal does.
///
/// # Examples
///
/// ```
/// use class_registry::Members;
/// use core_types::Value;
///
/// let members = Members::new()
///     .with("image", Value::Null)
///     .with("x:number", 0)
///     .with("y:number", 0)
///     .method("area", |_this, _args| Ok(Value::from(0)));
///
/// assert_eq!(members.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Members {
    entries: Vec<(String, Value)>,
}

impl Members {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a function entry named `name`
    pub fn method<F>(self, name: &str, func: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> ClassResult<Value> + Send + Sync + 'static,
    {
        let func = NativeFunction::new(name, func);
        self.with(name, func)
    }

    /// Add an entry in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve every key into a [`MemberDecl`]
    pub fn declarations(&self) -> ClassResult<Vec<MemberDecl>> {
        self.entries
            .iter()
            .map(|(key, value)| MemberDecl::parse(key, value.clone()))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Members {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Members {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// One resolved member: property name, initial value and optional type tag.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDecl {
    /// Property name with any type tag stripped
    pub name: String,
    /// Initial value (the prototype default)
    pub value: Value,
    /// Declared type, when the key carried one
    pub ty: Option<PrimitiveType>,
}

impl MemberDecl {
    /// Resolve a member key.
    ///
    /// Only the first two `:`-separated parts of a key are meaningful; an
    /// empty property name or an unknown type tag is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use class_registry::MemberDecl;
    /// use core_types::{PrimitiveType, Value};
    ///
    /// let decl = MemberDecl::parse("x:number", Value::from(0)).unwrap();
    /// assert_eq!(decl.name, "x");
    /// assert_eq!(decl.ty, Some(PrimitiveType::Number));
    ///
    /// let plain = MemberDecl::parse("image", Value::Null).unwrap();
    /// assert_eq!(plain.ty, None);
    /// ```
    pub fn parse(key: &str, value: Value) -> ClassResult<Self> {
        let mut parts = key.split(':');
        let name = parts.next().unwrap_or_default();
        let ty = match parts.next() {
            Some(tag) => Some(tag.parse::<PrimitiveType>()?),
            None => None,
        };
        if name.is_empty() {
            return Err(ClassError::InvalidMemberKey(key.to_string()));
        }
        Ok(MemberDecl {
            name: name.to_string(),
            value,
            ty,
        })
    }
}
