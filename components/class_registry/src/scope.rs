//! Scopes and the namespace tree.
//!
//! A [`Scope`] is the root container for one prefix. Classes and nested
//! [`Namespace`] containers hang off it by name.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use core_types::{ClassError, ClassResult, Value};
use log::debug;
use parking_lot::RwLock;

use crate::{Class, LibraryConfig, Members};

#[derive(Debug)]
pub(crate) struct ScopeSettings {
    pub(crate) prefix: String,
    pub(crate) config: LibraryConfig,
}

/// Something stored in a namespace.
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeEntry {
    /// A class defined with `define_class`
    Class(Class),
    /// A container created by `define_namespace`
    Namespace(Namespace),
}

impl ScopeEntry {
    /// The class, if this entry is one
    pub fn as_class(&self) -> Option<&Class> {
        match self {
            ScopeEntry::Class(class) => Some(class),
            ScopeEntry::Namespace(_) => None,
        }
    }

    /// The namespace, if this entry is one
    pub fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            ScopeEntry::Namespace(namespace) => Some(namespace),
            ScopeEntry::Class(_) => None,
        }
    }
}

/// A named container of classes and nested namespaces.
///
/// Cloning shares the container.
#[derive(Clone)]
pub struct Namespace {
    path: String,
    settings: Arc<ScopeSettings>,
    entries: Arc<RwLock<HashMap<String, ScopeEntry>>>,
}

impl Namespace {
    fn new(path: String, settings: Arc<ScopeSettings>) -> Self {
        Namespace {
            path,
            settings,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Dotted path from the scope root; empty for the root itself
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Define a class in this namespace.
    ///
    /// Re-defining an existing name replaces the entry; nothing is merged.
    pub fn define_class(&self, name: &str, members: Members) -> ClassResult<Class> {
        let class = Class::define(&self.settings, name, &members)?;
        let replaced = self
            .entries
            .write()
            .insert(name.to_string(), ScopeEntry::Class(class.clone()));
        if replaced.is_some() {
            debug!("replaced {} in {}", name, self.display_path());
        }
        Ok(class)
    }

    /// Look up a direct entry
    pub fn get(&self, name: &str) -> Option<ScopeEntry> {
        self.entries.read().get(name).cloned()
    }

    /// Look up a direct class entry
    pub fn class(&self, name: &str) -> Option<Class> {
        self.get(name).and_then(|entry| entry.as_class().cloned())
    }

    /// Look up a direct namespace entry
    pub fn namespace(&self, name: &str) -> Option<Namespace> {
        self.get(name).and_then(|entry| entry.as_namespace().cloned())
    }

    /// Entry names, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of direct entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the namespace has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Get the child `segment`, creating a namespace when absent.
    ///
    /// A class entry is kept as is; the path continues into its statics.
    fn child_or_create(&self, segment: &str) -> ClassResult<PathNode> {
        let mut entries = self.entries.write();
        match entries.get(segment) {
            Some(ScopeEntry::Namespace(existing)) => Ok(PathNode::Namespace(existing.clone())),
            Some(ScopeEntry::Class(class)) => Ok(PathNode::Value(class.to_value())),
            None => {
                let child = Namespace::new(self.child_path(segment), self.settings.clone());
                entries.insert(segment.to_string(), ScopeEntry::Namespace(child.clone()));
                debug!("created namespace {}.{}", self.settings.prefix, child.path);
                Ok(PathNode::Namespace(child))
            }
        }
    }

    fn child_path(&self, segment: &str) -> String {
        if self.path.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", self.path, segment)
        }
    }

    fn display_path(&self) -> String {
        if self.path.is_empty() {
            self.settings.prefix.clone()
        } else {
            format!("{}.{}", self.settings.prefix, self.path)
        }
    }
}

/// Position reached while walking a namespace path.
enum PathNode {
    Namespace(Namespace),
    /// A class or a plain object hanging off one
    Value(Value),
}

impl PathNode {
    fn child_or_create(&self, segment: &str) -> ClassResult<PathNode> {
        match self {
            PathNode::Namespace(namespace) => namespace.child_or_create(segment),
            PathNode::Value(value) => {
                let existing = value.get(segment);
                if existing != Value::Undefined {
                    return Ok(PathNode::Value(existing));
                }
                let child = Value::empty_object();
                value.set(segment, child.clone())?;
                Ok(PathNode::Value(child))
            }
        }
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("path", &self.display_path())
            .field("entries", &self.keys())
            .finish()
    }
}

impl PartialEq for Namespace {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

/// The root container for one prefix.
///
/// # Examples
///
/// ```
/// use class_registry::{initialize, Members};
///
/// let scope = initialize("MyPrefix", false);
/// scope.define_namespace("a.b.c").unwrap();
/// scope.define_namespace("a.b.d").unwrap();
///
/// let b = scope.namespace("a.b").unwrap();
/// assert_eq!(b.keys(), vec!["c", "d"]);
///
/// scope.define_class("Math", Members::new()).unwrap();
/// assert!(scope.class("Math").is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Scope {
    root: Namespace,
}

impl Scope {
    /// Create an empty scope
    pub fn new(prefix: impl Into<String>, config: LibraryConfig) -> Self {
        let settings = Arc::new(ScopeSettings {
            prefix: prefix.into(),
            config,
        });
        Scope {
            root: Namespace::new(String::new(), settings),
        }
    }

    /// The scope prefix
    pub fn prefix(&self) -> &str {
        &self.root.settings.prefix
    }

    /// Configuration fixed at initialization
    pub fn config(&self) -> LibraryConfig {
        self.root.settings.config
    }

    /// The root namespace
    pub fn root(&self) -> &Namespace {
        &self.root
    }

    /// Define a class at the root of the scope
    pub fn define_class(&self, name: &str, members: Members) -> ClassResult<Class> {
        self.root.define_class(name, members)
    }

    /// Build the namespace chain for a dotted path.
    ///
    /// Missing segments are created as empty containers; existing ones are
    /// left untouched, so repeating a path is a no-op. Past a class the
    /// path continues through its statics, missing segments becoming empty
    /// objects. Walking onto a primitive static fails with `NotAnObject`.
    pub fn define_namespace(&self, path: &str) -> ClassResult<()> {
        let segments = split_path(path)?;
        let mut current = PathNode::Namespace(self.root.clone());
        for segment in segments {
            current = current.child_or_create(segment)?;
        }
        Ok(())
    }

    /// Resolve a dotted path to any entry
    pub fn lookup(&self, path: &str) -> Option<ScopeEntry> {
        let segments = split_path(path).ok()?;
        let (last, parents) = segments.split_last()?;
        let mut current = self.root.clone();
        for segment in parents {
            current = current.namespace(segment)?;
        }
        current.get(last)
    }

    /// Resolve a dotted path to a namespace
    pub fn namespace(&self, path: &str) -> Option<Namespace> {
        self.lookup(path).and_then(|entry| entry.as_namespace().cloned())
    }

    /// Resolve a dotted path to a class
    pub fn class(&self, path: &str) -> Option<Class> {
        self.lookup(path).and_then(|entry| entry.as_class().cloned())
    }
}

fn split_path(path: &str) -> ClassResult<Vec<&str>> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(ClassError::InvalidNamespacePath(path.to_string()));
    }
    Ok(segments)
}
