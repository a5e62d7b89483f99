//! Prefix table owned by the embedding application.

use std::collections::HashMap;

use log::debug;
use parking_lot::RwLock;

use crate::{LibraryConfig, Scope};

/// Scopes keyed by prefix.
///
/// Each prefix is independent. Initializing a prefix again replaces its
/// scope; classes defined in the old scope stay usable through handles the
/// caller already holds but are no longer reachable by prefix.
///
/// # Examples
///
/// ```
/// use class_registry::{ClassLibrary, Members};
///
/// let library = ClassLibrary::new();
/// let scope = library.initialize("MyPrefix", false);
/// scope.define_class("TestSprite", Members::new()).unwrap();
///
/// assert!(library.scope("MyPrefix").unwrap().class("TestSprite").is_some());
/// assert!(library.scope("Other").is_none());
/// ```
#[derive(Debug, Default)]
pub struct ClassLibrary {
    scopes: RwLock<HashMap<String, Scope>>,
}

impl ClassLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) the scope for `prefix`
    pub fn initialize(&self, prefix: &str, disable_type_checking: bool) -> Scope {
        self.initialize_with_config(prefix, LibraryConfig::from_disable_flag(disable_type_checking))
    }

    /// Create (or replace) the scope for `prefix` with an explicit config
    pub fn initialize_with_config(&self, prefix: &str, config: LibraryConfig) -> Scope {
        let scope = Scope::new(prefix, config);
        let replaced = self
            .scopes
            .write()
            .insert(prefix.to_string(), scope.clone());
        debug!(
            "initialized scope {} (type checking {}{})",
            prefix,
            if config.type_checking { "on" } else { "off" },
            if replaced.is_some() { ", replaced" } else { "" }
        );
        scope
    }

    /// The current scope for `prefix`
    pub fn scope(&self, prefix: &str) -> Option<Scope> {
        self.scopes.read().get(prefix).cloned()
    }

    /// Initialized prefixes, sorted
    pub fn prefixes(&self) -> Vec<String> {
        let mut prefixes: Vec<String> = self.scopes.read().keys().cloned().collect();
        prefixes.sort();
        prefixes
    }
}

/// Create a standalone scope for `prefix`.
///
/// Callers that pass the scope around themselves need no
/// [`ClassLibrary`].
pub fn initialize(prefix: &str, disable_type_checking: bool) -> Scope {
    Scope::new(prefix, LibraryConfig::from_disable_flag(disable_type_checking))
}
