//! Scope configuration.

/// Settings fixed when a scope is initialized.
///
/// # Examples
///
/// ```
/// use class_registry::LibraryConfig;
///
/// assert!(LibraryConfig::default().type_checking);
/// assert!(!LibraryConfig::unchecked().type_checking);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Whether `"name:type"` members are enforced on every write.
    ///
    /// When off, typed members are installed as plain prototype values and
    /// no write is ever checked.
    pub type_checking: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        LibraryConfig {
            type_checking: true,
        }
    }
}

impl LibraryConfig {
    /// Configuration with type checking disabled
    pub fn unchecked() -> Self {
        LibraryConfig {
            type_checking: false,
        }
    }

    /// Set whether type checking is enabled
    pub fn with_type_checking(mut self, enabled: bool) -> Self {
        self.type_checking = enabled;
        self
    }

    pub(crate) fn from_disable_flag(disable_type_checking: bool) -> Self {
        Self::default().with_type_checking(!disable_type_checking)
    }
}
