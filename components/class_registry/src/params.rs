//! Required-parameter templates for stricter construction.

use core_types::{ClassError, ClassResult, Value};

use crate::Class;

/// Required `name → constructor kind` pairs a parameter mapping must satisfy.
///
/// Constructor kinds are the names reported by
/// [`Value::constructor_name`]: `"Number"`, `"String"`, `"Boolean"`,
/// `"Function"`, `"Object"`, or a class name for instances.
///
/// # Examples
///
/// ```
/// use class_registry::ParamTemplate;
/// use core_types::Value;
///
/// let template = ParamTemplate::new().require("x", "Number");
///
/// assert!(template.validate(&Value::object([("x", Value::from(1))])).is_ok());
/// assert!(template.validate(&Value::object([("x", Value::from("1"))])).is_err());
/// assert!(template.validate(&Value::empty_object()).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamTemplate {
    required: Vec<(String, String)>,
}

impl ParamTemplate {
    /// Create an empty template
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `name` with constructor kind `constructor`
    pub fn require(mut self, name: impl Into<String>, constructor: impl Into<String>) -> Self {
        self.required.push((name.into(), constructor.into()));
        self
    }

    /// Require `name` to be an instance of `class`
    pub fn require_instance_of(self, name: impl Into<String>, class: &Class) -> Self {
        self.require(name, class.name())
    }

    /// Number of required parameters
    pub fn len(&self) -> usize {
        self.required.len()
    }

    /// Whether nothing is required
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    /// Validate a parameter mapping.
    ///
    /// Checks run in declaration order and stop at the first failure.
    /// Undefined and null count as absent.
    pub fn validate(&self, params: &Value) -> ClassResult<()> {
        for (name, expected) in &self.required {
            match params.get(name).constructor_name() {
                None => {
                    return Err(ClassError::MissingRequiredParameter { name: name.clone() });
                }
                Some(actual) if actual != *expected => {
                    return Err(ClassError::WrongParameterType {
                        name: name.clone(),
                        expected: expected.clone(),
                        actual,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
