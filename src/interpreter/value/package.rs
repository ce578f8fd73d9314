use std::{fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::Value},
};

/// A named bundle of child values, such as `java` or `java.util`.
///
/// Children live in their own [`Environment`] so that wildcard imports can
/// enumerate them with the same key listing used for any other scope.
pub struct Package {
    name:    String,
    members: Rc<Environment>,
}

impl Package {
    /// Creates an empty package.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:    name.into(),
               members: Environment::new(), }
    }

    /// Adds or replaces a child.
    #[must_use]
    pub fn with(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.set(name, value.into());
        self
    }

    /// The package's own name (its last path segment).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scope holding the package's children.
    #[must_use]
    pub const fn members(&self) -> &Rc<Environment> {
        &self.members
    }

    /// Looks up a child by name.
    pub fn get_member(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.members
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedMember { owner: format!("package {}", self.name),
                                                           name: name.to_string(),
                                                           line })
    }
}

impl fmt::Debug for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Package")
         .field("name", &self.name)
         .field("members", &self.members.keys())
         .finish()
    }
}
