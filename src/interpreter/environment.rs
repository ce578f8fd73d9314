use std::{
    cell::RefCell,
    collections::{BTreeSet, HashMap},
    fmt,
    rc::Rc,
};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A lexical scope: a binding table plus an optional enclosing scope.
///
/// Environments are handed around as `Rc<Environment>`. A method value keeps
/// its declaring scope alive through such a handle, and every call frame is a
/// fresh child of that scope, so a scope lives exactly as long as some frame
/// or method still needs it.
///
/// Writes always go to the local table. Assigning to a name that is bound
/// further out therefore shadows it instead of mutating it.
#[derive(Default)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent:   Option<Rc<Self>>,
}

impl Environment {
    /// Creates a root scope with no parent.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates an empty scope whose lookups fall back to `parent`.
    #[must_use]
    pub fn child(parent: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { bindings: RefCell::new(HashMap::new()),
                       parent:   Some(Rc::clone(parent)), })
    }

    /// Resolves `name` here or in the nearest enclosing scope binding it.
    ///
    /// # Example
    /// ```
    /// use kava::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let root = Environment::new();
    /// root.set("x", Value::Number(1.0));
    /// let frame = Environment::child(&root);
    ///
    /// assert_eq!(frame.get("x"), Some(Value::Number(1.0)));
    /// assert_eq!(frame.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.get(name))
    }

    /// Like [`Environment::get`], failing with `UndefinedName` when no scope
    /// in the chain binds `name`.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedName { name: name.to_string(),
                                                         line })
    }

    /// Binds `name` in this scope, replacing any local binding.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Whether `name` is bound in this scope itself.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.bindings.borrow().contains_key(name)
    }

    /// Names bound in this scope, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys = self.bindings.borrow().keys().cloned().collect::<Vec<_>>();
        keys.sort_unstable();
        keys
    }

    /// Every name visible from this scope, sorted and without duplicates.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys = BTreeSet::new();
        let mut scope = Some(self);
        while let Some(current) = scope {
            keys.extend(current.bindings.borrow().keys().cloned());
            scope = current.parent.as_deref();
        }
        keys.into_iter().collect()
    }
}

/// Only names are printed; values may refer back to this scope.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
         .field("keys", &self.keys())
         .field("has_parent", &self.parent.is_some())
         .finish()
    }
}
