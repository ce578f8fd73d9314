use std::{fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            class::{Class, Instance},
            method::Method,
            package::Package,
        },
    },
};

/// Represents a runtime value in the interpreter.
///
/// Reference kinds are shared through `Rc`: binding a class or method in a
/// second scope never copies it.
#[derive(Debug, Clone)]
pub enum Value {
    /// Immutable text.
    String(Rc<str>),
    /// A double-precision number. There is no separate integer type.
    Number(f64),
    /// The absence of a value; also the value of uninitialized variables.
    Null,
    /// A named bundle of child values.
    Package(Rc<Package>),
    /// A user-declared or host-provided class.
    Class(Rc<Class>),
    /// An object constructed from a class.
    Instance(Rc<Instance>),
    /// A user-declared or host-provided method.
    Method(Rc<Method>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v.into())
    }
}

impl From<Method> for Value {
    fn from(v: Method) -> Self {
        Self::Method(Rc::new(v))
    }
}

impl From<Class> for Value {
    fn from(v: Class) -> Self {
        Self::Class(Rc::new(v))
    }
}

impl From<Package> for Value {
    fn from(v: Package) -> Self {
        Self::Package(Rc::new(v))
    }
}

/// Primitives compare by content, reference kinds by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Package(a), Self::Package(b)) => Rc::ptr_eq(a, b),
            (Self::Class(a), Self::Class(b)) => Rc::ptr_eq(a, b),
            (Self::Instance(a), Self::Instance(b)) => Rc::ptr_eq(a, b),
            (Self::Method(a), Self::Method(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    /// Short name of the value's kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Null => "null",
            Self::Package(_) => "package",
            Self::Class(_) => "class",
            Self::Instance(_) => "instance",
            Self::Method(_) => "method",
        }
    }

    /// Reads the member `name`.
    ///
    /// Packages yield children, classes yield statics and instances yield
    /// instance members. Every other kind rejects member access.
    ///
    /// # Example
    /// ```
    /// use kava::{error::RuntimeError, interpreter::value::core::Value};
    ///
    /// let err = Value::Number(1.0).get_member("length", 7).unwrap_err();
    /// assert!(matches!(err, RuntimeError::NotAccessible { kind: "number", line: 7, .. }));
    /// ```
    pub fn get_member(&self, name: &str, line: usize) -> EvalResult<Self> {
        match self {
            Self::Package(package) => package.get_member(name, line),
            Self::Class(class) => class.get_static(name, line),
            Self::Instance(instance) => instance.get_member(name, line),
            Self::String(_) | Self::Number(_) | Self::Null | Self::Method(_) => {
                Err(RuntimeError::NotAccessible { kind: self.kind(),
                                                  name: name.to_string(),
                                                  line })
            },
        }
    }

    /// Invokes the value with already evaluated arguments.
    ///
    /// Methods run; classes construct a new instance. Every other kind
    /// rejects invocation.
    pub fn invoke(&self, context: &Context, args: Vec<Self>, line: usize) -> EvalResult<Self> {
        match self {
            Self::Method(method) => method.invoke(context, args, line),
            Self::Class(class) => Ok(Class::construct(class)),
            Self::String(_)
            | Self::Number(_)
            | Self::Null
            | Self::Package(_)
            | Self::Instance(_) => Err(RuntimeError::NotCallable { kind: self.kind(),
                                                                   line }),
        }
    }

    /// Whether this is a class with a static, user-defined `main` method.
    #[must_use]
    pub fn has_entry_point(&self) -> bool {
        match self {
            Self::Class(class) => class.entry_point().is_some(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Null => f.write_str("null"),
            Self::Package(package) => write!(f, "package {}", package.name()),
            Self::Class(class) => write!(f, "class {}", class.name()),
            Self::Instance(instance) => write!(f, "{} instance", instance.class().name()),
            Self::Method(method) => write!(f, "method {}", method.name()),
        }
    }
}
