use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::ClassDeclaration,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        value::{core::Value, method::Method},
    },
};

/// Member name that yields the originating class of a user-class instance.
pub const CLASS_MEMBER: &str = "__class__";

/// Name of the static method run as the program entry point.
pub const ENTRY_METHOD: &str = "main";

/// Where a class came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    /// Declared in the interpreted program.
    User,
    /// Provided by the host library.
    Host,
}

/// A runtime class.
///
/// Member access on the class resolves statics only. Invoking it constructs
/// an [`Instance`] whose members are a copy of `instance_members`.
pub struct Class {
    name:             String,
    kind:             ClassKind,
    statics:          HashMap<String, Value>,
    instance_members: HashMap<String, Value>,
}

impl Class {
    /// Builds the runtime class for a declaration, partitioning its methods
    /// by their `static` flag. Every method closes over `closure`.
    #[must_use]
    pub fn user(declaration: &ClassDeclaration, closure: &Rc<Environment>) -> Self {
        let mut statics = HashMap::new();
        let mut instance_members = HashMap::new();

        for method in &declaration.methods {
            let value = Value::from(Method::user(Rc::clone(method), Rc::clone(closure)));
            if method.is_static {
                statics.insert(method.name.clone(), value);
            } else {
                instance_members.insert(method.name.clone(), value);
            }
        }

        Self { name: declaration.name.clone(),
               kind: ClassKind::User,
               statics,
               instance_members }
    }

    /// Creates a host class from prepared member tables.
    #[must_use]
    pub fn host(name: impl Into<String>,
                statics: HashMap<String, Value>,
                instance_members: HashMap<String, Value>)
                -> Self {
        Self { name: name.into(),
               kind: ClassKind::Host,
               statics,
               instance_members }
    }

    /// The class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves a static member.
    pub fn get_static(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.statics
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedMember { owner: format!("class {}", self.name),
                                                           name: name.to_string(),
                                                           line })
    }

    /// Creates a new instance of `class`.
    #[must_use]
    pub fn construct(class: &Rc<Self>) -> Value {
        Value::Instance(Rc::new(Instance { class:   Rc::clone(class),
                                           members: class.instance_members.clone(), }))
    }

    /// The static, user-defined `main` method, if the class has one.
    #[must_use]
    pub fn entry_point(&self) -> Option<Rc<Method>> {
        match self.statics.get(ENTRY_METHOD) {
            Some(Value::Method(method)) if method.is_user_defined() => Some(Rc::clone(method)),
            _ => None,
        }
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut statics = self.statics.keys().collect::<Vec<_>>();
        statics.sort_unstable();
        let mut instance_members = self.instance_members.keys().collect::<Vec<_>>();
        instance_members.sort_unstable();

        f.debug_struct("Class")
         .field("name", &self.name)
         .field("kind", &self.kind)
         .field("statics", &statics)
         .field("instance_members", &instance_members)
         .finish()
    }
}

/// An object produced by invoking a [`Class`].
pub struct Instance {
    class:   Rc<Class>,
    members: HashMap<String, Value>,
}

impl Instance {
    /// The class this instance was constructed from.
    #[must_use]
    pub const fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Resolves an instance member.
    ///
    /// Instances of user classes also answer [`CLASS_MEMBER`] with their
    /// class.
    pub fn get_member(&self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(value) = self.members.get(name) {
            return Ok(value.clone());
        }
        if name == CLASS_MEMBER && self.class.kind == ClassKind::User {
            return Ok(Value::Class(Rc::clone(&self.class)));
        }
        Err(RuntimeError::UndefinedMember { owner: format!("{} instance", self.class.name),
                                            name: name.to_string(),
                                            line })
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
         .field("class", &self.class.name)
         .finish_non_exhaustive()
    }
}
