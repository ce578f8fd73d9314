use std::{fmt, rc::Rc};

use tracing::trace;

use crate::{
    ast::MethodDeclaration,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Signature of a host method implementation.
///
/// A host method receives the evaluated arguments and the line of the call
/// for error reporting.
pub type HostFn = Rc<dyn Fn(&[Value], usize) -> EvalResult<Value>>;

/// What runs when a method is invoked.
#[derive(Clone)]
pub enum MethodBody {
    /// A declaration from the interpreted program.
    User(Rc<MethodDeclaration>),
    /// A Rust implementation from the host library.
    Host(HostFn),
}

/// A callable method value.
///
/// `closure` is the scope the method was declared in; every invocation runs
/// in a fresh child of it, never in the caller's scope.
pub struct Method {
    name:     String,
    params:   Vec<String>,
    variadic: bool,
    closure:  Rc<Environment>,
    body:     MethodBody,
}

impl Method {
    /// Wraps a declaration, closing over its declaring scope.
    #[must_use]
    pub fn user(declaration: Rc<MethodDeclaration>, closure: Rc<Environment>) -> Self {
        Self { name: declaration.name.clone(),
               params: declaration.params.iter().map(|p| p.name.clone()).collect(),
               variadic: false,
               closure,
               body: MethodBody::User(declaration) }
    }

    /// Wraps a host implementation.
    ///
    /// A variadic method skips the argument count check; its named
    /// parameters bind to the leading arguments.
    #[must_use]
    pub fn host(name: impl Into<String>,
                params: &[&str],
                variadic: bool,
                closure: Rc<Environment>,
                func: HostFn)
                -> Self {
        Self { name: name.into(),
               params: params.iter().map(ToString::to_string).collect(),
               variadic,
               closure,
               body: MethodBody::Host(func) }
    }

    /// The method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declaration line of a user method; host methods report `0`.
    #[must_use]
    pub fn line(&self) -> usize {
        match &self.body {
            MethodBody::User(declaration) => declaration.line,
            MethodBody::Host(_) => 0,
        }
    }

    /// Whether this method was declared in the interpreted program.
    #[must_use]
    pub const fn is_user_defined(&self) -> bool {
        matches!(self.body, MethodBody::User(_))
    }

    /// Invokes the method.
    ///
    /// The argument count is validated before anything else happens. Each
    /// parameter is then bound in a new child of the closure scope. A user
    /// method runs its body there and yields `null`; a host method returns
    /// whatever its implementation produces.
    pub fn invoke(&self, context: &Context, args: Vec<Value>, line: usize) -> EvalResult<Value> {
        if !self.variadic && args.len() != self.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: self.name.clone(),
                                                             expected: self.params.len(),
                                                             found: args.len(),
                                                             line });
        }

        let frame = Environment::child(&self.closure);
        for (param, arg) in self.params.iter().zip(&args) {
            frame.set(param.as_str(), arg.clone());
        }

        match &self.body {
            MethodBody::User(declaration) => {
                trace!(method = %self.name, args = args.len(), "invoking user method");
                context.eval_block(&declaration.body, &frame)?;
                Ok(Value::Null)
            },
            MethodBody::Host(func) => {
                trace!(method = %self.name, args = args.len(), "invoking host method");
                func(&args, line)
            },
        }
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
         .field("name", &self.name)
         .field("params", &self.params)
         .field("variadic", &self.variadic)
         .field("user_defined", &self.is_user_defined())
         .finish_non_exhaustive()
    }
}
