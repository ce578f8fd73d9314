use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{ClassDeclaration, Expr, ImportSegment},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::{class::Class, core::Value},
    },
};

/// The single argument passed to the entry point method.
pub const ENTRY_ARGUMENT: &str = "hello world";

impl Context {
    /// Evaluates an import.
    ///
    /// The path is resolved from the global scope, one package at a time.
    /// A named final segment binds that value in the global scope under its
    /// own name; a trailing `*` binds every child of the package reached so
    /// far. Imports never bind into a nested scope.
    pub(crate) fn eval_import(&self, path: &[ImportSegment], line: usize) -> EvalResult<()> {
        let mut scope = Rc::clone(self.globals());
        let mut resolved = Vec::new();

        for (index, segment) in path.iter().enumerate() {
            let name = match segment {
                ImportSegment::Wildcard => {
                    for key in scope.all_keys() {
                        if let Some(value) = scope.get(&key) {
                            self.globals().set(key, value);
                        }
                    }
                    debug!(package = %resolved.join("."), "imported package members");
                    return Ok(());
                },
                ImportSegment::Name(name) => name,
            };

            let value = scope.get(name)
                             .ok_or_else(|| Self::import_error(path, name, line))?;
            resolved.push(name.as_str());

            if index + 1 == path.len() {
                debug!(path = %resolved.join("."), "imported {}", value.kind());
                self.globals().set(name.as_str(), value);
                return Ok(());
            }

            scope = match value {
                Value::Package(package) => Rc::clone(package.members()),
                _ => return Err(Self::import_error(path, name, line)),
            };
        }

        Ok(())
    }

    fn import_error(path: &[ImportSegment], segment: &str, line: usize) -> RuntimeError {
        let path = path.iter()
                       .map(ToString::to_string)
                       .collect::<Vec<_>>()
                       .join(".");
        RuntimeError::ImportResolution { path,
                                         segment: segment.to_string(),
                                         line }
    }

    /// Binds a user class under its name. Its methods close over `env`.
    pub(crate) fn eval_class_declaration(declaration: &ClassDeclaration, env: &Rc<Environment>) {
        let class = Class::user(declaration, env);
        debug!(class = %declaration.name, methods = declaration.methods.len(), "declared class");
        env.set(declaration.name.as_str(), Value::from(class));
    }

    /// Binds a declared variable to its initializer, or to `null`.
    pub(crate) fn eval_variable_declaration(&self,
                                            name: &str,
                                            value: Option<&Expr>,
                                            env: &Rc<Environment>)
                                            -> EvalResult<()> {
        let value = match value {
            Some(expr) => self.eval(expr, env)?,
            None => Value::Null,
        };
        env.set(name, value);
        Ok(())
    }

    /// Runs the program entry point.
    ///
    /// The bindings of `env` are scanned in name order and the first class
    /// with a static, user-defined `main` method wins. That method is invoked
    /// with [`ENTRY_ARGUMENT`].
    pub(crate) fn eval_entry_point(&self, env: &Rc<Environment>) -> EvalResult<()> {
        for key in env.keys() {
            if let Some(Value::Class(class)) = env.get(&key)
               && let Some(main) = class.entry_point()
            {
                debug!(class = class.name(), "running entry point");
                main.invoke(self, vec![Value::from(ENTRY_ARGUMENT)], main.line())?;
                return Ok(());
            }
        }

        Err(RuntimeError::NoEntryPoint)
    }
}
