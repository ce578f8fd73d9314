use std::rc::Rc;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns a handle to the global scope, which is pre-populated
/// with the host library before the program runs. Imports always resolve
/// from and bind into this scope, wherever they appear. Every other
/// statement and expression runs against the environment it is given.
pub struct Context {
    globals: Rc<Environment>,
}

impl Context {
    /// Creates a context around an existing global scope.
    #[must_use]
    pub const fn new(globals: Rc<Environment>) -> Self {
        Self { globals }
    }

    /// The global scope.
    #[must_use]
    pub const fn globals(&self) -> &Rc<Environment> {
        &self.globals
    }

    /// Runs every statement of `program` in the global scope.
    pub fn run(&self, program: &Program) -> EvalResult<()> {
        self.eval_block(&program.statements, &self.globals)
    }

    /// Runs `statements` in order against `env`, stopping at the first
    /// error.
    pub fn eval_block(&self, statements: &[Statement], env: &Rc<Environment>) -> EvalResult<()> {
        for statement in statements {
            self.eval_statement(statement, env)?;
        }
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands and
    /// arguments are always evaluated eagerly and left to right.
    ///
    /// # Example
    /// ```
    /// use kava::{
    ///     interpreter::{
    ///         environment::Environment, evaluator::core::Context, lexer::tokenize,
    ///         parser::core::parse_expression, value::core::Value,
    ///     },
    /// };
    ///
    /// let tokens = tokenize("2 + 3 * 4").unwrap();
    /// let expr = parse_expression(&mut tokens.iter().peekable()).unwrap();
    /// let context = Context::new(Environment::new());
    ///
    /// let value = context.eval(&expr, context.globals()).unwrap();
    /// assert_eq!(value, Value::Number(14.0));
    /// ```
    pub fn eval(&self, expr: &Expr, env: &Rc<Environment>) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.clone()),
            Expr::Variable { name, line } => env.lookup(name, *line),
            Expr::Assignment { target, value, line } => {
                self.eval_assignment(target, value, env, *line)
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Access { parent, member, line } => self.eval_access(parent, member, env, *line),
            Expr::Call { callee, arguments, line } => {
                self.eval_call(callee, arguments, env, *line)
            },
        }
    }

    /// Evaluates a single statement against `env`.
    pub fn eval_statement(&self, statement: &Statement, env: &Rc<Environment>) -> EvalResult<()> {
        match statement {
            Statement::Import { path, line } => self.eval_import(path, *line),
            Statement::Class(declaration) => {
                Self::eval_class_declaration(declaration, env);
                Ok(())
            },
            Statement::Expression { expr, .. } => self.eval(expr, env).map(|_| ()),
            Statement::VariableDeclaration { name, value, .. } => {
                self.eval_variable_declaration(name, value.as_ref(), env)
            },
            Statement::ExecuteEntryPoint => self.eval_entry_point(env),
        }
    }

    /// Evaluates `target = value`.
    ///
    /// Only variable references can be assigned. The target is checked
    /// before the right side runs, and the binding is always written to
    /// `env` itself, shadowing any outer binding of the same name.
    fn eval_assignment(&self,
                       target: &Expr,
                       value: &Expr,
                       env: &Rc<Environment>,
                       line: usize)
                       -> EvalResult<Value> {
        match target {
            Expr::Variable { name, .. } => {
                let value = self.eval(value, env)?;
                env.set(name.as_str(), value.clone());
                Ok(value)
            },
            Expr::Literal { .. }
            | Expr::Assignment { .. }
            | Expr::BinaryOp { .. }
            | Expr::Access { .. }
            | Expr::Call { .. } => Err(RuntimeError::NotAssignable { target: target.to_string(),
                                                                     line }),
        }
    }
}
