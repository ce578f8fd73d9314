use std::rc::Rc;

use crate::{
    ast::Expr,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `parent.member`: the parent first, then its member access
    /// capability.
    pub(crate) fn eval_access(&self,
                              parent: &Expr,
                              member: &str,
                              env: &Rc<Environment>,
                              line: usize)
                              -> EvalResult<Value> {
        self.eval(parent, env)?.get_member(member, line)
    }

    /// Evaluates a call.
    ///
    /// The callee expression is evaluated first, then every argument from
    /// left to right, and finally the callee value is invoked. Invoking a
    /// class constructs an instance, which is how `new Foo()` works.
    pub(crate) fn eval_call(&self,
                            callee: &Expr,
                            arguments: &[Expr],
                            env: &Rc<Environment>,
                            line: usize)
                            -> EvalResult<Value> {
        let callee = self.eval(callee, env)?;
        let args = arguments.iter()
                            .map(|argument| self.eval(argument, env))
                            .collect::<EvalResult<Vec<_>>>()?;

        callee.invoke(self, args, line)
    }
}
