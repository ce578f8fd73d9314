use std::{
    cell::RefCell,
    collections::HashMap,
    io::{self, BufRead, BufReader, Write},
    rc::Rc,
};

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        value::{core::Value, method::Method, package::Package},
    },
    util::num::parse_decimal,
};

mod lang;
mod scanner;
mod system;

/// Signature of a host method in a static table.
///
/// The first argument is the state shared by every method of the table,
/// such as the [`HostIo`] streams.
type HostMethodFn<S> = fn(&S, &[Value], usize) -> EvalResult<Value>;

/// Static description of one host method.
pub(crate) struct HostMethodDef<S: 'static> {
    name:     &'static str,
    params:   &'static [&'static str],
    variadic: bool,
    func:     HostMethodFn<S>,
}

/// Defines a static host method table.
///
/// Each entry provides:
/// - a string name,
/// - the parameter names, which fix the arity,
/// - whether the arity check is skipped,
/// - a function pointer implementing the method.
///
/// The macro produces a `static` slice of [`HostMethodDef`] named by the
/// caller, for state type `$state`.
macro_rules! host_methods {
    (
        $table:ident: $state:ty {
            $(
                $name:literal => {
                    params: $params:expr,
                    $(variadic: $variadic:expr,)?
                    func: $func:expr $(,)?
                }
            ),* $(,)?
        }
    ) => {
        static $table: &[$crate::interpreter::stdlib::HostMethodDef<$state>] = &[
            $(
                $crate::interpreter::stdlib::HostMethodDef::<$state> {
                    name: $name,
                    params: $params,
                    variadic: $crate::interpreter::stdlib::host_methods!(@variadic $($variadic)?),
                    func: $func,
                },
            )*
        ];
    };
    (@variadic) => { false };
    (@variadic $variadic:expr) => { $variadic };
}
pub(crate) use host_methods;

/// The streams the host library reads from and writes to.
///
/// Both halves are shared handles, so a test can keep a clone of the
/// output buffer and inspect it after the program has run.
#[derive(Clone)]
pub struct HostIo {
    output: Rc<RefCell<dyn Write>>,
    input:  Rc<RefCell<dyn BufRead>>,
}

impl HostIo {
    /// Bundles an output sink and a line-oriented input source.
    #[must_use]
    pub fn new(output: Rc<RefCell<dyn Write>>, input: Rc<RefCell<dyn BufRead>>) -> Self {
        Self { output, input }
    }

    /// Binds the process's standard output and standard input.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(Rc::new(RefCell::new(io::stdout())),
                  Rc::new(RefCell::new(BufReader::new(io::stdin()))))
    }

    /// Writes `text` and flushes the sink.
    pub(crate) fn write(&self, text: &str, line: usize) -> EvalResult<()> {
        let mut output = self.output.borrow_mut();
        output.write_all(text.as_bytes())
              .and_then(|()| output.flush())
              .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                              line })
    }

    /// Reads the next input line without its terminator.
    pub(crate) fn read_line(&self, line: usize) -> EvalResult<String> {
        let mut buffer = String::new();
        let read = self.input
                       .borrow_mut()
                       .read_line(&mut buffer)
                       .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                                       line })?;
        if read == 0 {
            return Err(RuntimeError::InputExhausted { line });
        }

        let trimmed = buffer.trim_end_matches(['\n', '\r']).len();
        buffer.truncate(trimmed);
        Ok(buffer)
    }
}

/// Builds the root scope of a run.
///
/// The scope holds the `java` package with its `lang` and `util`
/// sub-packages. Every member of `java.lang` is also bound directly, as if
/// imported.
///
/// # Example
/// ```
/// use kava::interpreter::{stdlib::{HostIo, root_environment}, value::core::Value};
///
/// let root = root_environment(&HostIo::stdio());
///
/// assert!(matches!(root.get("java"), Some(Value::Package(_))));
/// assert!(matches!(root.get("System"), Some(Value::Class(_))));
/// assert_eq!(root.get("Scanner"), None);
/// ```
#[must_use]
pub fn root_environment(io: &HostIo) -> Rc<Environment> {
    let host_scope = Environment::new();
    let lang = lang::package(io, &host_scope);
    let util = Package::new("util").with("Scanner", scanner::class(io, &host_scope));

    let root = Environment::new();
    for name in lang.members().keys() {
        if let Some(value) = lang.members().get(&name) {
            root.set(name, value);
        }
    }
    root.set("java", Value::from(Package::new("java").with("lang", lang).with("util", util)));

    debug!(bindings = ?root.keys(), "built root environment");
    root
}

/// Turns a static table into method values bound to `state`.
fn build_members<S: Clone + 'static>(table: &[HostMethodDef<S>],
                                     state: &S,
                                     closure: &Rc<Environment>)
                                     -> HashMap<String, Value> {
    table.iter()
         .map(|def| {
             let state = state.clone();
             let func = def.func;
             let method = Method::host(def.name,
                                       def.params,
                                       def.variadic,
                                       Rc::clone(closure),
                                       Rc::new(move |args: &[Value], line| func(&state, args, line)));
             (def.name.to_string(), Value::from(method))
         })
         .collect()
}

/// Reads a Number argument.
fn expect_number(value: &Value, method: &str, line: usize) -> EvalResult<f64> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(RuntimeError::InvalidArgument { details: format!("{method} expects a number, got {}",
                                                                      other.kind()),
                                                     line }),
    }
}

/// Reads a String argument.
fn expect_string<'a>(value: &'a Value, method: &str, line: usize) -> EvalResult<&'a str> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(RuntimeError::InvalidArgument { details: format!("{method} expects a string, got {}",
                                                                      other.kind()),
                                                     line }),
    }
}

/// Parses numeric text the way `parseDouble` and `nextDouble` accept it.
fn parse_number(text: &str, method: &str, line: usize) -> EvalResult<f64> {
    parse_decimal(text).ok_or_else(|| RuntimeError::InvalidArgument { details: format!("{method} cannot parse \"{text}\""),
                                                                       line })
}
