use std::{collections::HashMap, rc::Rc};

use crate::{
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        stdlib::{HostIo, HostMethodDef, build_members, expect_number, expect_string, host_methods, parse_number,
                 system},
        value::{class::Class, core::Value, package::Package},
    },
    util::num::parse_integer,
};

/// Applies a one-argument numeric function.
fn unary(args: &[Value], method: &str, line: usize, f: fn(f64) -> f64) -> EvalResult<Value> {
    Ok(Value::Number(f(expect_number(&args[0], method, line)?)))
}

/// Applies a two-argument numeric function.
fn binary(args: &[Value], method: &str, line: usize, f: fn(f64, f64) -> f64) -> EvalResult<Value> {
    let a = expect_number(&args[0], method, line)?;
    let b = expect_number(&args[1], method, line)?;
    Ok(Value::Number(f(a, b)))
}

host_methods! {
    MATH_TABLE: () {
        "abs"   => { params: &["a"], func: |_, args, line| unary(args, "Math.abs", line, f64::abs) },
        "sqrt"  => { params: &["a"], func: |_, args, line| unary(args, "Math.sqrt", line, f64::sqrt) },
        "floor" => { params: &["a"], func: |_, args, line| unary(args, "Math.floor", line, f64::floor) },
        "ceil"  => { params: &["a"], func: |_, args, line| unary(args, "Math.ceil", line, f64::ceil) },
        "round" => {
            params: &["a"],
            func: |_, args, line| unary(args, "Math.round", line, |a| (a + 0.5).floor()),
        },
        "pow"   => { params: &["a", "b"], func: |_, args, line| binary(args, "Math.pow", line, f64::powf) },
        "max"   => { params: &["a", "b"], func: |_, args, line| binary(args, "Math.max", line, f64::max) },
        "min"   => { params: &["a", "b"], func: |_, args, line| binary(args, "Math.min", line, f64::min) },
    }
}

host_methods! {
    INTEGER_TABLE: () {
        "parseInt" => {
            params: &["s"],
            func: |_, args, line| {
                parse_integer(expect_string(&args[0], "Integer.parseInt", line)?, line).map(Value::Number)
            },
        },
    }
}

host_methods! {
    DOUBLE_TABLE: () {
        "parseDouble" => {
            params: &["s"],
            func: |_, args, line| {
                let text = expect_string(&args[0], "Double.parseDouble", line)?;
                parse_number(text, "Double.parseDouble", line).map(Value::Number)
            },
        },
    }
}

/// Builds `java.lang`.
pub(super) fn package(io: &HostIo, closure: &Rc<Environment>) -> Package {
    Package::new("lang").with("System", system::class(io, closure))
                        .with("Math", static_class("Math", MATH_TABLE, closure))
                        .with("Integer", static_class("Integer", INTEGER_TABLE, closure))
                        .with("Double", static_class("Double", DOUBLE_TABLE, closure))
}

/// A host class whose table holds statics only.
fn static_class(name: &str, table: &[HostMethodDef<()>], closure: &Rc<Environment>) -> Class {
    Class::host(name, build_members(table, &(), closure), HashMap::new())
}
