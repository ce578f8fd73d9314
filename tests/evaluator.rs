use std::{cell::RefCell, io::Cursor, rc::Rc};

use kava::{
    ast::{BinaryOperator, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::Context,
        lexer::tokenize,
        parser::{core::parse_expression, statement::parse_statement},
        stdlib::{HostIo, root_environment},
        value::{
            class::Class,
            core::Value,
            method::{HostFn, Method},
            package::Package,
        },
    },
    parse_source,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn eval_in(context: &Context, env: &Rc<Environment>, src: &str) -> Result<Value, RuntimeError> {
    let tokens = tokenize(src).unwrap();
    let expr = parse_expression(&mut tokens.iter().peekable()).unwrap();
    context.eval(&expr, env)
}

fn exec_in(context: &Context, env: &Rc<Environment>, src: &str) -> Result<(), RuntimeError> {
    let tokens = tokenize(src).unwrap();
    let statement = parse_statement(&mut tokens.iter().peekable()).unwrap();
    context.eval_statement(&statement, env)
}

fn bare_context() -> Context {
    Context::new(Environment::new())
}

#[rstest]
#[case("1 + 2", Value::Number(3.0))]
#[case("9 - 4 - 1", Value::Number(4.0))]
#[case("2 * 3 + 1", Value::Number(7.0))]
#[case("7.5 % 2", Value::Number(1.5))]
#[case(r#""a" + "b""#, Value::from("ab"))]
#[case(r#""n" + 1.5"#, Value::from("n1.5"))]
#[case(r#"2 + "x""#, Value::from("2x"))]
#[case(r#""" + null"#, Value::from("null"))]
#[case("null", Value::Null)]
fn expressions_evaluate(#[case] src: &str, #[case] expected: Value) {
    let context = bare_context();
    assert_eq!(eval_in(&context, context.globals(), src).unwrap(), expected);
}

#[rstest]
#[case(r#""a" * 2"#, "*", "string", "number")]
#[case(r#"1 / "b""#, "/", "number", "string")]
#[case("null + 1", "+", "null", "number")]
#[case("null - null", "-", "null", "null")]
fn mismatched_operands_are_rejected(#[case] src: &str,
                                    #[case] op: &str,
                                    #[case] left: &'static str,
                                    #[case] right: &'static str) {
    let context = bare_context();
    let err = eval_in(&context, context.globals(), src).unwrap_err();
    assert_eq!(err,
               RuntimeError::TypeMismatch { op: op.to_string(),
                                            left,
                                            right,
                                            line: 1 });
}

#[test]
fn lookups_walk_the_scope_chain() {
    let context = bare_context();
    let globals = context.globals();
    globals.set("x", Value::Number(1.0));
    let inner = Environment::child(&Environment::child(globals));

    assert_eq!(eval_in(&context, &inner, "x + 1").unwrap(), Value::Number(2.0));
    assert_eq!(eval_in(&context, &inner, "y").unwrap_err(),
               RuntimeError::UndefinedName { name: "y".to_string(),
                                             line: 1 });
}

#[test]
fn assignment_shadows_instead_of_mutating() {
    let context = bare_context();
    let globals = context.globals();
    globals.set("x", Value::Number(1.0));
    let frame = Environment::child(globals);

    assert_eq!(eval_in(&context, &frame, "x = x + 10").unwrap(), Value::Number(11.0));
    assert_eq!(frame.get("x"), Some(Value::Number(11.0)));
    assert_eq!(globals.get("x"), Some(Value::Number(1.0)));
    assert!(frame.contains_local("x"));
}

#[test]
fn invalid_assignment_target_does_not_evaluate_its_value() {
    let context = bare_context();
    let err = eval_in(&context, context.globals(), "a.b = c").unwrap_err();

    assert_eq!(err,
               RuntimeError::NotAssignable { target: "a.b".to_string(),
                                             line:   1, });
}

#[test]
fn declarations_without_initializer_bind_null() {
    let context = bare_context();
    exec_in(&context, context.globals(), "String s;").unwrap();
    assert_eq!(context.globals().get("s"), Some(Value::Null));
}

#[test]
fn class_declarations_split_static_and_instance_methods() {
    let context = bare_context();
    let globals = context.globals();
    exec_in(&context, globals, "class Pair { static void make() { } void first() { } }").unwrap();

    let Some(Value::Class(class)) = globals.get("Pair") else {
        panic!("Pair is not bound to a class");
    };
    assert!(class.get_static("make", 1).is_ok());
    assert!(class.get_static("first", 1).is_err());

    let instance = Class::construct(&class);
    assert!(matches!(instance.get_member("first", 1), Ok(Value::Method(_))));
    assert!(instance.get_member("make", 1).is_err());
    assert_eq!(instance.get_member("__class__", 1).unwrap(), Value::Class(class));
}

#[test]
fn user_methods_run_in_a_child_of_their_declaring_scope() {
    let context = bare_context();
    let globals = context.globals();
    let program = parse_source("int seen; class C { static void f(int seen) { int local = seen; } }").unwrap();
    for statement in &program.statements[..2] {
        context.eval_statement(statement, globals).unwrap();
    }

    let f = eval_in(&context, globals, "C.f").unwrap();
    assert_eq!(f.invoke(&context, vec![Value::Number(5.0)], 1).unwrap(), Value::Null);

    assert_eq!(globals.get("seen"), Some(Value::Null));
    assert_eq!(globals.get("local"), None);
}

#[test]
fn host_methods_check_arity_unless_variadic() {
    let context = bare_context();
    let scope = Environment::new();
    let first: HostFn = Rc::new(|args: &[Value], _: usize| Ok(args[0].clone()));
    let count: HostFn = Rc::new(|args: &[Value], _: usize| Ok(Value::Number(args.len() as f64)));
    let fixed = Method::host("fixed", &["a"], false, Rc::clone(&scope), first);
    let variadic = Method::host("any", &[], true, scope, count);

    assert_eq!(fixed.invoke(&context, vec![Value::from("x")], 1).unwrap(), Value::from("x"));
    assert_eq!(fixed.invoke(&context, vec![], 4).unwrap_err(),
               RuntimeError::ArgumentCountMismatch { name:     "fixed".to_string(),
                                                     expected: 1,
                                                     found:    0,
                                                     line:     4, });
    assert_eq!(variadic.invoke(&context, vec![Value::Null; 3], 1).unwrap(), Value::Number(3.0));
}

#[rstest]
#[case::string(Value::from("s"), "string")]
#[case::number(Value::Number(1.0), "number")]
#[case::null(Value::Null, "null")]
#[case::package(Value::from(Package::new("p")), "package")]
fn non_callable_kinds_are_rejected(#[case] value: Value, #[case] kind: &'static str) {
    let err = value.invoke(&bare_context(), vec![], 2).unwrap_err();
    assert_eq!(err, RuntimeError::NotCallable { kind, line: 2 });
}

#[test]
fn reference_values_compare_by_identity() {
    let a = Value::from(Package::new("p"));
    let b = Value::from(Package::new("p"));

    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert_eq!(Value::from("text"), Value::from("text".to_string()));
}

#[test]
fn imports_bind_into_globals_from_any_scope() {
    let io = HostIo::new(Rc::new(RefCell::new(Vec::new())), Rc::new(RefCell::new(Cursor::new(""))));
    let globals = root_environment(&io);
    let context = Context::new(Rc::clone(&globals));
    let nested = Environment::child(&Environment::child(&globals));

    exec_in(&context, &nested, "import java.util.Scanner;").unwrap();

    assert!(globals.contains_local("Scanner"));
    assert!(!nested.contains_local("Scanner"));
}

#[test]
fn wildcard_imports_flatten_a_package() {
    let globals = Environment::new();
    let inner = Package::new("inner").with("one", Value::Number(1.0))
                                     .with("two", Value::Number(2.0));
    globals.set("outer", Value::from(Package::new("outer").with("inner", inner)));
    let context = Context::new(Rc::clone(&globals));

    exec_in(&context, &globals, "import outer.inner.*;").unwrap();

    assert_eq!(globals.keys(), vec!["one", "outer", "two"]);
    assert_eq!(globals.get("two"), Some(Value::Number(2.0)));
}

#[test]
fn entry_point_is_the_first_qualifying_class_by_name() {
    let globals = Environment::new();
    let context = Context::new(Rc::clone(&globals));
    let program =
        parse_source("class B { static void main(String a) { int ran = 1; } } class A { void main(String a) { } }")
            .unwrap();
    for statement in &program.statements[..2] {
        context.eval_statement(statement, &globals).unwrap();
    }

    let candidates = globals.keys()
                            .into_iter()
                            .filter(|key| globals.get(key).is_some_and(|v| v.has_entry_point()))
                            .collect::<Vec<_>>();
    assert_eq!(candidates, vec!["B"]);
    assert_eq!(context.eval_statement(&Statement::ExecuteEntryPoint, &globals), Ok(()));
}

#[test]
fn missing_entry_point_is_an_error() {
    let context = bare_context();
    assert_eq!(context.eval_statement(&Statement::ExecuteEntryPoint, context.globals()),
               Err(RuntimeError::NoEntryPoint));
}

#[test]
fn binary_operator_table() {
    let three = Value::Number(3.0);
    let two = Value::Number(2.0);

    let results = [BinaryOperator::Add,
                   BinaryOperator::Sub,
                   BinaryOperator::Mul,
                   BinaryOperator::Div,
                   BinaryOperator::Mod].map(|op| Context::eval_binary(op, &three, &two, 1).unwrap());

    assert_eq!(results,
               [Value::Number(5.0),
                Value::Number(1.0),
                Value::Number(6.0),
                Value::Number(1.5),
                Value::Number(1.0)]);
}
