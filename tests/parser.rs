use std::fs;

use kava::{
    ast::{AccessModifier, BinaryOperator, Expr, ImportSegment, Statement},
    error::{Error, LexError, ParseError},
    interpreter::{
        lexer::tokenize,
        parser::statement::parse_statement,
        value::core::Value,
    },
    parse_source,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use walkdir::WalkDir;

fn first_statement(src: &str) -> Statement {
    let tokens = tokenize(src).expect("source lexes");
    parse_statement(&mut tokens.iter().peekable()).expect("statement parses")
}

fn printed(src: &str) -> String {
    first_statement(src).to_string()
}

#[rstest]
#[case("int x = 1;", true)]
#[case("int x;", true)]
#[case("String[] args;", true)]
#[case("double[][] grid = null;", true)]
#[case("Foo bar = new Foo();", true)]
#[case("x = 1;", false)]
#[case("x;", false)]
#[case("System.out.println(1);", false)]
#[case("make()();", false)]
#[case("(a) = 1;", false)]
fn declarations_are_told_apart_from_expressions(#[case] src: &str, #[case] declaration: bool) {
    let statement = first_statement(src);
    assert_eq!(matches!(statement, Statement::VariableDeclaration { .. }), declaration,
               "{src} parsed as {statement:?}");
}

#[test]
fn failed_declaration_attempt_leaves_no_trace() {
    let tokens = tokenize("a = 1; int b;").unwrap();
    let mut iter = tokens.iter().peekable();

    let first = parse_statement(&mut iter).unwrap();
    let second = parse_statement(&mut iter).unwrap();

    assert!(matches!(first, Statement::Expression { .. }));
    assert!(matches!(second, Statement::VariableDeclaration { ref name, .. } if name == "b"));
    assert!(iter.next().is_none());
}

#[rstest]
#[case::precedence("1 + 2 * 3;", "(1 + (2 * 3));")]
#[case::left_associative("1 - 2 - 3;", "((1 - 2) - 3);")]
#[case::modulo_binds_tightly("a + b % c;", "(a + (b % c));")]
#[case::grouping("(1 + 2) * 3;", "((1 + 2) * 3);")]
#[case::assignment_is_right_associative("a = b = 1;", "a = b = 1;")]
#[case::access_chain("a.b.c;", "a.b.c;")]
#[case::new_is_noise("new Scanner(System.in).nextLine();", "Scanner(System.in).nextLine();")]
#[case::chained_calls("make()(1, 2);", "make()(1, 2);")]
#[case::string_escapes(r#"s = "a\"b\n";"#, r#"s = "a\"b\n";"#)]
#[case::null_literal("x = null;", "x = null;")]
#[case::declaration("int[] xs = 1 + 2;", "int[] xs = (1 + 2);")]
#[case::public_class("public class A { }", "class A {\n}")]
fn expressions_print_back_as_source(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(printed(src), expected);
}

#[test]
fn binary_nodes_record_operator_and_line() {
    let statement = first_statement("\n\nx * 2;");
    let Statement::Expression { expr, line } = statement else {
        panic!("expected an expression statement");
    };

    assert_eq!(line, 3);
    assert_eq!(expr,
               Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "x".to_string(),
                                                                 line: 3, }),
                                op:    BinaryOperator::Mul,
                                right: Box::new(Expr::Literal { value: Value::Number(2.0),
                                                                line:  3, }),
                                line:  3, });
}

#[rstest]
#[case("import java.util.Scanner;", vec![ImportSegment::Name("java".into()),
                                         ImportSegment::Name("util".into()),
                                         ImportSegment::Name("Scanner".into())])]
#[case("import java.util.*;", vec![ImportSegment::Name("java".into()),
                                   ImportSegment::Name("util".into()),
                                   ImportSegment::Wildcard])]
#[case("import *;", vec![ImportSegment::Wildcard])]
fn import_paths(#[case] src: &str, #[case] expected: Vec<ImportSegment>) {
    let Statement::Import { path, .. } = first_statement(src) else {
        panic!("expected an import");
    };
    assert_eq!(path, expected);
}

#[test]
fn class_members_keep_their_modifiers() {
    let src = "class Shapes {
                   public static void main(String[] args) { }
                   private double area(double w, double h) { int unused; }
                   int count() { }
               }";
    let Statement::Class(class) = first_statement(src) else {
        panic!("expected a class");
    };

    assert_eq!(class.name, "Shapes");
    let summary = class.methods
                       .iter()
                       .map(|m| (m.name.as_str(), m.access, m.is_static, m.params.len(), m.body.len()))
                       .collect::<Vec<_>>();
    assert_eq!(summary,
               vec![("main", AccessModifier::Public, true, 1, 0),
                    ("area", AccessModifier::Private, false, 2, 1),
                    ("count", AccessModifier::PackagePrivate, false, 0, 0)]);
    assert_eq!(class.methods[0].params[0].ty.dimensions, 1);
    assert_eq!(class.methods[1].line, 3);
}

#[test]
fn programs_end_with_the_entry_point() {
    let program = parse_source("import java.util.*; class A { }").unwrap();
    assert_eq!(program.statements.last(), Some(&Statement::ExecuteEntryPoint));
    assert_eq!(program.statements.len(), 3);

    let empty = parse_source("// nothing here\n").unwrap();
    assert_eq!(empty.statements, vec![Statement::ExecuteEntryPoint]);
}

#[rstest]
#[case::missing_semicolon("int x = 1")]
#[case::unclosed_class("class A {")]
#[case::unclosed_call("f(1, 2;")]
#[case::trailing_comma("f(1,);")]
#[case::class_without_name("class { }")]
#[case::import_without_path("import ;")]
#[case::dangling_operator("x = 1 +;")]
#[case::member_without_name("a.;")]
#[case::new_without_class("new 1;")]
#[case::bad_array_type("class A { void f(int[ x) { } }")]
fn malformed_programs_are_rejected(#[case] src: &str) {
    assert!(matches!(parse_source(src), Err(Error::Parse(_))), "{src} should not parse");
}

#[test]
fn overflowing_number_literals_are_rejected() {
    let err = parse_source("x = 1e400;").unwrap_err();
    assert!(matches!(err, Error::Lex(LexError::LiteralTooLarge { line: 1, .. })), "{err:?}");
    assert_eq!(err.to_string(), "Error on line 1: Numeric literal 1e400 is too large.");
}

#[test]
fn parse_errors_name_the_line_and_token() {
    let err = parse_source("class A {\n  void f() {\n    import x, y;\n  }\n}").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 3: Expected ';', found ','.");
}

#[test]
fn end_of_input_is_reported() {
    let err = parse_source("import java").unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

/// Printing a parsed program and parsing the output again must give the
/// same printed program.
#[test]
fn printed_programs_reparse_to_the_same_tree() {
    let mut count = 0;

    for entry in WalkDir::new("tests/programs").into_iter()
                                               .filter_map(Result::ok)
                                               .filter(|e| {
                                                   e.path().extension().is_some_and(|ext| ext == "java")
                                               })
    {
        let path = entry.path();
        let source = fs::read_to_string(path).unwrap();

        let first = parse_source(&source).unwrap().to_string();
        let second = parse_source(&first).unwrap_or_else(|e| panic!("{path:?} reprint failed: {e}\n{first}"))
                                         .to_string();

        count += 1;
        assert_eq!(first, second, "{path:?} did not survive a print round trip");
    }

    assert!(count > 0);
}
