mod common;

use std::fs;

use common::{in_main, run, run_capturing};
use kava::error::{Error, ParseError, RuntimeError};
use pretty_assertions::assert_eq;
use rstest::rstest;
use walkdir::WalkDir;

#[test]
fn program_fixtures_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "java"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));
        let input = fs::read_to_string(path.with_extension("in")).unwrap_or_default();

        count += 1;
        let (printed, result) = run_capturing(&source, &input);
        if let Err(e) = result {
            panic!("Program {path:?} failed:\n{source}\nError: {e}");
        }
        assert_eq!(printed, expected, "unexpected output from {path:?}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(run(src, ""), expected);
}

fn assert_failure(src: &str) -> Error {
    match run_capturing(src, "").1 {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_output(&in_main("System.out.println(2 + 3 * 4);"), "14\n");
    assert_output(&in_main("System.out.println((2 + 3) * 4);"), "20\n");
    assert_output(&in_main("System.out.println(10 - 4 - 3);"), "3\n");
    assert_output(&in_main("System.out.println(7 / 2);"), "3.5\n");
    assert_output(&in_main("System.out.println(7 % 4);"), "3\n");
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_output(&in_main("System.out.println(1 / 0);"), "inf\n");
}

#[test]
fn concatenation_coerces_to_text() {
    assert_output(&in_main(r#"System.out.println("n = " + 1 + 2);"#), "n = 12\n");
    assert_output(&in_main(r#"System.out.println(1 + 2 + " apples");"#), "3 apples\n");
    assert_output(&in_main(r#"System.out.println("value: " + null);"#), "value: null\n");
}

#[test]
fn print_and_println() {
    assert_output(&in_main(r#"System.out.print("a"); System.out.print("b"); System.out.println();"#),
                  "ab\n");
    assert_output(&in_main(r#"System.out.println("x", 2);"#), "x\n2\n");
}

#[test]
fn entry_point_receives_fixed_argument() {
    assert_output(&in_main("System.out.println(args);"), "hello world\n");
}

#[test]
fn top_level_statements_run_before_entry_point() {
    let src = format!(r#"System.out.println("first"); {}"#,
                      in_main(r#"System.out.println("second");"#));
    assert_output(&src, "first\nsecond\n");
}

#[test]
fn uninitialized_variables_are_null() {
    assert_output(&in_main("String s; System.out.println(s);"), "null\n");
}

#[test]
fn assignment_yields_its_value() {
    assert_output(&in_main("int a; int b; a = b = 4; System.out.println(a + b);"), "8\n");
}

#[test]
fn method_assignments_do_not_leak_into_globals() {
    let src = r#"
        String label = "global";
        class Main {
            static void change() {
                label = "changed";
                System.out.println(label);
            }
            public static void main(String[] args) {
                Main.change();
                System.out.println(label);
            }
        }
    "#;
    assert_output(src, "changed\nglobal\n");
}

#[test]
fn instances_expose_non_static_methods() {
    let src = r#"
        class Greeter {
            void greet(String name) { System.out.println("hi " + name); }
            static void shout() { System.out.println("HI"); }
        }
        class Main {
            public static void main(String[] args) {
                Greeter g = new Greeter();
                g.greet("ada");
                Greeter.shout();
                System.out.println(g.__class__);
                g.__class__().greet("bob");
            }
        }
    "#;
    assert_output(src, "hi ada\nHI\nclass Greeter\nhi bob\n");
}

#[test]
fn wildcard_import_binds_package_members() {
    let src = format!("import java.util.*; {}",
                      in_main("Scanner s = new Scanner(System.in); System.out.println(s.nextLine());"));
    assert_eq!(run(&src, "typed\n"), "typed\n");
}

#[test]
fn single_import_binds_final_segment() {
    let src = format!("import java.util.Scanner; {}",
                      in_main("Scanner s = new Scanner(); System.out.println(s.nextInt() * 2);"));
    assert_eq!(run(&src, "  21  \n"), "42\n");
}

#[test]
fn output_before_an_error_is_kept() {
    let (printed, result) =
        run_capturing(&in_main(r#"System.out.println("before"); missing();"#), "");
    assert_eq!(printed, "before\n");
    assert!(result.is_err());
}

#[rstest]
#[case::undefined_name("System.out.println(missing);",
                       "Error on line 1: Undefined name 'missing'.")]
#[case::string_subtraction(r#"String s = "a" - 1;"#,
                           "Error on line 1: Type error: cannot apply '-' to string and number.")]
#[case::call_a_number("int x = 1; x();", "Error on line 1: Cannot invoke a value of kind number.")]
#[case::call_a_package("java();", "Error on line 1: Cannot invoke a value of kind package.")]
#[case::call_an_instance("System.out();", "Error on line 1: Cannot invoke a value of kind instance.")]
#[case::member_of_a_method("System.out.println.x;",
                           "Error on line 1: Cannot access member 'x' on a method.")]
#[case::class_of_a_host_instance("System.out.__class__;",
                                 "Error on line 1: PrintStream instance has no member '__class__'.")]
#[case::member_of_a_number("int x = 1; x.y;",
                           "Error on line 1: Cannot access member 'y' on a number.")]
#[case::member_of_null("null.y;", "Error on line 1: Cannot access member 'y' on a null.")]
#[case::assign_to_member("Math.PI = 3;", "Error on line 1: Invalid assignment target 'Math.PI'.")]
#[case::too_many_arguments("Math.abs(1, 2);",
                           "Error on line 1: Method 'abs' expects 1 argument(s), found 2.")]
#[case::missing_static("Math.tau;", "Error on line 1: class Math has no member 'tau'.")]
#[case::bad_integer(r#"Integer.parseInt("abc");"#,
                    r#"Error on line 1: Invalid argument: "abc" is not an integer."#)]
#[case::lowercase_infinity(r#"Double.parseDouble("inf");"#,
                           r#"Error on line 1: Invalid argument: Double.parseDouble cannot parse "inf"."#)]
#[case::lowercase_nan(r#"Double.parseDouble("nan");"#,
                      r#"Error on line 1: Invalid argument: Double.parseDouble cannot parse "nan"."#)]
#[case::number_expected(r#"Math.abs("x");"#,
                        "Error on line 1: Invalid argument: Math.abs expects a number, got string.")]
#[case::scanner_not_imported("Scanner s = new Scanner();",
                             "Error on line 1: Undefined name 'Scanner'.")]
#[case::input_exhausted("java.util.Scanner().nextLine();",
                        "Error on line 1: No more input available.")]
fn runtime_errors_inside_main(#[case] body: &str, #[case] message: &str) {
    let err = assert_failure(&in_main(body));
    assert!(matches!(err, Error::Runtime(_)), "expected a runtime error, got {err:?}");
    assert_eq!(err.to_string(), message);
}

#[rstest]
#[case::no_entry_point("int x = 1;", "Error: No class with a static 'main' method was found.")]
#[case::instance_main_only("class A { void main(String a) { } }",
                           "Error: No class with a static 'main' method was found.")]
#[case::missing_package("import java.nothing.Foo;",
                        "Error on line 1: Cannot import 'java.nothing.Foo': 'nothing' does not name a package member.")]
#[case::through_a_class("import java.lang.Math.abs;",
                        "Error on line 1: Cannot import 'java.lang.Math.abs': 'Math' does not name a package member.")]
fn top_level_runtime_errors(#[case] src: &str, #[case] message: &str) {
    assert_eq!(assert_failure(src).to_string(), message);
}

#[test]
fn errors_report_the_offending_line() {
    let src = "class Main {\n    public static void main(String[] args) {\n        \
               System.out.println(missing);\n    }\n}\n";
    assert_eq!(assert_failure(src).to_string(),
               "Error on line 3: Undefined name 'missing'.");
}

#[test]
fn wrong_argument_count_for_user_method() {
    let src = format!(r#"class Util {{ static void twice(int a, int b) {{ System.out.println("ran"); }} }} {}"#,
                      in_main("Util.twice(1);"));
    let (printed, result) = run_capturing(&src, "");
    assert_eq!(printed, "");
    let err = result.unwrap_err();
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { expected: 2,
                                                                          found: 1,
                                                                          .. })));
}

#[test]
fn parse_double_accepts_java_spellings() {
    let body = r#"System.out.println(Double.parseDouble(" -2.5e1 "));
                  System.out.println(Double.parseDouble("Infinity"));
                  System.out.println(Double.parseDouble("NaN"));"#;
    assert_eq!(run(&in_main(body), ""), "-25\ninf\nNaN\n");
}

#[test]
fn nothing_runs_when_parsing_fails() {
    let (printed, result) = run_capturing(r#"System.out.println("early"); int x = ;"#, "");
    assert_eq!(printed, "");
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn duplicate_parameters_are_rejected() {
    let err = assert_failure("class A { static void f(int a, int a) { } }");
    assert!(matches!(err, Error::Parse(ParseError::DuplicateParameter { .. })));
    assert_eq!(err.to_string(), "Error on line 1: Duplicate parameter 'a' in method 'f'.");
}

#[test]
fn unrecognized_input_is_a_lex_error() {
    let err = assert_failure("int x = #;");
    assert!(matches!(err, Error::Lex(_)));
    assert_eq!(err.to_string(), "Error on line 1: Unrecognized input: #.");
}
