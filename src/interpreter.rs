/// Scopes: name-to-value bindings with an optional parent.
///
/// Lookups walk the parent chain, while writes always land in the scope
/// they are made on.
pub mod environment;
/// The evaluator module executes AST nodes.
///
/// The evaluator walks the tree produced by the parser, resolves names
/// through the environment chain and dispatches member access, calls and
/// arithmetic on the runtime kinds of the values involved.
///
/// # Responsibilities
/// - Evaluates expressions and statements.
/// - Resolves imports and runs the program entry point.
/// - Reports runtime errors with the line that caused them.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, keywords and punctuation. This is the first
/// stage of interpretation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Disambiguates variable declarations from expression statements by
///   speculative parsing.
/// - Reports the first grammar violation with its line.
pub mod parser;
/// The host library available to every program.
///
/// Provides the `java` package tree: console output through `System.out`,
/// `Math`, numeric parsing and `java.util.Scanner` over the host input.
pub mod stdlib;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum and the reference kinds behind it:
/// packages, classes, instances and methods. Member access and invocation
/// are capabilities of the value, not of the syntax that produced it.
pub mod value;
