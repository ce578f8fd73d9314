//! # kava
//!
//! kava is a tree-walking interpreter for a small, class-based subset of
//! Java. It lexes, parses and runs programs made of imports, classes with
//! static and instance methods, variable declarations and arithmetic or
//! string expressions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::instrument;

use crate::{
    ast::Program,
    error::Error,
    interpreter::{
        evaluator::core::Context,
        parser::core::parse_program,
        stdlib::{HostIo, root_environment},
    },
};

pub use crate::interpreter::lexer::tokenize;

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of a program as a tree, together with a printer
/// that writes a tree back out as source. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while running a
/// program. Every error carries the source line it was raised for, where
/// there is one.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Converts phase errors into the crate-level [`Error`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the value model
/// and the host library to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Lexes and parses `source` into a [`Program`].
///
/// # Examples
/// ```
/// use kava::parse_source;
///
/// let program = parse_source("class A { static void main(String a) { } }").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse_source("class { }").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_program(&tokens)?)
}

/// Runs `source` from start to finish.
///
/// The source is lexed and parsed in full before anything runs. The program
/// then executes against a fresh root scope holding the host library, bound
/// to the streams in `io`, and finishes by calling the entry point.
///
/// # Errors
/// Returns the first lexing, parsing, or runtime error.
///
/// # Examples
/// ```
/// use std::{cell::RefCell, io::Cursor, rc::Rc};
///
/// use kava::{interpreter::stdlib::HostIo, run_source};
///
/// let output = Rc::new(RefCell::new(Vec::new()));
/// let io = HostIo::new(output.clone(), Rc::new(RefCell::new(Cursor::new(""))));
///
/// let source = r#"
///     class Main {
///         public static void main(String[] args) {
///             System.out.println("2 + 2 = " + (2 + 2));
///         }
///     }
/// "#;
/// run_source(source, &io).unwrap();
///
/// assert_eq!(String::from_utf8(output.borrow().clone()).unwrap(), "2 + 2 = 4\n");
///
/// // No class with a static `main` method.
/// assert!(run_source("int x = 1;", &io).is_err());
/// ```
#[instrument(skip_all)]
pub fn run_source(source: &str, io: &HostIo) -> Result<(), Error> {
    let program = parse_source(source)?;
    let context = Context::new(root_environment(io));
    Ok(context.run(&program)?)
}
