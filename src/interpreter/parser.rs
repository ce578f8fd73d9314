/// Parsing of `+` and `-`, then `*`, `/` and `%`, each left-associative.
pub mod binary;
/// Class, method, parameter and type declarations.
pub mod declaration;
/// Unary endpoints: primaries, postfix access and call chains, assignment.
///
/// These are the highest-precedence expression forms.
pub mod unary;

/// Core parsing logic shared by all modules: program and expression entry
/// points.
pub mod core;

/// Statement dispatch, including the one speculative production that tells
/// variable declarations apart from expression statements.
pub mod statement;

/// Utility helpers for the parser.
///
/// Includes token expectations, identifier parsing and comma-separated list
/// parsing.
pub mod utils;
