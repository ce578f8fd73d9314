/// Binary operator evaluation.
///
/// Implements arithmetic on numbers and string concatenation, dispatching on
/// the runtime kinds of both operands.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context holding the
/// global scope, and error propagation.
pub mod core;

/// Evaluation of member access and calls.
///
/// Resolves the callee, evaluates arguments left to right and hands them to
/// the callee's invoke capability.
pub mod call;

/// Statement evaluation.
///
/// Implements imports, class and variable declarations and the program
/// entry point.
pub mod statement;
