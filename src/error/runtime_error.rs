/// Represents all errors that can occur during evaluation and runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A name was not bound in the current scope or any enclosing one.
    #[error("Error on line {line}: Undefined name '{name}'.")]
    UndefinedName {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A package, class or instance has no member of that name.
    #[error("Error on line {line}: {owner} has no member '{name}'.")]
    UndefinedMember {
        /// Description of the value that was accessed.
        owner: String,
        /// The member that was requested.
        name:  String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Member access on a value kind that has no members.
    #[error("Error on line {line}: Cannot access member '{name}' on a {kind}.")]
    NotAccessible {
        /// The kind of value that was accessed.
        kind: &'static str,
        /// The member that was requested.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Invocation of a value kind that cannot be called.
    #[error("Error on line {line}: Cannot invoke a value of kind {kind}.")]
    NotCallable {
        /// The kind of value that was invoked.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assignment to an expression that is not a variable reference.
    #[error("Error on line {line}: Invalid assignment target '{target}'.")]
    NotAssignable {
        /// The rejected target, re-serialised.
        target: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The wrong number of arguments was supplied to a method.
    #[error("Error on line {line}: Method '{name}' expects {expected} argument(s), found {found}.")]
    ArgumentCountMismatch {
        /// The invoked method.
        name:     String,
        /// The declared parameter count.
        expected: usize,
        /// The supplied argument count.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binary operator was applied to an unsupported pair of values.
    #[error("Error on line {line}: Type error: cannot apply '{op}' to {left} and {right}.")]
    TypeMismatch {
        /// The operator symbol.
        op:    String,
        /// The kind of the left operand.
        left:  &'static str,
        /// The kind of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An import path segment does not resolve to a package.
    #[error("Error on line {line}: Cannot import '{path}': '{segment}' does not name a package member.")]
    ImportResolution {
        /// The full dotted import path.
        path:    String,
        /// The segment that failed to resolve.
        segment: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// No declared class has a static user-defined `main` method.
    #[error("Error: No class with a static 'main' method was found.")]
    NoEntryPoint,
    /// A host method received an argument it cannot work with.
    #[error("Error on line {line}: Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An input-reading host method found no more input.
    #[error("Error on line {line}: No more input available.")]
    InputExhausted {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading or writing a host stream failed.
    #[error("Error on line {line}: I/O failure: {details}.")]
    Io {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
