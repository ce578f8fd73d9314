/// Represents a failure to tokenize the source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A run of characters that matches no token.
    #[error("Error on line {line}: Unrecognized input: {slice}.")]
    UnrecognizedInput {
        /// The offending source text.
        slice: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric literal whose value does not fit in a double.
    #[error("Error on line {line}: Numeric literal {slice} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        slice: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}
