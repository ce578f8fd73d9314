/// Represents all errors that can occur while parsing a token stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Human readable description of the acceptable token kind(s).
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of the token stream while more input was required.
    #[error("Error: Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// Human readable description of the acceptable token kind(s).
        expected: String,
    },
    /// A method declares the same parameter name twice.
    #[error("Error on line {line}: Duplicate parameter '{name}' in method '{method}'.")]
    DuplicateParameter {
        /// The repeated parameter name.
        name:   String,
        /// The method declaring it.
        method: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl ParseError {
    /// Builds the error for `found` when `expected` was required.
    ///
    /// ```
    /// use kava::{error::ParseError, interpreter::lexer::Token};
    ///
    /// let err = ParseError::unexpected("';'", Some(&(Token::Comma, 3)));
    /// assert_eq!(err.to_string(), "Error on line 3: Expected ';', found ','.");
    /// ```
    pub fn unexpected(expected: impl Into<String>,
                      found: Option<&(crate::interpreter::lexer::Token, usize)>)
                      -> Self {
        match found {
            Some((token, line)) => Self::UnexpectedToken { expected: expected.into(),
                                                           found:    token.to_string(),
                                                           line:     *line, },
            None => Self::UnexpectedEndOfInput { expected: expected.into() },
        }
    }
}
