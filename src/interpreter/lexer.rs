use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Keywords get their own variants; identifiers and literals keep their text.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.1e-10`. Every
    /// number is a double.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens with their escapes decoded.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_string)]
    Str(String),
    /// `import`
    #[token("import")]
    Import,
    /// `class`
    #[token("class")]
    Class,
    /// `static`
    #[token("static")]
    Static,
    /// `public`
    #[token("public")]
    Public,
    /// `private`
    #[token("private")]
    Private,
    /// `protected`
    #[token("protected")]
    Protected,
    /// `new`
    #[token("new")]
    New,
    /// `null`
    #[token("null")]
    Null,
    /// Identifier tokens; type, variable, class or member names.
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`, both multiplication and the import wildcard.
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,

    /// Line breaks only advance the line counter.
    #[regex(r"\r?\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Number(n) => return write!(f, "{n}"),
            Self::Str(s) => return write!(f, "{s:?}"),
            Self::Identifier(name) => return write!(f, "'{name}'"),
            Self::Import => "'import'",
            Self::Class => "'class'",
            Self::Static => "'static'",
            Self::Public => "'public'",
            Self::Private => "'private'",
            Self::Protected => "'protected'",
            Self::New => "'new'",
            Self::Null => "'null'",
            Self::Dot => "'.'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Equals => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Percent => "'%'",
            Self::Comment | Self::MultiLineComment => "comment",
            Self::NewLine => "newline",
            Self::Ignored => "whitespace",
        };
        f.write_str(text)
    }
}

/// Converts source text into a vector of `(Token, line)` pairs.
///
/// Lines are 1-based. Whitespace, newlines and comments never appear in the
/// output.
///
/// # Errors
/// Returns [`LexError::UnrecognizedInput`] for the first slice of input that
/// matches no token, and [`LexError::LiteralTooLarge`] for a numeric literal
/// beyond the range of `f64`.
///
/// # Example
/// ```
/// use kava::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("int x =\n 4;").unwrap();
/// assert_eq!(tokens[3], (Token::Number(4.0), 2));
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) if lexer.slice().starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(LexError::LiteralTooLarge { slice: lexer.slice().to_string(),
                                                       line:  lexer.extras.line, });
            },
            Err(()) => {
                return Err(LexError::UnrecognizedInput { slice: lexer.slice().to_string(),
                                                         line:  lexer.extras.line, });
            },
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// Literals that overflow to infinity are rejected.
fn parse_number(lex: &logos::Lexer<'_, Token>) -> Option<f64> {
    lex.slice().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Strips the quotes from a string literal and decodes its escapes.
///
/// Unknown escapes are rejected, which turns the literal into a lexing error.
fn parse_string(lex: &logos::Lexer<'_, Token>) -> Option<String> {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];

    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next()? {
            'n' => text.push('\n'),
            't' => text.push('\t'),
            'r' => text.push('\r'),
            '"' => text.push('"'),
            '\\' => text.push('\\'),
            _ => return None,
        }
    }

    Some(text)
}
