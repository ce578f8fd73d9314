use std::iter::Peekable;

use crate::{
    ast::{Expr, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token stream into a [`Program`].
///
/// Statements are parsed until the tokens run out. The synthetic
/// [`Statement::ExecuteEntryPoint`] is appended last.
///
/// Grammar: `root := statement*`
///
/// # Example
/// ```
/// use kava::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("int x = 1; x = x + 1;").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 3);
/// assert_eq!(program.statements[2], Statement::ExecuteEntryPoint);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter)?);
    }
    statements.push(Statement::ExecuteEntryPoint);

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, additive, and recursively descends through the
/// hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}

/// Parses statements up to and including a closing `}`.
///
/// Grammar: `block := statement* "}"`
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                return Ok(statements);
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::unexpected("'}'", None)),
        }
    }
}
