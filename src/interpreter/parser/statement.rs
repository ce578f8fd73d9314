use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::{ImportSegment, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            declaration::{parse_class, parse_type},
            utils::{expect, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an import, when the next token is `import`.
/// - a class declaration, when the next token is `class` or an access
///   modifier.
/// - a variable declaration.
/// - an expression statement.
///
/// The last two both start with an identifier, so `Foo x;` and `foo.bar();`
/// cannot be told apart from the first token. A variable declaration is
/// tried first on a copy of the cursor; if it fails anywhere, the cursor is
/// left where it was and an expression statement is parsed instead. This is
/// the only backtracking in the grammar.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Import, _)) => parse_import(tokens),
        Some((Token::Class | Token::Public | Token::Private | Token::Protected, _)) => {
            Ok(Statement::Class(parse_class(tokens)?))
        },
        Some(_) => parse_declaration_or_expression(tokens),
        None => Err(ParseError::unexpected("statement", None)),
    }
}

/// Attempts a variable declaration on a checkpoint of `tokens`, falling
/// back to an expression statement from the original position.
fn parse_declaration_or_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut attempt = tokens.clone();

    match parse_variable_declaration(&mut attempt) {
        Ok(statement) => {
            *tokens = attempt;
            Ok(statement)
        },
        Err(err) => {
            trace!(%err, "not a variable declaration, parsing an expression statement");
            parse_expression_statement(tokens)
        },
    }
}

/// Parses an import statement.
///
/// Segments are identifiers or `*`; a `*` ends the path.
///
/// Grammar: `import := "import" (IDENTIFIER | "*") ("." (IDENTIFIER | "*"))* ";"`
///
/// # Errors
/// Returns a `ParseError` if a segment is missing or the statement is not
/// terminated by `;`.
pub fn parse_import<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Import, "'import'")?;

    let mut path = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::Star, _)) => {
                tokens.next();
                path.push(ImportSegment::Wildcard);
                break;
            },
            Some((Token::Identifier(name), _)) => {
                path.push(ImportSegment::Name(name.clone()));
                tokens.next();
            },
            found => {
                return Err(ParseError::unexpected("identifier or '*'", found.copied()));
            },
        }

        if let Some((Token::Dot, _)) = tokens.peek() {
            tokens.next();
        } else {
            break;
        }
    }

    expect(tokens, &Token::Semicolon, "';'")?;

    Ok(Statement::Import { path, line })
}

/// Parses a variable declaration.
///
/// Grammar: `declaration := type IDENTIFIER ("=" expression)? ";"`
///
/// # Errors
/// Returns a `ParseError` as soon as the input stops matching; the caller
/// treats that as "not a declaration".
pub fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);

    let ty = parse_type(tokens)?;
    let name = parse_identifier(tokens)?;

    let value = if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    expect(tokens, &Token::Semicolon, "';'")?;

    Ok(Statement::VariableDeclaration { ty,
                                        name,
                                        value,
                                        line })
}

/// Parses an expression followed by `;`.
///
/// Grammar: `expression_statement := expression ";"`
pub fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);

    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon, "';'")?;

    Ok(Statement::Expression { expr, line })
}
