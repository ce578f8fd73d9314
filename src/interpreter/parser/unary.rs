use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated},
        },
        value::core::Value,
    },
};

/// Parses an endpoint: the highest-precedence expression form.
///
/// An endpoint is a primary followed by any number of postfix member
/// accesses and call argument lists. If the whole chain is followed by `=`,
/// it becomes the target of an assignment whose right side is a full
/// expression, so `a = b = 1` nests to the right.
///
/// Grammar:
/// ```text
///     endpoint := primary postfix* ("=" expression)?
/// ```
/// Whether the target can actually be assigned is decided at runtime.
pub(crate) fn parse_endpoint<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let primary = parse_primary(tokens)?;
    let chain = parse_postfix(tokens, primary)?;

    if let Some((Token::Equals, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let value = parse_expression(tokens)?;
        return Ok(Expr::Assignment { target: Box::new(chain),
                                     value: Box::new(value),
                                     line });
    }

    Ok(chain)
}

/// Parses a primary (atomic) expression.
///
/// Grammar (simplified):
/// ```text
///     primary := IDENTIFIER
///              | NUMBER | STRING | "null"
///              | "(" expression ")"
///              | "new" IDENTIFIER
/// ```
/// `new` only marks construction for the reader: `new Foo(1)` yields the
/// same tree as `Foo(1)`, and invoking a class constructs an instance.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = match tokens.peek() {
        Some(&(token, line)) => (token, *line),
        None => return Err(ParseError::unexpected("expression", None)),
    };

    let expr = match token {
        Token::Identifier(name) => Expr::Variable { name: name.clone(),
                                                    line },
        Token::Number(n) => Expr::Literal { value: Value::Number(*n),
                                            line },
        Token::Str(s) => Expr::Literal { value: Value::from(s.as_str()),
                                         line },
        Token::Null => Expr::Literal { value: Value::Null,
                                       line },
        Token::LParen => return parse_grouping(tokens),
        Token::New => return parse_construction(tokens),
        _ => return Err(ParseError::unexpected("expression", Some(&(token.clone(), line)))),
    };
    tokens.next();

    Ok(expr)
}

/// Parses `( expression )`. Grouping leaves no node in the tree.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen, "'('")?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "')'")?;

    Ok(expr)
}

/// Parses `new` followed by the class name that starts the construction
/// chain.
fn parse_construction<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::New, "'new'")?;

    match tokens.peek() {
        Some((Token::Identifier(name), line)) => {
            let expr = Expr::Variable { name: name.clone(),
                                        line: *line, };
            tokens.next();
            Ok(expr)
        },
        found => Err(ParseError::unexpected("class name after 'new'", found.copied())),
    }
}

/// Parses postfix member accesses and calls applied to an expression.
///
/// Accesses nest to the left, so `a.b.c` becomes `((a.b).c)`, and every
/// argument list wraps the expression built so far, which allows chained
/// calls such as `make()()` or `new Scanner(System.in).nextLine()`.
///
/// Grammar:
/// ```text
///     postfix := "." IDENTIFIER
///              | "(" (expression ("," expression)*)? ")"
/// ```
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        match tokens.peek() {
            Some((Token::Dot, line)) => {
                let line = *line;
                tokens.next();
                let member = match tokens.peek() {
                    Some((Token::Identifier(name), _)) => name.clone(),
                    found => {
                        return Err(ParseError::unexpected("member name after '.'",
                                                          found.copied()));
                    },
                };
                tokens.next();
                node = Expr::Access { parent: Box::new(node),
                                      member,
                                      line };
            },
            Some((Token::LParen, line)) => {
                let line = *line;
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                node = Expr::Call { callee: Box::new(node),
                                    arguments,
                                    line };
            },
            _ => return Ok(node),
        }
    }
}
