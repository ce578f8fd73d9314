use std::{collections::HashSet, iter::Peekable, rc::Rc};

use crate::{
    ast::{AccessModifier, ClassDeclaration, MethodDeclaration, Parameter, TypeDefinition},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_block},
            utils::{expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a class declaration.
///
/// A leading access modifier is accepted and discarded.
///
/// Grammar: `class := access? "class" IDENTIFIER "{" method* "}"`
///
/// # Errors
/// Returns a `ParseError` if the name or either brace is missing, or if a
/// method fails to parse.
pub fn parse_class<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ClassDeclaration>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_access_modifier(tokens);
    let line = expect(tokens, &Token::Class, "'class'")?;
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::LBrace, "'{'")?;

    let mut methods = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => methods.push(Rc::new(parse_method(tokens)?)),
            None => return Err(ParseError::unexpected("method declaration or '}'", None)),
        }
    }

    Ok(ClassDeclaration { name, methods, line })
}

/// Parses a method declaration.
///
/// The access modifier defaults to package-private when omitted.
///
/// Grammar:
/// ```text
///     method := access? "static"? type IDENTIFIER "(" params? ")" "{" statement* "}"
///     params := type IDENTIFIER ("," type IDENTIFIER)*
/// ```
///
/// # Errors
/// Returns a `ParseError` for malformed signatures or bodies, and
/// `DuplicateParameter` when two parameters share a name.
pub fn parse_method<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<MethodDeclaration>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);

    let access = parse_access_modifier(tokens);
    let is_static = matches!(tokens.peek(), Some((Token::Static, _)));
    if is_static {
        tokens.next();
    }

    let return_type = parse_type(tokens)?;
    let name = parse_identifier(tokens)?;

    expect(tokens, &Token::LParen, "'('")?;
    let params = parse_comma_separated(tokens, parse_parameter, &Token::RParen)?;

    let mut seen = HashSet::new();
    for param in &params {
        if !seen.insert(param.name.as_str()) {
            return Err(ParseError::DuplicateParameter { name: param.name.clone(),
                                                        method: name,
                                                        line });
        }
    }

    expect(tokens, &Token::LBrace, "'{'")?;
    let body = parse_block(tokens)?;

    Ok(MethodDeclaration { access,
                           is_static,
                           return_type,
                           name,
                           params,
                           body,
                           line })
}

/// Parses a type reference: a base name followed by zero or more `[]`.
///
/// Grammar: `type := IDENTIFIER ("[" "]")*`
pub fn parse_type<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<TypeDefinition>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;

    let mut dimensions = 0;
    while let Some((Token::LBracket, _)) = tokens.peek() {
        tokens.next();
        expect(tokens, &Token::RBracket, "']'")?;
        dimensions += 1;
    }

    Ok(TypeDefinition { name, dimensions })
}

fn parse_parameter<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Parameter>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let ty = parse_type(tokens)?;
    let name = parse_identifier(tokens)?;

    Ok(Parameter { ty, name })
}

/// Consumes an access modifier keyword if one is present.
fn parse_access_modifier<'a, I>(tokens: &mut Peekable<I>) -> AccessModifier
    where I: Iterator<Item = &'a (Token, usize)>
{
    let access = match tokens.peek() {
        Some((Token::Public, _)) => AccessModifier::Public,
        Some((Token::Private, _)) => AccessModifier::Private,
        Some((Token::Protected, _)) => AccessModifier::Protected,
        _ => return AccessModifier::PackagePrivate,
    };
    tokens.next();

    access
}
