//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Primitive types (`boolean`, `string`, sized integers)
//! - Tuple types, with `()` standing for unit
//! - Function types, `fn(T, ...) [-> T]`
//!
//! Like expression parsing, it dispatches on the leading token through a
//! NUD lookup table.

use std::collections::HashMap;

use crate::{
    ast::types::{IntegerWidth, TypeName},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<TypeName, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
///
/// # Arguments
///
/// * `parser` - Mutable reference to the parser to initialize
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::BooleanType, parse_primitive_type);
    parser.type_nud(TokenKind::StringType, parse_primitive_type);

    parser.type_nud(TokenKind::I8, parse_integer_type);
    parser.type_nud(TokenKind::I16, parse_integer_type);
    parser.type_nud(TokenKind::I32, parse_integer_type);
    parser.type_nud(TokenKind::U8, parse_integer_type);
    parser.type_nud(TokenKind::U16, parse_integer_type);
    parser.type_nud(TokenKind::U32, parse_integer_type);

    parser.type_nud(TokenKind::OpenParen, parse_tuple_type);
    parser.type_nud(TokenKind::Fn, parse_function_type);
}

/// Parses a type expression.
///
/// # Returns
///
/// * `Ok(TypeName)` - The parsed type
/// * `Err(Error)` - `ExpectedType` if no type starts at the current token
pub fn parse_type(parser: &mut Parser) -> Result<TypeName, Error> {
    match parser.get_type_nud_handler(parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => Err(parser.error_at_current(ErrorImpl::ExpectedType {
            found: parser.current_token().describe(),
        })),
    }
}

fn parse_primitive_type(parser: &mut Parser) -> Result<TypeName, Error> {
    let kind = parser.advance().kind;

    Ok(if kind == TokenKind::BooleanType {
        TypeName::Boolean
    } else {
        TypeName::String
    })
}

fn parse_integer_type(parser: &mut Parser) -> Result<TypeName, Error> {
    let kind = parser.advance().kind;

    let signed = matches!(kind, TokenKind::I8 | TokenKind::I16 | TokenKind::I32);
    let width = match kind {
        TokenKind::I8 | TokenKind::U8 => IntegerWidth::Bits8,
        TokenKind::I16 | TokenKind::U16 => IntegerWidth::Bits16,
        _ => IntegerWidth::Bits32,
    };

    Ok(TypeName::integer(signed, width))
}

/// `(T, ...)` with an optional trailing comma; `()` is the unit type.
fn parse_tuple_type(parser: &mut Parser) -> Result<TypeName, Error> {
    parser.advance();
    let items = parse_type_list(parser, "expected ')' after tuple items")?;

    if items.is_empty() {
        Ok(TypeName::Unit)
    } else {
        Ok(TypeName::Tuple(items))
    }
}

fn parse_function_type(parser: &mut Parser) -> Result<TypeName, Error> {
    parser.advance();
    parser.expect(TokenKind::OpenParen, "expected '(' after 'fn'")?;

    let params = parse_type_list(parser, "expected ')' after function type params")?;

    let return_type = if parser.match_token(TokenKind::Arrow) {
        parse_type(parser)?
    } else {
        TypeName::Unit
    };

    Ok(TypeName::function(params, return_type))
}

/// Parses comma separated types up to and including the closing `)`.
fn parse_type_list(parser: &mut Parser, message: &str) -> Result<Vec<TypeName>, Error> {
    let mut items = vec![];

    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseParen {
        items.push(parse_type(parser)?);

        if !parser.match_token(TokenKind::Comma) {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen, message)?;
    Ok(items)
}
