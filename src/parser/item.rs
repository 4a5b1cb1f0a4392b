use crate::{
    ast::{
        ast::Item,
        statements::{FunctionItem, Param},
        types::TypeName,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::parse_block_body, types::parse_type};

/// Parses one top level item.
///
/// A token that cannot start an item is reported once, then everything up
/// to the next `fn` is skipped and `Ok(None)` is returned so parsing can go
/// on from there.
pub fn parse_item(parser: &mut Parser) -> Result<Option<Item>, Error> {
    if parser.current_token_kind() == TokenKind::Fn {
        return Ok(Some(Item::Function(parse_function_item(parser)?)));
    }

    let error = parser.error_at_current(ErrorImpl::ExpectedFunctionDeclaration {
        found: parser.current_token().describe(),
    });
    parser.report(&error);

    while parser.has_tokens() && parser.current_token_kind() != TokenKind::Fn {
        parser.advance();
    }

    Ok(None)
}

pub fn parse_function_item(parser: &mut Parser) -> Result<FunctionItem, Error> {
    let start = parser.advance().span;

    let identifier = parser
        .expect(TokenKind::Identifier, "expected an identifier after 'fn'")?
        .value;

    parser.expect(TokenKind::OpenParen, "expected a '(' after function name")?;
    let parameters = parse_params(parser)?;
    parser.expect(TokenKind::CloseParen, "expected a ')' after function params")?;

    let return_type = parse_return_type(parser)?;
    let (body, body_span) = parse_block_body(parser, "expected function body")?;

    Ok(FunctionItem {
        identifier,
        parameters,
        body,
        return_type,
        span: start.to(&body_span),
    })
}

/// Parses `name: type` pairs up to, but not including, the closing `)`.
/// A trailing comma is allowed.
pub fn parse_params(parser: &mut Parser) -> Result<Vec<Param>, Error> {
    let mut params = vec![];

    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseParen {
        let name = parser.expect(TokenKind::Identifier, "expected a parameter name")?;
        parser.expect(TokenKind::Colon, "expected ':' after parameter name")?;
        let type_name = parse_type(parser)?;
        let end = parser.previous_token().span;

        params.push(Param {
            name: name.value,
            type_name,
            span: name.span.to(&end),
        });

        if !parser.match_token(TokenKind::Comma) {
            break;
        }
    }

    Ok(params)
}

/// `-> type`, or unit when the arrow is absent.
pub fn parse_return_type(parser: &mut Parser) -> Result<TypeName, Error> {
    if parser.match_token(TokenKind::Arrow) {
        parse_type(parser)
    } else {
        Ok(TypeName::Unit)
    }
}
