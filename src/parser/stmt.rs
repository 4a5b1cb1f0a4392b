use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, ExpressionStmt, IfStmt, VarDeclStmt, WhileStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.get_stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;
    let semicolon = parser.expect(TokenKind::Semicolon, "expected ';' after statement")?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: expression.get_span().to(&semicolon.span),
        expression,
    }))
}

/// Parses `{ stmt* }`, returning the statements and the span from brace to
/// brace.
pub fn parse_block_body(parser: &mut Parser, message: &str) -> Result<(Vec<Stmt>, Span), Error> {
    let open = parser.expect(TokenKind::OpenCurly, message)?;

    let mut body = vec![];
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        body.push(parse_stmt(parser)?);
    }

    let close = parser.expect(TokenKind::CloseCurly, "unclosed block")?;

    Ok((body, open.span.to(&close.span)))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();
    let is_mutable = parser.match_token(TokenKind::Mut);

    let message = if is_mutable {
        "expected identifier after 'let mut'"
    } else {
        "expected identifier after 'let'"
    };
    let identifier = parser.expect(TokenKind::Identifier, message)?.value;

    let explicit_type = if parser.match_token(TokenKind::Colon) {
        Some(parse_type(parser)?)
    } else {
        None
    };

    let assigned_value = if parser.match_token(TokenKind::Assignment) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    let semicolon = parser.expect(
        TokenKind::Semicolon,
        "expected ';' after variable declaration",
    )?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        span: start_token.span.to(&semicolon.span),
        identifier,
        explicit_type,
        assigned_value,
        is_mutable,
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser, "expected '{'")?))
}

fn parse_block(parser: &mut Parser, message: &str) -> Result<BlockStmt, Error> {
    let (body, span) = parse_block_body(parser, message)?;
    Ok(BlockStmt { body, span })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;
    let condition = parse_expr(parser, BindingPower::Default)?;

    let then_body = parse_block(parser, "expected '{' after if")?;
    let mut span = start.to(&then_body.span);

    let else_body = if parser.match_token(TokenKind::Else) {
        let else_stmt = match parser.current_token_kind() {
            TokenKind::If => parse_if_stmt(parser)?,
            TokenKind::OpenCurly => parse_block_stmt(parser)?,
            _ => {
                return Err(parser.error_at_current(ErrorImpl::ExpectedToken {
                    message: String::from("expected 'if' or '{' after else"),
                    found: parser.current_token().describe(),
                }))
            }
        };

        span = start.to(else_stmt.get_span());
        Some(Box::new(else_stmt))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        span,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;
    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser, "expected '{' after while")?;

    Ok(Stmt::While(WhileStmt {
        span: start.to(&body.span),
        condition,
        body,
    }))
}
