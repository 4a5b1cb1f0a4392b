use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, BinaryOperator, BooleanExpr, CallExpr, LambdaExpr, NumberExpr, PrefixExpr,
            PrefixOperator, StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    item::{parse_params, parse_return_type},
    lookups::BindingPower,
    parser::Parser,
    stmt::parse_block_body,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let nud = match parser.get_nud_handler(parser.current_token_kind()) {
        Some(handler) => handler,
        None => {
            return Err(parser.error_at_current(ErrorImpl::ExpectedPrimaryExpression {
                found: parser.current_token().describe(),
            }))
        }
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the caller, keep extending lhs
    loop {
        let next_bp = parser.get_binding_power(parser.current_token_kind());
        if next_bp <= bp {
            break;
        }

        let led = match parser.get_led_handler(parser.current_token_kind()) {
            Some(handler) => handler,
            None => break,
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    match token.kind {
        TokenKind::Number => Ok(Expr::Number(NumberExpr {
            value: token.value,
            span: token.span,
        })),
        TokenKind::Identifier => Ok(Expr::Symbol(SymbolExpr {
            value: token.value,
            span: token.span,
        })),
        TokenKind::True | TokenKind::False => Ok(Expr::Boolean(BooleanExpr {
            value: token.kind == TokenKind::True,
            span: token.span,
        })),
        _ => Err(Error::new(
            ErrorImpl::ExpectedPrimaryExpression {
                found: token.describe(),
            },
            token.span,
        )),
    }
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    let value = unescape_string(&token.value).map_err(|sequence| {
        Error::new(ErrorImpl::InvalidEscapeSequence { sequence }, token.span)
    })?;

    Ok(Expr::String(StringExpr {
        value,
        span: token.span,
    }))
}

/// Turns a quoted string literal into the bytes it denotes.
///
/// On failure returns the offending escape sequence as written.
pub fn unescape_string(literal: &str) -> Result<Vec<u8>, String> {
    let inner = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(literal)
        .as_bytes();

    let mut bytes = Vec::with_capacity(inner.len());
    let mut i = 0;

    while i < inner.len() {
        if inner[i] != b'\\' {
            bytes.push(inner[i]);
            i += 1;
            continue;
        }

        let start = i;
        i += 1;

        let Some(&escape) = inner.get(i) else {
            return Err(String::from("\\"));
        };

        if escape.is_ascii_digit() {
            let digits = count_while(&inner[i..], 3, |byte| byte.is_ascii_digit());
            let text = String::from_utf8_lossy(&inner[i..i + digits]).to_string();
            i += digits;

            match text.parse::<u8>() {
                Ok(value) => bytes.push(value),
                Err(_) => return Err(String::from_utf8_lossy(&inner[start..i]).to_string()),
            }
            continue;
        }

        if escape == b'x' {
            i += 1;
            let digits = count_while(&inner[i..], 2, |byte| byte.is_ascii_hexdigit());
            if digits == 0 {
                return Err(String::from("\\x"));
            }

            let text = String::from_utf8_lossy(&inner[i..i + digits]).to_string();
            i += digits;

            match u8::from_str_radix(&text, 16) {
                Ok(value) => bytes.push(value),
                Err(_) => return Err(String::from_utf8_lossy(&inner[start..i]).to_string()),
            }
            continue;
        }

        i += 1;
        bytes.push(match escape {
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'a' => 0x07,
            b'b' => 0x08,
            b'\\' => b'\\',
            b'"' => b'"',
            _ => return Err(String::from_utf8_lossy(&inner[start..i]).to_string()),
        });
    }

    Ok(bytes)
}

fn count_while(bytes: &[u8], max: usize, predicate: impl Fn(&u8) -> bool) -> usize {
    bytes.iter().take(max).take_while(|byte| predicate(byte)).count()
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let operator = match BinaryOperator::from_token_kind(operator_token.kind) {
        Some(operator) => operator,
        None => {
            return Err(Error::new(
                ErrorImpl::ExpectedPrimaryExpression {
                    found: operator_token.describe(),
                },
                operator_token.span,
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: left.get_span().to(right.get_span()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let operator = match PrefixOperator::from_token_kind(operator_token.kind) {
        Some(operator) => operator,
        None => {
            return Err(Error::new(
                ErrorImpl::ExpectedPrimaryExpression {
                    found: operator_token.describe(),
                },
                operator_token.span,
            ))
        }
    };

    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: operator_token.span.to(rhs.get_span()),
        operator,
        right_expr: Box::new(rhs),
    }))
}

/// Assignment is right associative, so its value is parsed at the lowest
/// binding power and may itself be an assignment.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    if !matches!(left, Expr::Symbol(_)) {
        return Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget,
            operator_token.span,
        ));
    }

    let rhs = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Binary(BinaryExpr {
        span: left.get_span().to(rhs.get_span()),
        left: Box::new(left),
        operator: BinaryOperator::Assign,
        right: Box::new(rhs),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "expected ')'")?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let mut arguments = vec![];

    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        if !parser.match_token(TokenKind::Comma) {
            break;
        }
    }

    let close = parser.expect(
        TokenKind::CloseParen,
        "expected a ')' after function arguments",
    )?;

    Ok(Expr::Call(CallExpr {
        span: left.get_span().to(&close.span),
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_lambda_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span;

    parser.expect(TokenKind::OpenParen, "expected a '(' after 'fn'")?;
    let parameters = parse_params(parser)?;
    parser.expect(TokenKind::CloseParen, "expected a ')' after function params")?;

    let return_type = parse_return_type(parser)?;
    let (body, body_span) = parse_block_body(parser, "expected function body")?;

    Ok(Expr::Lambda(LambdaExpr {
        span: start.to(&body_span),
        parameters,
        body,
        return_type,
    }))
}
