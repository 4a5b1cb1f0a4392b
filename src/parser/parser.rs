//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry points.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statements and items.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers

use std::{collections::HashMap, mem};

use crate::{
    ast::ast::Item,
    errors::{
        errors::{Error, ErrorImpl},
        printer::{DefaultErrorPrinter, ErrorPrinter},
    },
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Span, MK_TOKEN,
};

use super::{
    item::parse_item,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    types::{create_token_type_lookups, TypeNUDHandler, TypeNUDLookup},
};

/// The main parser structure that maintains parsing state.
///
/// The parser pulls tokens from the lexer on demand and only ever looks at
/// two of them: the current token and the one consumed before it.
pub struct Parser<'a> {
    /// Source of tokens
    lexer: Lexer,
    /// The source text, handed to the error printer
    source: &'a str,
    /// The token under the cursor
    current: Token,
    /// The most recently consumed token
    previous: Token,
    /// Set by every reported diagnostic
    has_error: bool,
    /// Where diagnostics go
    error_printer: &'a mut dyn ErrorPrinter,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for type handlers
    type_nud_lookup: TypeNUDLookup,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned before the first token.
    ///
    /// Call [`Parser::advance`] once to load the first token.
    pub fn new(source: &'a str, error_printer: &'a mut dyn ErrorPrinter) -> Self {
        let placeholder = MK_TOKEN!(TokenKind::EOF, String::new(), Span::default());

        Parser {
            lexer: Lexer::new(source.to_string()),
            source,
            current: placeholder.clone(),
            previous: placeholder,
            has_error: false,
            error_printer,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the most recently consumed token.
    pub fn previous_token(&self) -> &Token {
        &self.previous
    }

    /// Advances to the next token and returns the one just consumed.
    ///
    /// Lexical errors met on the way are reported and skipped.
    pub fn advance(&mut self) -> &Token {
        let next = loop {
            match self.lexer.advance() {
                Ok(token) => break token,
                Err(error) => self.report(&error),
            }
        };

        self.previous = mem::replace(&mut self.current, next);
        &self.previous
    }

    /// Consumes the current token if it is of the given kind.
    pub fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.current.kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `message` - What was expected, e.g. "expected ';' after expression"
    ///
    /// # Returns
    ///
    /// The consumed token, or an `ExpectedToken` error pointing at the
    /// offending token (the last real token when the input ran out).
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current.kind == expected_kind {
            return Ok(self.advance().clone());
        }

        let offending = if self.current.kind == TokenKind::EOF {
            &self.previous
        } else {
            &self.current
        };

        Err(Error::new(
            ErrorImpl::ExpectedToken {
                message: String::from(message),
                found: self.current.describe(),
            },
            offending.span,
        ))
    }

    /// Builds an error located at the current token.
    pub fn error_at_current(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.current.span)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Sends a diagnostic to the error printer and marks the parse as failed.
    pub fn report(&mut self, error: &Error) {
        self.has_error = true;
        self.error_printer.report(self.source, error);
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Binding power of `kind` as an infix operator; `Default` for tokens
    /// that do not continue an expression.
    pub fn get_binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    pub fn get_type_nud_handler(&self, kind: TokenKind) -> Option<TypeNUDHandler> {
        self.type_nud_lookup.get(&kind).copied()
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Unlike `led`, this leaves the binding power table alone: `-` is both
    /// a prefix and an infix operator.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a type handler for a token.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }
}

/// Checks that every `{` has a matching `}`.
///
/// Every stray `}` and every `{` still open at the end of input is reported.
/// Lexical errors are ignored here; structural parsing reports them.
pub fn validate_brace_balance(source: &str, error_printer: &mut dyn ErrorPrinter) -> bool {
    let mut lexer = Lexer::new(source.to_string());
    let mut open_braces: Vec<Token> = vec![];
    let mut balanced = true;

    loop {
        let token = match lexer.advance() {
            Ok(token) => token,
            Err(_) => continue,
        };

        match token.kind {
            TokenKind::OpenCurly => open_braces.push(token),
            TokenKind::CloseCurly => {
                if open_braces.pop().is_none() {
                    balanced = false;
                    error_printer.report(
                        source,
                        &Error::new(ErrorImpl::UnexpectedClosingDelimiter, token.span),
                    );
                }
            }
            TokenKind::EOF => break,
            _ => {}
        }
    }

    for brace in open_braces {
        balanced = false;
        error_printer.report(source, &Error::new(ErrorImpl::UnclosedDelimiter, brace.span));
    }

    balanced
}

/// Parses source text into a list of top level items, reporting diagnostics
/// to stderr.
///
/// # Returns
///
/// The items and whether the parse succeeded.
pub fn parse(source: &str) -> (Vec<Item>, bool) {
    parse_with_error_printer(source, &mut DefaultErrorPrinter)
}

/// Parses source text, sending every diagnostic to `error_printer`.
///
/// Unbalanced braces stop the parse before any structure is built. Any other
/// syntax error ends the parse at the point it is found, except for tokens
/// that cannot start an item, which are skipped up to the next `fn`. On
/// failure the returned items may be empty or partial and the flag is false.
pub fn parse_with_error_printer(
    source: &str,
    error_printer: &mut dyn ErrorPrinter,
) -> (Vec<Item>, bool) {
    if !validate_brace_balance(source, error_printer) {
        return (vec![], false);
    }

    let mut parser = Parser::new(source, error_printer);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);
    parser.advance();

    let mut items = vec![];

    while parser.has_tokens() {
        match parse_item(&mut parser) {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {}
            Err(error) => {
                parser.report(&error);
                return (vec![], false);
            }
        }
    }

    let ok = !parser.has_error();
    (items, ok)
}
