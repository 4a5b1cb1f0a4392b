//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Item parsing (function declarations)
//! - Statement parsing (variable declarations, blocks, control flow)
//! - Expression parsing (binary ops, function calls, lambdas, literals)
//! - Type parsing for type annotations
//! - Error reporting and item level recovery
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod item;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
