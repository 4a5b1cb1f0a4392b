//! Lexical analysis module.
//!
//! This module contains the lexer that turns source text into tokens for
//! the parser. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, builtin type names, identifiers and literals
//! - Line and column tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
