use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("mut", TokenKind::Mut);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("fn", TokenKind::Fn);
        map.insert("struct", TokenKind::Struct);
        map.insert("impl", TokenKind::Impl);
        map.insert("return", TokenKind::Return);
        map.insert("async", TokenKind::Async);
        map.insert("await", TokenKind::Await);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("boolean", TokenKind::BooleanType);
        map.insert("string", TokenKind::StringType);
        map.insert("i8", TokenKind::I8);
        map.insert("i16", TokenKind::I16);
        map.insert("i32", TokenKind::I32);
        map.insert("u8", TokenKind::U8);
        map.insert("u16", TokenKind::U16);
        map.insert("u32", TokenKind::U32);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,     // ||
    And,    // &&
    BitOr,  // |
    BitAnd, // &
    BitXor, // ^

    Semicolon,
    Colon,
    Comma,
    Arrow,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Let,
    Mut,
    If,
    Else,
    While,
    For,
    Fn,
    Struct,
    Impl,
    Return,
    Async,
    Await,
    True,
    False,

    // Builtin type names
    BooleanType,
    StringType,
    I8,
    I16,
    I32,
    U8,
    U16,
    U32,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The lexeme as it appears in the source. String literals keep their
    /// quotes and escapes.
    pub value: String,
    pub span: Span,
}

/// `line:col lexeme`, the format of the token dump.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} {}",
            self.span.start.line, self.span.start.col, self.value
        )
    }
}

impl Token {
    /// Text shown for this token in diagnostics.
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::EOF {
            String::from("end of file")
        } else {
            self.value.clone()
        }
    }
}
