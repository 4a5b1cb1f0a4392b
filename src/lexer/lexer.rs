use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// `Ok(None)` means the handler consumed input that produces no token
/// (whitespace, comments).
pub type LexResult = Result<Option<Token>, Error>;

pub type RegexHandler = fn(&mut Lexer, &Regex) -> LexResult;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(&format!("^(?:{})", regex)).unwrap(),
        handler,
    }
}

lazy_static! {
    /// Tried in order; the first pattern matching at the cursor wins, so
    /// longer operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern("[0-9]+(\\.[0-9]+)?", number_handler),
        pattern("\\s+", skip_handler),
        pattern("\"(\\\\.|[^\"\\\\])*\"", string_handler),
        pattern("\"", unterminated_string_handler),
        pattern("//[^\n]*", skip_handler),
        pattern("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern("==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern("!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern("<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        pattern("<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern(">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        pattern(">", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern("\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        pattern("\\|", MK_DEFAULT_HANDLER!(TokenKind::BitOr, "|")),
        pattern("&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        pattern("&", MK_DEFAULT_HANDLER!(TokenKind::BitAnd, "&")),
        pattern("\\^", MK_DEFAULT_HANDLER!(TokenKind::BitXor, "^")),
        pattern(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern(":", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern("->", MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->")),
        pattern("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern("-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        pattern("%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
    ];
}

/// A pull based cursor over the source text.
///
/// Each call to [`Lexer::advance`] yields the next token or a lexical error.
/// After an error the cursor has already moved past the offending input, so
/// the caller may keep pulling tokens.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            source,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            col: self.col,
        }
    }

    /// Moves the cursor `n` bytes forward and returns the span covering them.
    pub fn consume(&mut self, n: usize) -> Span {
        let span = Span::new(self.position(), n);
        let end = (self.pos + n).min(self.source.len());

        for c in self.source[self.pos..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }

        self.pos = end;
        span
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn advance(&mut self) -> Result<Token, Error> {
        'scan: while !self.at_eof() {
            for pattern in PATTERNS.iter() {
                if pattern.regex.is_match(self.remainder()) {
                    match (pattern.handler)(self, &pattern.regex)? {
                        Some(token) => return Ok(token),
                        None => continue 'scan,
                    }
                }
            }

            let character = self.remainder().chars().next().unwrap_or('\0');
            let span = self.consume(character.len_utf8());
            return Err(Error::new(
                ErrorImpl::UnexpectedCharacter { character },
                span,
            ));
        }

        Ok(MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            Span::new(self.position(), 0)
        ))
    }
}

fn matched_len(lexer: &Lexer, regex: &Regex) -> usize {
    regex.find(lexer.remainder()).map_or(0, |m| m.end())
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> LexResult {
    let len = matched_len(lexer, regex);
    let value = lexer.remainder()[..len].to_string();
    let span = lexer.consume(len);

    Ok(Some(MK_TOKEN!(TokenKind::Number, value, span)))
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> LexResult {
    let len = matched_len(lexer, regex);
    lexer.consume(len);
    Ok(None)
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> LexResult {
    // Escapes are resolved by the parser, the token keeps the raw literal.
    let len = matched_len(lexer, regex);
    let value = lexer.remainder()[..len].to_string();
    let span = lexer.consume(len);

    Ok(Some(MK_TOKEN!(TokenKind::String, value, span)))
}

fn unterminated_string_handler(lexer: &mut Lexer, _regex: &Regex) -> LexResult {
    let len = lexer.remainder().len();
    let span = lexer.consume(len);

    Err(Error::new(ErrorImpl::UnterminatedString, span))
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> LexResult {
    let len = matched_len(lexer, regex);
    let value = lexer.remainder()[..len].to_string();
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);
    let span = lexer.consume(len);

    Ok(Some(MK_TOKEN!(kind, value, span)))
}

/// Lexes the whole source, stopping at the first lexical error.
///
/// The returned tokens end with `EOF`.
pub fn tokenize(source: String) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.advance()?;
        let is_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if is_eof {
            return Ok(tokens);
        }
    }
}
