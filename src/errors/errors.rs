use std::fmt::Display;

use thiserror::Error;

use crate::{Position, Span};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

/// Stable descriptor of an error: a numeric code plus the message template
/// the code stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDesc {
    pub code: &'static str,
    pub template: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Type,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical | ErrorKind::Syntax => write!(f, "Syntax error"),
            ErrorKind::Type => write!(f, "Type error"),
        }
    }
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_position(&self) -> Position {
        self.span.start
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_code(&self) -> &'static str {
        self.get_error_desc().code
    }

    /// The formatted message, with the template's arguments filled in.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } | ErrorImpl::UnterminatedString => {
                ErrorKind::Lexical
            }
            ErrorImpl::UnexpectedClosingDelimiter
            | ErrorImpl::UnclosedDelimiter
            | ErrorImpl::ExpectedToken { .. }
            | ErrorImpl::ExpectedType { .. }
            | ErrorImpl::ExpectedPrimaryExpression { .. }
            | ErrorImpl::ExpectedFunctionDeclaration { .. }
            | ErrorImpl::InvalidEscapeSequence { .. }
            | ErrorImpl::InvalidAssignmentTarget => ErrorKind::Syntax,
            _ => ErrorKind::Type,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedClosingDelimiter => "UnexpectedClosingDelimiter",
            ErrorImpl::UnclosedDelimiter => "UnclosedDelimiter",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::ExpectedPrimaryExpression { .. } => "ExpectedPrimaryExpression",
            ErrorImpl::ExpectedFunctionDeclaration { .. } => "ExpectedFunctionDeclaration",
            ErrorImpl::InvalidEscapeSequence { .. } => "InvalidEscapeSequence",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::UndeclaredVariable { .. } => "UndeclaredVariable",
            ErrorImpl::IncompatibleOperands { .. } => "IncompatibleOperands",
            ErrorImpl::IncompatibleAssignment { .. } => "IncompatibleAssignment",
            ErrorImpl::NotCallable { .. } => "NotCallable",
            ErrorImpl::InsufficientArguments { .. } => "InsufficientArguments",
            ErrorImpl::TooManyArguments { .. } => "TooManyArguments",
            ErrorImpl::ArgumentTypeMismatch { .. } => "ArgumentTypeMismatch",
            ErrorImpl::NonBooleanCondition { .. } => "NonBooleanCondition",
            ErrorImpl::IncompatibleInitialization { .. } => "IncompatibleInitialization",
            ErrorImpl::IncompatibleOperand { .. } => "IncompatibleOperand",
        }
    }

    pub fn get_error_desc(&self) -> ErrorDesc {
        let (code, template) = match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => ("E0001", "unexpected character {}"),
            ErrorImpl::UnterminatedString => ("E0002", "unterminated string"),
            ErrorImpl::UnexpectedClosingDelimiter => ("E0501", "unexpected closing delimiter '}'"),
            ErrorImpl::UnclosedDelimiter => ("E0502", "unclosed delimiter '{'"),
            ErrorImpl::ExpectedToken { .. } => ("E0503", "{}, found `{}`"),
            ErrorImpl::ExpectedType { .. } => ("E0504", "expected a type, found `{}`"),
            ErrorImpl::ExpectedPrimaryExpression { .. } => {
                ("E0505", "expected primary expression, found `{}`")
            }
            ErrorImpl::ExpectedFunctionDeclaration { .. } => {
                ("E0506", "expected function declaration, found `{}`")
            }
            ErrorImpl::InvalidEscapeSequence { .. } => ("E0507", "invalid escape sequence `{}`"),
            ErrorImpl::InvalidAssignmentTarget => ("E0508", "can only assign to identifiers"),
            ErrorImpl::UndeclaredVariable { .. } => ("E0601", "variable `{}` not declared"),
            ErrorImpl::IncompatibleOperands { .. } => {
                ("E0602", "incompatible operands for '{}': `{}` and `{}`")
            }
            ErrorImpl::IncompatibleAssignment { .. } => {
                ("E0603", "incompatible assignment: expected `{}`, received `{}`")
            }
            ErrorImpl::NotCallable { .. } => ("E0604", "can only call functions, found `{}`"),
            ErrorImpl::InsufficientArguments { .. } => {
                ("E0605", "insufficient arguments: expected {}, received {}")
            }
            ErrorImpl::TooManyArguments { .. } => {
                ("E0606", "too many arguments: expected {}, received {}")
            }
            ErrorImpl::ArgumentTypeMismatch { .. } => {
                ("E0607", "argument {} type mismatch: expected `{}`, received `{}`")
            }
            ErrorImpl::NonBooleanCondition { .. } => {
                ("E0608", "condition must be boolean, found `{}`")
            }
            ErrorImpl::IncompatibleInitialization { .. } => {
                ("E0609", "incompatible initialization of `{}`: expected `{}`, received `{}`")
            }
            ErrorImpl::IncompatibleOperand { .. } => ("E0610", "incompatible operand for '{}': `{}`"),
        };

        ErrorDesc { code, template }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("add a closing '\"' to the string literal"))
            }
            ErrorImpl::UnclosedDelimiter => {
                ErrorTip::Suggestion(String::from("add a matching '}'"))
            }
            ErrorImpl::InvalidEscapeSequence { .. } => ErrorTip::Suggestion(String::from(
                "valid escapes are \\n \\r \\t \\a \\b \\\\ \\\" \\xHH and \\DDD",
            )),
            ErrorImpl::ExpectedFunctionDeclaration { .. } => ErrorTip::Suggestion(String::from(
                "only function declarations may appear at the top level",
            )),
            ErrorImpl::UndeclaredVariable { variable } => ErrorTip::Suggestion(format!(
                "declare `{}` with `let` before using it",
                variable
            )),
            ErrorImpl::IncompatibleOperands { operator, .. } if operator == "+" => {
                ErrorTip::Suggestion(String::from(
                    "'+' is only supported for two integers or two strings",
                ))
            }
            _ => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] at {}:{}: {}",
            self.get_kind(),
            self.get_code(),
            self.span.start.line,
            self.span.start.col,
            self.internal_error
        )
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexical
    #[error("unexpected character {character:?}")]
    UnexpectedCharacter { character: char },
    #[error("unterminated string")]
    UnterminatedString,

    // Syntax
    #[error("unexpected closing delimiter '}}'")]
    UnexpectedClosingDelimiter,
    #[error("unclosed delimiter '{{'")]
    UnclosedDelimiter,
    #[error("{message}, found `{found}`")]
    ExpectedToken { message: String, found: String },
    #[error("expected a type, found `{found}`")]
    ExpectedType { found: String },
    #[error("expected primary expression, found `{found}`")]
    ExpectedPrimaryExpression { found: String },
    #[error("expected function declaration, found `{found}`")]
    ExpectedFunctionDeclaration { found: String },
    #[error("invalid escape sequence `{sequence}`")]
    InvalidEscapeSequence { sequence: String },
    #[error("can only assign to identifiers")]
    InvalidAssignmentTarget,

    // Type
    #[error("variable `{variable}` not declared")]
    UndeclaredVariable { variable: String },
    #[error("incompatible operands for '{operator}': `{left}` and `{right}`")]
    IncompatibleOperands {
        operator: String,
        left: String,
        right: String,
    },
    #[error("incompatible assignment: expected `{expected}`, received `{received}`")]
    IncompatibleAssignment { expected: String, received: String },
    #[error("can only call functions, found `{callee}`")]
    NotCallable { callee: String },
    #[error("insufficient arguments: expected {expected}, received {received}")]
    InsufficientArguments { expected: usize, received: usize },
    #[error("too many arguments: expected {expected}, received {received}")]
    TooManyArguments { expected: usize, received: usize },
    #[error("argument {position} type mismatch: expected `{expected}`, received `{received}`")]
    ArgumentTypeMismatch {
        position: usize,
        expected: String,
        received: String,
    },
    #[error("condition must be boolean, found `{received}`")]
    NonBooleanCondition { received: String },
    #[error("incompatible initialization of `{variable}`: expected `{expected}`, received `{received}`")]
    IncompatibleInitialization {
        variable: String,
        expected: String,
        received: String,
    },
    #[error("incompatible operand for '{operator}': `{operand}`")]
    IncompatibleOperand { operator: String, operand: String },
}
