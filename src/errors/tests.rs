//! Unit tests for error handling.
//!
//! This module contains tests for error descriptors and the error printers.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::errors::printer::{DefaultErrorPrinter, ErrorCodePrinter, ErrorPrinter};
use crate::{Position, Span};

fn span_at(offset: usize, line: usize, col: usize, len: usize) -> Span {
    Span::new(Position { offset, line, col }, len)
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '@' },
        span_at(10, 1, 11, 1),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_code(), "E0001");
    assert_eq!(error.get_kind(), ErrorKind::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::ExpectedPrimaryExpression {
            found: String::from(";"),
        },
        span_at(42, 3, 7, 1),
    );

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().col, 7);
}

#[test]
fn test_syntax_error_codes() {
    let cases = vec![
        (ErrorImpl::UnexpectedClosingDelimiter, "E0501"),
        (ErrorImpl::UnclosedDelimiter, "E0502"),
        (
            ErrorImpl::ExpectedToken {
                message: String::from("expected ';'"),
                found: String::from("}"),
            },
            "E0503",
        ),
        (
            ErrorImpl::ExpectedType {
                found: String::from("iu"),
            },
            "E0504",
        ),
        (
            ErrorImpl::ExpectedFunctionDeclaration {
                found: String::from("func"),
            },
            "E0506",
        ),
        (
            ErrorImpl::InvalidEscapeSequence {
                sequence: String::from("\\q"),
            },
            "E0507",
        ),
        (ErrorImpl::InvalidAssignmentTarget, "E0508"),
    ];

    for (error_impl, code) in cases {
        let error = Error::new(error_impl, Span::default());
        assert_eq!(error.get_code(), code);
        assert_eq!(error.get_kind(), ErrorKind::Syntax);
    }
}

#[test]
fn test_type_error_codes() {
    let error = Error::new(
        ErrorImpl::TooManyArguments {
            expected: 1,
            received: 2,
        },
        Span::default(),
    );

    assert_eq!(error.get_code(), "E0606");
    assert_eq!(error.get_kind(), ErrorKind::Type);
    assert_eq!(error.get_message(), "too many arguments: expected 1, received 2");
    assert_eq!(
        error.get_error_desc().template,
        "too many arguments: expected {}, received {}"
    );
}

#[test]
fn test_delimiter_messages() {
    let stray = Error::new(ErrorImpl::UnexpectedClosingDelimiter, Span::default());
    let unclosed = Error::new(ErrorImpl::UnclosedDelimiter, Span::default());

    assert_eq!(stray.get_message(), "unexpected closing delimiter '}'");
    assert_eq!(unclosed.get_message(), "unclosed delimiter '{'");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '@' },
        Span::default(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UndeclaredVariable {
            variable: String::from("foo"),
        },
        Span::default(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("foo")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_code_printer_collects_in_order() {
    let mut printer = ErrorCodePrinter::new();
    printer.report("", &Error::new(ErrorImpl::UnclosedDelimiter, Span::default()));
    printer.report(
        "",
        &Error::new(ErrorImpl::UnexpectedClosingDelimiter, Span::default()),
    );

    assert_eq!(printer.codes, vec!["E0502", "E0501"]);
}

#[test]
fn test_default_printer_points_at_span() {
    colored::control::set_override(false);

    let source = "fn main() {\n    let a = #;\n}\n";
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '#' },
        span_at(24, 2, 13, 1),
    );

    let output = DefaultErrorPrinter::format(source, &error);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "Syntax error at 2:13:");
    assert_eq!(lines[1], "unexpected character '#'");
    assert_eq!(lines[2], "    2 |     let a = #;");
    assert_eq!(lines[3].find('^'), lines[2].find('#'));
    assert_eq!(lines[3].trim(), "^");
}

#[test]
fn test_default_printer_marks_end_of_file() {
    colored::control::set_override(false);

    let source = "fn main() {";
    let error = Error::new(ErrorImpl::UnclosedDelimiter, span_at(10, 1, 11, 1));

    let output = DefaultErrorPrinter::format(source, &error);

    assert!(output.contains("    1 | fn main() {(end of file)"));
}

/// Substitutes each `{}` in `template` with the next argument.
fn fill_template(template: &str, args: &[&str]) -> String {
    let mut output = String::new();
    let mut rest = template;
    let mut args = args.iter();

    while let Some(index) = rest.find("{}") {
        output.push_str(&rest[..index]);
        output.push_str(args.next().unwrap());
        rest = &rest[index + 2..];
    }
    output.push_str(rest);

    assert!(args.next().is_none(), "unused arguments for {:?}", template);
    output
}

#[test]
fn test_templates_match_messages() {
    let cases: Vec<(ErrorImpl, Vec<&str>)> = vec![
        (ErrorImpl::UnexpectedCharacter { character: '@' }, vec!["'@'"]),
        (ErrorImpl::UnterminatedString, vec![]),
        (ErrorImpl::UnexpectedClosingDelimiter, vec![]),
        (ErrorImpl::UnclosedDelimiter, vec![]),
        (
            ErrorImpl::ExpectedToken {
                message: String::from("expected ';' after statement"),
                found: String::from("}"),
            },
            vec!["expected ';' after statement", "}"],
        ),
        (ErrorImpl::ExpectedType { found: String::from("iu") }, vec!["iu"]),
        (
            ErrorImpl::ExpectedPrimaryExpression { found: String::from(";") },
            vec![";"],
        ),
        (
            ErrorImpl::ExpectedFunctionDeclaration { found: String::from("a") },
            vec!["a"],
        ),
        (
            ErrorImpl::InvalidEscapeSequence { sequence: String::from("\\q") },
            vec!["\\q"],
        ),
        (ErrorImpl::InvalidAssignmentTarget, vec![]),
        (
            ErrorImpl::UndeclaredVariable { variable: String::from("x") },
            vec!["x"],
        ),
        (
            ErrorImpl::IncompatibleOperands {
                operator: String::from("+"),
                left: String::from("boolean"),
                right: String::from("{integer}"),
            },
            vec!["+", "boolean", "{integer}"],
        ),
        (
            ErrorImpl::IncompatibleAssignment {
                expected: String::from("u8"),
                received: String::from("string"),
            },
            vec!["u8", "string"],
        ),
        (
            ErrorImpl::NotCallable { callee: String::from("i32") },
            vec!["i32"],
        ),
        (
            ErrorImpl::InsufficientArguments { expected: 2, received: 1 },
            vec!["2", "1"],
        ),
        (
            ErrorImpl::TooManyArguments { expected: 0, received: 3 },
            vec!["0", "3"],
        ),
        (
            ErrorImpl::ArgumentTypeMismatch {
                position: 1,
                expected: String::from("u8"),
                received: String::from("boolean"),
            },
            vec!["1", "u8", "boolean"],
        ),
        (
            ErrorImpl::NonBooleanCondition { received: String::from("i32") },
            vec!["i32"],
        ),
        (
            ErrorImpl::IncompatibleInitialization {
                variable: String::from("a"),
                expected: String::from("u8"),
                received: String::from("string"),
            },
            vec!["a", "u8", "string"],
        ),
        (
            ErrorImpl::IncompatibleOperand {
                operator: String::from("!"),
                operand: String::from("i32"),
            },
            vec!["!", "i32"],
        ),
    ];

    for (error_impl, args) in cases {
        let error = Error::new(error_impl, Span::default());
        let desc = error.get_error_desc();

        assert_eq!(
            fill_template(desc.template, &args),
            error.get_message(),
            "template of {} is out of step with its message",
            desc.code
        );
    }
}
