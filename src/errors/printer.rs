use colored::Colorize;

use crate::get_line_at_position;

use super::errors::{Error, ErrorTip};

/// Sink for diagnostics. The parser and the driver report every error
/// through one of these, so a caller can choose between human readable
/// output and a machine readable list of codes.
pub trait ErrorPrinter {
    fn report(&mut self, source: &str, error: &Error);
}

/// Prints human readable diagnostics to stderr.
#[derive(Debug, Default)]
pub struct DefaultErrorPrinter;

impl DefaultErrorPrinter {
    /*
        Syntax error at 2:13:
        expected ';' after expression, found `}`
            2 |     let a = b }
                            ^
    */
    pub fn format(source: &str, error: &Error) -> String {
        let span = error.get_span();
        let (line, line_text, line_pos) = get_line_at_position(source, span.start.offset);
        let line_start = span.start.offset.min(source.len()) - line_pos;
        let at_eof = line_start + line_text.len() == source.len();

        let mut output = format!(
            "{} at {}:{}:\n",
            error.get_kind().to_string().red().bold(),
            span.start.line,
            span.start.col
        );

        output.push_str(&error.get_message());
        if let ErrorTip::Suggestion(tip) = error.get_tip() {
            output.push_str(&format!(" ({})", tip));
        }

        output.push_str(&format!(
            "\n{:>5} | {}{}\n",
            line,
            line_text,
            if at_eof { "(end of file)" } else { "" }
        ));

        // Tabs before the span are echoed so the carets line up with the
        // offending text.
        let mut padding = String::from("        ");
        for c in line_text.chars().take(span.start.col.saturating_sub(1)) {
            padding.push(if c == '\t' { '\t' } else { ' ' });
        }

        let carets = "^".repeat(span.len.max(1));
        output.push_str(&padding);
        output.push_str(&carets.red().bold().to_string());
        output.push('\n');

        output
    }
}

impl ErrorPrinter for DefaultErrorPrinter {
    fn report(&mut self, source: &str, error: &Error) {
        eprint!("{}", DefaultErrorPrinter::format(source, error));
    }
}

/// Collects the code of every reported error, in report order.
#[derive(Debug, Default)]
pub struct ErrorCodePrinter {
    pub codes: Vec<&'static str>,
}

impl ErrorCodePrinter {
    pub fn new() -> Self {
        ErrorCodePrinter { codes: vec![] }
    }
}

impl ErrorPrinter for ErrorCodePrinter {
    fn report(&mut self, _source: &str, error: &Error) {
        self.codes.push(error.get_code());
    }
}
