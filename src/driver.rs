//! Driver that runs the front end pipeline over one source text.

use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use crate::{
    ast::printer::sexpr_items,
    errors::printer::ErrorPrinter,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse_with_error_printer,
    type_checker::type_checker::type_check,
};

/// What the driver should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Parse and type check.
    #[default]
    Check,
    /// Parse only and print the S-expression projection.
    SExpr,
    /// Lex only and print the token stream.
    Tokens,
}

/// The result of a driver run: text meant for stdout and the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOutput {
    pub stdout: String,
    pub ok: bool,
}

pub struct Driver {
    source: String,
    mode: Mode,
    verbose: bool,
}

impl Driver {
    pub fn new(source: String) -> Self {
        Self {
            source,
            mode: Mode::Check,
            verbose: false,
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Print phase timings to stderr.
    pub fn set_verbose(&mut self, enabled: bool) {
        self.verbose = enabled;
    }

    /// Run the pipeline, sending every diagnostic to `error_printer`.
    pub fn compile(&self, error_printer: &mut dyn ErrorPrinter) -> DriverOutput {
        match self.mode {
            Mode::Tokens => self.dump_tokens(error_printer),
            Mode::SExpr => {
                let start = Instant::now();
                let (items, ok) = parse_with_error_printer(&self.source, error_printer);
                self.log_timing("Parsed", start);

                DriverOutput {
                    stdout: sexpr_items(&items),
                    ok,
                }
            }
            Mode::Check => self.check(error_printer),
        }
    }

    fn check(&self, error_printer: &mut dyn ErrorPrinter) -> DriverOutput {
        let start = Instant::now();
        let (items, parsed) = parse_with_error_printer(&self.source, error_printer);
        self.log_timing("Parsed", start);

        if !parsed {
            return DriverOutput {
                stdout: String::new(),
                ok: false,
            };
        }

        let type_check_start = Instant::now();
        let (type_checker, ok) = type_check(&items);
        self.log_timing("Type checked", type_check_start);

        for error in type_checker.get_errors() {
            error_printer.report(&self.source, error);
        }

        if self.verbose {
            eprintln!("Total time: {:?}", start.elapsed());
        }

        DriverOutput {
            stdout: String::new(),
            ok,
        }
    }

    /// One `line:col lexeme` per token. Lexical errors are reported and
    /// skipped.
    fn dump_tokens(&self, error_printer: &mut dyn ErrorPrinter) -> DriverOutput {
        let start = Instant::now();
        let mut lexer = Lexer::new(self.source.clone());
        let mut stdout = String::new();
        let mut ok = true;

        loop {
            match lexer.advance() {
                Ok(token) if token.kind == TokenKind::EOF => break,
                Ok(token) => {
                    stdout.push_str(&token.to_string());
                    stdout.push('\n');
                }
                Err(error) => {
                    ok = false;
                    error_printer.report(&self.source, &error);
                }
            }
        }

        self.log_timing("Tokenized", start);

        DriverOutput { stdout, ok }
    }

    fn log_timing(&self, phase: &str, start: Instant) {
        if self.verbose {
            eprintln!("{} in {:?}", phase, start.elapsed());
        }
    }
}

/// Runs every line of `input` as a program of its own, in `mode`, writing
/// each run's stdout text to `output` as soon as the line is handled.
///
/// Failing lines do not stop the loop.
///
/// # Returns
///
/// Whether every line succeeded.
pub fn run_repl<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    mode: Mode,
    verbose: bool,
    error_printer: &mut dyn ErrorPrinter,
) -> io::Result<bool> {
    let mut ok = true;

    for line in input.lines() {
        let mut driver = Driver::new(line?);
        driver.set_mode(mode);
        driver.set_verbose(verbose);

        let result = driver.compile(error_printer);
        ok &= result.ok;

        output.write_all(result.stdout.as_bytes())?;
        output.flush()?;
    }

    Ok(ok)
}
