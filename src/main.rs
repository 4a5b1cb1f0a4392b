//! onec: type checks a program, or dumps its tokens or syntax tree.
//!
//! Usage: onec [--s-expr | --tokens] [--error-codes] [--verbose] [path]
//!
//! Without a path and with a terminal on stdin, every line typed is handled
//! as a program of its own.

use std::{
    io::{self, IsTerminal},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use colored::Colorize;
use onec::{
    driver::{run_repl, Driver, Mode},
    errors::{
        errors::Error,
        printer::{DefaultErrorPrinter, ErrorPrinter},
    },
};

#[derive(Parser, Debug)]
#[command(name = "onec")]
#[command(version = "0.1.0")]
#[command(about = "Front end for the one language: parses and type checks source files", long_about = None)]
struct Args {
    /// Source file; standard input is read when omitted
    #[arg(value_name = "PATH")]
    input: Option<PathBuf>,

    /// Only parse, and print the syntax tree as S-expressions
    #[arg(short = 'S', long, default_value_t = false, conflicts_with = "tokens")]
    s_expr: bool,

    /// Only lex, and print one token per line
    #[arg(long, default_value_t = false)]
    tokens: bool,

    /// Print error codes to stdout instead of formatted diagnostics
    #[arg(long, default_value_t = false)]
    error_codes: bool,

    /// Print phase timings to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// Prints each error code to stdout as soon as it is reported.
struct StdoutCodePrinter;

impl ErrorPrinter for StdoutCodePrinter {
    fn report(&mut self, _source: &str, error: &Error) {
        println!("{}", error.get_code());
    }
}

fn read_source(input: &Option<PathBuf>) -> io::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path),
        None => io::read_to_string(io::stdin()),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mode = if args.s_expr {
        Mode::SExpr
    } else if args.tokens {
        Mode::Tokens
    } else {
        Mode::Check
    };

    let mut error_printer: Box<dyn ErrorPrinter> = if args.error_codes {
        Box::new(StdoutCodePrinter)
    } else {
        Box::new(DefaultErrorPrinter)
    };

    if args.input.is_none() && io::stdin().is_terminal() {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        return match run_repl(
            stdin.lock(),
            &mut stdout,
            mode,
            args.verbose,
            error_printer.as_mut(),
        ) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                ExitCode::FAILURE
            }
        };
    }

    let source = match read_source(&args.input) {
        Ok(source) => source,
        Err(e) => {
            let name = args
                .input
                .as_ref()
                .map_or(String::from("<stdin>"), |path| path.display().to_string());
            eprintln!("{}: could not read '{}': {}", "error".red().bold(), name, e);
            return ExitCode::FAILURE;
        }
    };

    let mut driver = Driver::new(source);
    driver.set_verbose(args.verbose);
    driver.set_mode(mode);

    let output = driver.compile(error_printer.as_mut());
    print!("{}", output.stdout);

    if output.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
