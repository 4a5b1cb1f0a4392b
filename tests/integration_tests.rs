//! Integration tests for the whole front end.
//!
//! These run source text through the driver the same way the `onec` binary
//! does: lexing, parsing and type checking, with diagnostics collected as
//! error codes.

use onec::{
    driver::{run_repl, Driver, DriverOutput, Mode},
    errors::printer::ErrorCodePrinter,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};
use std::path::PathBuf;

fn run(source: &str, mode: Mode) -> (DriverOutput, Vec<&'static str>) {
    let mut driver = Driver::new(source.to_string());
    driver.set_mode(mode);

    let mut printer = ErrorCodePrinter::new();
    let output = driver.compile(&mut printer);
    (output, printer.codes)
}

#[test]
fn test_file_compiles() {
    let dir = std::env::temp_dir().join("onec_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path: PathBuf = dir.join("file_compiles.one");

    std::fs::write(
        &path,
        r#"
        fn main() {
            let message: string = "hello";

            let a = 1;
            let b = 2;
            let c = 1 + 2;
        }
        "#,
    )
    .unwrap();

    let source = std::fs::read_to_string(&path).unwrap();
    let (output, codes) = run(&source, Mode::Check);

    assert!(output.ok, "unexpected errors {:?}", codes);
    assert!(codes.is_empty());
    assert_eq!(output.stdout, "");
}

#[test]
fn test_program_with_functions_and_loops() {
    let source = "
        fn add(a: i32, b: i32) -> i32 {
            a + b;
        }

        fn main() {
            let mut i: u8 = 0;
            let limit: u8 = 10;
            while i < limit {
                i = i + 1;
                if i == 5 {
                    add(1, 2);
                } else if !(i > 7) {
                    let double = fn(x: i32) -> i32 { x * 2; };
                    double(add(3, 4));
                }
            }
        }
    ";

    let (output, codes) = run(source, Mode::Check);
    assert!(output.ok, "unexpected errors {:?}", codes);
}

#[test]
fn test_type_errors_are_all_reported() {
    let source = "
        fn main() {
            let a: u8 = \"text\";
            let b = c;
            if 1 { }
            true + 1;
        }
    ";

    let (output, codes) = run(source, Mode::Check);
    assert!(!output.ok);
    assert_eq!(codes, vec!["E0609", "E0601", "E0608", "E0602"]);
}

#[test]
fn test_parse_error_skips_type_checking() {
    let (output, codes) = run("fn main() { let a = undeclared }", Mode::Check);

    assert!(!output.ok);
    assert_eq!(codes, vec!["E0503"]);
}

#[test]
fn test_stray_item_fails_with_empty_output() {
    let (output, codes) = run("    a", Mode::SExpr);

    assert!(!output.ok);
    assert_eq!(output.stdout, "");
    assert_eq!(codes, vec!["E0506"]);
}

#[test]
fn test_invalid_items_recover() {
    for source in [
        "func main() { let a = 0; }",
        ";;\n\nfn main() { let a = 0; }",
        "any number of meaningless tokens here\n\nfn main() { let a = 0; }",
    ] {
        let (output, codes) = run(source, Mode::Check);
        assert!(!output.ok);
        assert_eq!(codes, vec!["E0506"], "for {:?}", source);
    }
}

#[test]
fn test_empty_program() {
    let (output, codes) = run("", Mode::Check);
    assert!(output.ok);
    assert!(codes.is_empty());

    let (output, _) = run("   \n// only a comment\n", Mode::SExpr);
    assert!(output.ok);
    assert_eq!(output.stdout, "");
}

#[test]
fn test_sexpr_dump() {
    let (output, codes) = run(
        "fn main() { while a < b { a; } }\nfn id(x: u8) -> u8 { x; }",
        Mode::SExpr,
    );

    assert!(output.ok, "unexpected errors {:?}", codes);
    assert_eq!(
        output.stdout,
        "(fn main () :() (while (< a b) (block a)))\n(fn id (x :u8) :u8 x)\n"
    );
}

#[test]
fn test_sexpr_dump_does_not_type_check() {
    let (output, codes) = run("fn main() { undeclared + true; }", Mode::SExpr);
    assert!(output.ok);
    assert!(codes.is_empty());
}

#[test]
fn test_token_dump_lines_and_columns() {
    let (output, _) = run("fn main() {\n    return 0;\n}\n", Mode::Tokens);
    assert_eq!(
        output.stdout,
        "1:1 fn\n1:4 main\n1:8 (\n1:9 )\n1:11 {\n2:5 return\n2:12 0\n2:13 ;\n3:1 }\n"
    );

    let (output, _) = run("fn main > = <= abc 123", Mode::Tokens);
    assert_eq!(
        output.stdout,
        "1:1 fn\n1:4 main\n1:9 >\n1:11 =\n1:13 <=\n1:16 abc\n1:20 123\n"
    );
}

#[test]
fn test_token_dump_reports_lexical_errors() {
    let (output, codes) = run("a @ b", Mode::Tokens);

    assert!(!output.ok);
    assert_eq!(codes, vec!["E0001"]);
    assert_eq!(output.stdout, "1:1 a\n1:5 b\n");
}

#[test]
fn test_library_pipeline() {
    let (items, parsed) = parse("fn f(a: i16) -> i16 { a; }\nfn main() { let r: i16 = f(2); }");
    assert!(parsed);
    assert_eq!(items.len(), 2);

    let (type_checker, ok) = type_check(&items);
    assert!(ok);
    assert!(type_checker.get_errors().is_empty());
}

#[test]
fn test_repl_prints_each_line() {
    let input = "fn a() { }\nfn b(x: u8) -> u8 { x; }\nfn c() { let y = }\nfn d() { }\n";
    let mut output: Vec<u8> = vec![];
    let mut printer = ErrorCodePrinter::new();

    let ok = run_repl(input.as_bytes(), &mut output, Mode::SExpr, false, &mut printer).unwrap();

    assert!(!ok);
    assert_eq!(printer.codes, vec!["E0505"]);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "(fn a () :())\n(fn b (x :u8) :u8 x)\n(fn d () :())\n"
    );
}

#[test]
fn test_repl_checks_lines_separately() {
    let input = "fn f() { let a: u8 = true; }\nfn g() { 1; }\nfn main() { g(); }\n";
    let mut output: Vec<u8> = vec![];
    let mut printer = ErrorCodePrinter::new();

    let ok = run_repl(input.as_bytes(), &mut output, Mode::Check, false, &mut printer).unwrap();

    assert!(!ok);
    assert_eq!(printer.codes, vec!["E0609", "E0601"]);
    assert!(output.is_empty());
}

#[test]
fn test_repl_with_no_input() {
    let mut output: Vec<u8> = vec![];
    let mut printer = ErrorCodePrinter::new();

    let ok = run_repl("".as_bytes(), &mut output, Mode::Check, false, &mut printer).unwrap();

    assert!(ok);
    assert!(printer.codes.is_empty());
}
