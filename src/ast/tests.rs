use crate::{
    ast::{
        ast::{Expr, ExprWalker, Item},
        expressions::{
            BinaryExpr, BooleanExpr, CallExpr, LambdaExpr, NumberExpr, PrefixExpr, StringExpr,
            SymbolExpr,
        },
        printer::{escape_string, format_number, sexpr_items, sexpr_type, source_items},
        types::{IntegerWidth, TypeName},
    },
    errors::printer::ErrorCodePrinter,
    parser::parser::parse_with_error_printer,
    Span,
};

fn parse_ok(source: &str) -> Vec<Item> {
    let mut printer = ErrorCodePrinter::new();
    let (items, ok) = parse_with_error_printer(source, &mut printer);
    assert!(ok, "unexpected errors {:?} for {:?}", printer.codes, source);
    items
}

/// Counts the symbols in an expression tree.
struct SymbolCounter;

impl ExprWalker for SymbolCounter {
    type Output = usize;

    fn walk_number(&mut self, _expr: &NumberExpr) -> usize {
        0
    }

    fn walk_boolean(&mut self, _expr: &BooleanExpr) -> usize {
        0
    }

    fn walk_string(&mut self, _expr: &StringExpr) -> usize {
        0
    }

    fn walk_symbol(&mut self, _expr: &SymbolExpr) -> usize {
        1
    }

    fn walk_binary(&mut self, expr: &BinaryExpr) -> usize {
        expr.left.walk(self) + expr.right.walk(self)
    }

    fn walk_prefix(&mut self, expr: &PrefixExpr) -> usize {
        expr.right_expr.walk(self)
    }

    fn walk_call(&mut self, expr: &CallExpr) -> usize {
        expr.callee.walk(self)
            + expr
                .arguments
                .iter()
                .map(|argument| argument.walk(self))
                .sum::<usize>()
    }

    fn walk_lambda(&mut self, _expr: &LambdaExpr) -> usize {
        0
    }
}

#[test]
fn test_walker_dispatch() {
    let symbol = |name: &str| {
        Expr::Symbol(SymbolExpr {
            value: String::from(name),
            span: Span::default(),
        })
    };

    let call = Expr::Call(CallExpr {
        callee: Box::new(symbol("f")),
        arguments: vec![
            symbol("a"),
            Expr::Number(NumberExpr {
                value: String::from("1"),
                span: Span::default(),
            }),
            symbol("b"),
        ],
        span: Span::default(),
    });

    assert_eq!(call.walk(&mut SymbolCounter), 3);
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(0.0), "0.000000e+00");
    assert_eq!(format_number(1.0), "1.000000e+00");
    assert_eq!(format_number(11.0), "1.100000e+01");
    assert_eq!(format_number(0.25), "2.500000e-01");
    assert_eq!(format_number(1e120), "1.000000e+120");
}

#[test]
fn test_sexpr_type() {
    assert_eq!(sexpr_type(&TypeName::Boolean), "boolean");
    assert_eq!(sexpr_type(&TypeName::integer(false, IntegerWidth::Bits16)), "u16");
    assert_eq!(sexpr_type(&TypeName::Unit), "()");
    assert_eq!(
        sexpr_type(&TypeName::Tuple(vec![TypeName::String, TypeName::Boolean])),
        "(string, boolean)"
    );
    assert_eq!(
        sexpr_type(&TypeName::function(
            vec![TypeName::String, TypeName::integer(true, IntegerWidth::Bits8)],
            TypeName::Unit
        )),
        "(fn(string i8) ())"
    );
}

#[test]
fn test_type_name_display() {
    let function = TypeName::function(
        vec![TypeName::integer(true, IntegerWidth::Bits32), TypeName::String],
        TypeName::Tuple(vec![TypeName::Boolean]),
    );

    assert_eq!(function.to_string(), "fn(i32, string) -> (boolean)");
    assert_eq!(TypeName::Unit.to_string(), "()");
}

#[test]
fn test_escape_string() {
    assert_eq!(escape_string(b"plain text"), "plain text");
    assert_eq!(escape_string(b"a\"b\\c"), "a\\\"b\\\\c");
    assert_eq!(escape_string(b"\n\r\t\x07\x08"), "\\n\\r\\t\\a\\b");
    assert_eq!(escape_string(&[0x00, 0xff]), "\\x00\\xff");
}

#[test]
fn test_sexpr_lines() {
    let items = parse_ok("fn a() {}\nfn b(x: i32) -> i32 { x; }");
    assert_eq!(sexpr_items(&items), "(fn a () :())\n(fn b (x :i32) :i32 x)\n");
}

#[test]
fn test_source_printer() {
    let items = parse_ok("fn main(a: i32,) -> boolean { let mut b: i32 = a + 1 * 2; b == 3; }");

    assert_eq!(
        source_items(&items),
        "fn main(a: i32) -> boolean {\n    let mut b: i32 = (a + (1 * 2));\n    (b == 3);\n}\n"
    );
}

#[test]
fn test_source_printer_else_if() {
    let items = parse_ok("fn main() { if a { b; } else if c { d; } else { e; } }");

    assert_eq!(
        source_items(&items),
        "fn main() -> () {\n    if a {\n        b;\n    } else if c {\n        d;\n    } else {\n        e;\n    }\n}\n"
    );
}

#[test]
fn test_source_round_trip() {
    let programs = [
        "fn main() -> i32 { let mut x: i32 = 1; while x < 5 { x = x + 1; } x; }",
        "fn a(b: i32, c: string,) { -b * !c + d() || e; a = b = c; }",
        "fn f() { let g: fn(i32, (string, boolean)) -> fn() = fn(x: i32) -> () {}; (fn() {})(); }",
        r#"fn s() { let t = "quote \" tab \t byte \xff \a\b\\"; }"#,
        "fn c() { if a { { b; } } else if c { d; } else { while e { f(g, h,); } } }",
        "fn n() { 1.5 + 20 - 0.25; }",
    ];

    for program in programs {
        let original = sexpr_items(&parse_ok(program));
        let printed = source_items(&parse_ok(program));
        let reparsed = sexpr_items(&parse_ok(&printed));

        assert_eq!(original, reparsed, "round trip changed {:?}", printed);
    }
}
