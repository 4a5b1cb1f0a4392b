//! Printers over the AST.
//!
//! - [`SExprPrinter`] renders the S-expression projection used by the
//!   `--s-expr` dump and by tests.
//! - [`SourcePrinter`] renders an AST back into source text that parses to the
//!   same tree.
//!
//! Both are plain walkers; neither keeps state beyond indentation.

use super::{
    ast::{Expr, ExprWalker, Item, ItemWalker, Stmt, StmtWalker, TypeNameWalker},
    expressions::{
        BinaryExpr, BooleanExpr, CallExpr, LambdaExpr, NumberExpr, PrefixExpr, StringExpr,
        SymbolExpr,
    },
    statements::{BlockStmt, ExpressionStmt, FunctionItem, IfStmt, Param, VarDeclStmt, WhileStmt},
    types::{IntegerWidth, TypeName},
};

/// Renders every item as an S-expression followed by a newline.
pub fn sexpr_items(items: &[Item]) -> String {
    let mut printer = SExprPrinter;
    items
        .iter()
        .map(|item| format!("{}\n", item.walk(&mut printer)))
        .collect()
}

pub fn sexpr_type(type_name: &TypeName) -> String {
    type_name.walk(&mut TypeNamePrinter)
}

/// Formats a number like C's `%Le`: six fractional digits and a signed,
/// at least two digit exponent (`1.100000e+01`).
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.6e}", value);

    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => formatted,
    }
}

struct TypeNamePrinter;

impl TypeNameWalker for TypeNamePrinter {
    type Output = String;

    fn walk_boolean(&mut self) -> String {
        String::from("boolean")
    }

    fn walk_string(&mut self) -> String {
        String::from("string")
    }

    fn walk_integer(&mut self, signed: bool, width: IntegerWidth) -> String {
        format!("{}{}", if signed { "i" } else { "u" }, width.bits())
    }

    fn walk_tuple(&mut self, items: &[TypeName]) -> String {
        let items: Vec<String> = items.iter().map(|item| item.walk(self)).collect();
        format!("({})", items.join(", "))
    }

    fn walk_function(&mut self, params: &[TypeName], return_type: &TypeName) -> String {
        let params: Vec<String> = params.iter().map(|param| param.walk(self)).collect();
        format!("(fn({}) {})", params.join(" "), return_type.walk(self))
    }

    fn walk_unit(&mut self) -> String {
        String::from("()")
    }
}

pub struct SExprPrinter;

impl SExprPrinter {
    fn params(&mut self, parameters: &[Param]) -> String {
        let parameters: Vec<String> = parameters
            .iter()
            .map(|param| format!("{} :{}", param.name, sexpr_type(&param.type_name)))
            .collect();
        format!("({})", parameters.join(" "))
    }

    fn body(&mut self, body: &[Stmt]) -> String {
        body.iter()
            .map(|stmt| format!(" {}", stmt.walk(self)))
            .collect()
    }
}

impl ExprWalker for SExprPrinter {
    type Output = String;

    fn walk_number(&mut self, expr: &NumberExpr) -> String {
        format_number(expr.as_f64())
    }

    fn walk_boolean(&mut self, expr: &BooleanExpr) -> String {
        expr.value.to_string()
    }

    fn walk_string(&mut self, expr: &StringExpr) -> String {
        format!("(str '{}')", String::from_utf8_lossy(&expr.value))
    }

    fn walk_symbol(&mut self, expr: &SymbolExpr) -> String {
        expr.value.clone()
    }

    fn walk_binary(&mut self, expr: &BinaryExpr) -> String {
        format!(
            "({} {} {})",
            expr.operator.symbol(),
            expr.left.walk(self),
            expr.right.walk(self)
        )
    }

    fn walk_prefix(&mut self, expr: &PrefixExpr) -> String {
        format!("({} {})", expr.operator.symbol(), expr.right_expr.walk(self))
    }

    fn walk_call(&mut self, expr: &CallExpr) -> String {
        let mut output = format!("(call {}", expr.callee.walk(self));
        for argument in &expr.arguments {
            output.push(' ');
            output.push_str(&argument.walk(self));
        }
        output.push(')');
        output
    }

    fn walk_lambda(&mut self, expr: &LambdaExpr) -> String {
        format!(
            "(fn {} :{}{})",
            self.params(&expr.parameters),
            sexpr_type(&expr.return_type),
            self.body(&expr.body)
        )
    }
}

impl StmtWalker for SExprPrinter {
    type Output = String;

    fn walk_expression(&mut self, stmt: &ExpressionStmt) -> String {
        stmt.expression.walk(self)
    }

    fn walk_var_decl(&mut self, stmt: &VarDeclStmt) -> String {
        let mut output = String::from(if stmt.is_mutable { "(let-mut " } else { "(let " });
        output.push_str(&stmt.identifier);

        if let Some(explicit_type) = &stmt.explicit_type {
            output.push_str(" :");
            output.push_str(&sexpr_type(explicit_type));
        }

        output.push(' ');
        match &stmt.assigned_value {
            Some(value) => output.push_str(&value.walk(self)),
            None => output.push_str("NULL"),
        }
        output.push(')');
        output
    }

    fn walk_block(&mut self, stmt: &BlockStmt) -> String {
        format!("(block{})", self.body(&stmt.body))
    }

    fn walk_if(&mut self, stmt: &IfStmt) -> String {
        let mut output = format!(
            "(if {} {}",
            stmt.condition.walk(self),
            self.walk_block(&stmt.then_body)
        );
        if let Some(else_body) = &stmt.else_body {
            output.push(' ');
            output.push_str(&else_body.walk(self));
        }
        output.push(')');
        output
    }

    fn walk_while(&mut self, stmt: &WhileStmt) -> String {
        format!(
            "(while {} {})",
            stmt.condition.walk(self),
            self.walk_block(&stmt.body)
        )
    }
}

impl ItemWalker for SExprPrinter {
    type Output = String;

    fn walk_function(&mut self, item: &FunctionItem) -> String {
        format!(
            "(fn {} {} :{}{})",
            item.identifier,
            self.params(&item.parameters),
            sexpr_type(&item.return_type),
            self.body(&item.body)
        )
    }
}

/// Renders items back into source text.
pub fn source_items(items: &[Item]) -> String {
    let mut printer = SourcePrinter::new();
    let items: Vec<String> = items.iter().map(|item| item.walk(&mut printer)).collect();
    items.join("\n")
}

/// Re-escapes string bytes so the literal lexes back to the same bytes.
pub fn escape_string(bytes: &[u8]) -> String {
    let mut output = String::new();

    for byte in bytes {
        match byte {
            b'\\' => output.push_str("\\\\"),
            b'"' => output.push_str("\\\""),
            b'\n' => output.push_str("\\n"),
            b'\r' => output.push_str("\\r"),
            b'\t' => output.push_str("\\t"),
            0x07 => output.push_str("\\a"),
            0x08 => output.push_str("\\b"),
            0x20..=0x7e => output.push(*byte as char),
            _ => output.push_str(&format!("\\x{:02x}", byte)),
        }
    }

    output
}

/// Binary and prefix expressions are always parenthesized, so the printed
/// text never depends on precedence.
pub struct SourcePrinter {
    indent: usize,
}

impl Default for SourcePrinter {
    fn default() -> Self {
        SourcePrinter::new()
    }
}

impl SourcePrinter {
    pub fn new() -> Self {
        SourcePrinter { indent: 0 }
    }

    fn padding(&self) -> String {
        "    ".repeat(self.indent)
    }

    fn params(&mut self, parameters: &[Param]) -> String {
        let parameters: Vec<String> = parameters
            .iter()
            .map(|param| format!("{}: {}", param.name, param.type_name))
            .collect();
        format!("({})", parameters.join(", "))
    }

    fn body(&mut self, body: &[Stmt]) -> String {
        let mut output = String::from("{\n");
        self.indent += 1;
        for stmt in body {
            output.push_str(&stmt.walk(self));
            output.push('\n');
        }
        self.indent -= 1;
        output.push_str(&self.padding());
        output.push('}');
        output
    }

    /// An `if` without leading indentation, so `else if` chains stay on one line.
    fn if_chain(&mut self, stmt: &IfStmt) -> String {
        let mut output = format!(
            "if {} {}",
            stmt.condition.walk(self),
            self.body(&stmt.then_body.body)
        );

        match stmt.else_body.as_deref() {
            Some(Stmt::If(else_if)) => {
                output.push_str(" else ");
                output.push_str(&self.if_chain(else_if));
            }
            Some(Stmt::Block(block)) => {
                output.push_str(" else ");
                output.push_str(&self.body(&block.body));
            }
            Some(other) => {
                // The parser only builds `if` or block else branches.
                output.push_str(" else {\n");
                self.indent += 1;
                output.push_str(&other.walk(self));
                self.indent -= 1;
                output.push('\n');
                output.push_str(&self.padding());
                output.push('}');
            }
            None => {}
        }

        output
    }
}

impl ExprWalker for SourcePrinter {
    type Output = String;

    fn walk_number(&mut self, expr: &NumberExpr) -> String {
        expr.value.clone()
    }

    fn walk_boolean(&mut self, expr: &BooleanExpr) -> String {
        expr.value.to_string()
    }

    fn walk_string(&mut self, expr: &StringExpr) -> String {
        format!("\"{}\"", escape_string(&expr.value))
    }

    fn walk_symbol(&mut self, expr: &SymbolExpr) -> String {
        expr.value.clone()
    }

    fn walk_binary(&mut self, expr: &BinaryExpr) -> String {
        format!(
            "({} {} {})",
            expr.left.walk(self),
            expr.operator.symbol(),
            expr.right.walk(self)
        )
    }

    fn walk_prefix(&mut self, expr: &PrefixExpr) -> String {
        format!("({}{})", expr.operator.symbol(), expr.right_expr.walk(self))
    }

    fn walk_call(&mut self, expr: &CallExpr) -> String {
        let callee = match expr.callee.as_ref() {
            Expr::Lambda(_) => format!("({})", expr.callee.walk(self)),
            callee => callee.walk(self),
        };
        let arguments: Vec<String> = expr
            .arguments
            .iter()
            .map(|argument| argument.walk(self))
            .collect();
        format!("{}({})", callee, arguments.join(", "))
    }

    fn walk_lambda(&mut self, expr: &LambdaExpr) -> String {
        format!(
            "fn{} -> {} {}",
            self.params(&expr.parameters),
            expr.return_type,
            self.body(&expr.body)
        )
    }
}

impl StmtWalker for SourcePrinter {
    type Output = String;

    fn walk_expression(&mut self, stmt: &ExpressionStmt) -> String {
        format!("{}{};", self.padding(), stmt.expression.walk(self))
    }

    fn walk_var_decl(&mut self, stmt: &VarDeclStmt) -> String {
        let mut output = format!(
            "{}let {}{}",
            self.padding(),
            if stmt.is_mutable { "mut " } else { "" },
            stmt.identifier
        );

        if let Some(explicit_type) = &stmt.explicit_type {
            output.push_str(&format!(": {}", explicit_type));
        }

        if let Some(value) = &stmt.assigned_value {
            output.push_str(&format!(" = {}", value.walk(self)));
        }

        output.push(';');
        output
    }

    fn walk_block(&mut self, stmt: &BlockStmt) -> String {
        format!("{}{}", self.padding(), self.body(&stmt.body))
    }

    fn walk_if(&mut self, stmt: &IfStmt) -> String {
        format!("{}{}", self.padding(), self.if_chain(stmt))
    }

    fn walk_while(&mut self, stmt: &WhileStmt) -> String {
        format!(
            "{}while {} {}",
            self.padding(),
            stmt.condition.walk(self),
            self.body(&stmt.body.body)
        )
    }
}

impl ItemWalker for SourcePrinter {
    type Output = String;

    fn walk_function(&mut self, item: &FunctionItem) -> String {
        format!(
            "fn {}{} -> {} {}\n",
            item.identifier,
            self.params(&item.parameters),
            item.return_type,
            self.body(&item.body)
        )
    }
}
