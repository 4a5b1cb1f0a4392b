use crate::Span;

use super::{
    expressions::{
        BinaryExpr, BooleanExpr, CallExpr, LambdaExpr, NumberExpr, PrefixExpr, StringExpr,
        SymbolExpr,
    },
    statements::{BlockStmt, ExpressionStmt, FunctionItem, IfStmt, VarDeclStmt, WhileStmt},
    types::{IntegerWidth, TypeName},
};

/// Statement
///
/// Every kind of statement that can appear in a function or block body.
#[derive(Debug, Clone)]
pub enum Stmt {
    Expression(ExpressionStmt),
    VarDecl(VarDeclStmt),
    Block(BlockStmt),
    If(IfStmt),
    While(WhileStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
        }
    }

    /// Invokes the handler of `walker` matching this statement's kind.
    pub fn walk<W: StmtWalker + ?Sized>(&self, walker: &mut W) -> W::Output {
        match self {
            Stmt::Expression(stmt) => walker.walk_expression(stmt),
            Stmt::VarDecl(stmt) => walker.walk_var_decl(stmt),
            Stmt::Block(stmt) => walker.walk_block(stmt),
            Stmt::If(stmt) => walker.walk_if(stmt),
            Stmt::While(stmt) => walker.walk_while(stmt),
        }
    }
}

pub trait StmtWalker {
    type Output;

    fn walk_expression(&mut self, stmt: &ExpressionStmt) -> Self::Output;
    fn walk_var_decl(&mut self, stmt: &VarDeclStmt) -> Self::Output;
    fn walk_block(&mut self, stmt: &BlockStmt) -> Self::Output;
    fn walk_if(&mut self, stmt: &IfStmt) -> Self::Output;
    fn walk_while(&mut self, stmt: &WhileStmt) -> Self::Output;
}

/// Expression
///
/// Parents own their children exclusively, so an expression tree has no
/// sharing and no cycles.
#[derive(Debug, Clone)]
pub enum Expr {
    Number(NumberExpr),
    Boolean(BooleanExpr),
    String(StringExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Call(CallExpr),
    Lambda(LambdaExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::Boolean(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Lambda(expr) => &expr.span,
        }
    }

    pub fn walk<W: ExprWalker + ?Sized>(&self, walker: &mut W) -> W::Output {
        match self {
            Expr::Number(expr) => walker.walk_number(expr),
            Expr::Boolean(expr) => walker.walk_boolean(expr),
            Expr::String(expr) => walker.walk_string(expr),
            Expr::Symbol(expr) => walker.walk_symbol(expr),
            Expr::Binary(expr) => walker.walk_binary(expr),
            Expr::Prefix(expr) => walker.walk_prefix(expr),
            Expr::Call(expr) => walker.walk_call(expr),
            Expr::Lambda(expr) => walker.walk_lambda(expr),
        }
    }
}

pub trait ExprWalker {
    type Output;

    fn walk_number(&mut self, expr: &NumberExpr) -> Self::Output;
    fn walk_boolean(&mut self, expr: &BooleanExpr) -> Self::Output;
    fn walk_string(&mut self, expr: &StringExpr) -> Self::Output;
    fn walk_symbol(&mut self, expr: &SymbolExpr) -> Self::Output;
    fn walk_binary(&mut self, expr: &BinaryExpr) -> Self::Output;
    fn walk_prefix(&mut self, expr: &PrefixExpr) -> Self::Output;
    fn walk_call(&mut self, expr: &CallExpr) -> Self::Output;
    fn walk_lambda(&mut self, expr: &LambdaExpr) -> Self::Output;
}

/// Item
///
/// A top level declaration. Functions are the only kind so far.
#[derive(Debug, Clone)]
pub enum Item {
    Function(FunctionItem),
}

impl Item {
    pub fn get_span(&self) -> &Span {
        match self {
            Item::Function(item) => &item.span,
        }
    }

    pub fn walk<W: ItemWalker + ?Sized>(&self, walker: &mut W) -> W::Output {
        match self {
            Item::Function(item) => walker.walk_function(item),
        }
    }
}

pub trait ItemWalker {
    type Output;

    fn walk_function(&mut self, item: &FunctionItem) -> Self::Output;
}

impl TypeName {
    pub fn walk<W: TypeNameWalker + ?Sized>(&self, walker: &mut W) -> W::Output {
        match self {
            TypeName::Boolean => walker.walk_boolean(),
            TypeName::String => walker.walk_string(),
            TypeName::Integer { signed, width } => walker.walk_integer(*signed, *width),
            TypeName::Tuple(items) => walker.walk_tuple(items),
            TypeName::Function {
                params,
                return_type,
            } => walker.walk_function(params, return_type),
            TypeName::Unit => walker.walk_unit(),
        }
    }
}

pub trait TypeNameWalker {
    type Output;

    fn walk_boolean(&mut self) -> Self::Output;
    fn walk_string(&mut self) -> Self::Output;
    fn walk_integer(&mut self, signed: bool, width: IntegerWidth) -> Self::Output;
    fn walk_tuple(&mut self, items: &[TypeName]) -> Self::Output;
    fn walk_function(&mut self, params: &[TypeName], return_type: &TypeName) -> Self::Output;
    fn walk_unit(&mut self) -> Self::Output;
}
