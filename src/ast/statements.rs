use crate::Span;

use super::{
    ast::{Expr, Stmt},
    types::TypeName,
};

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub explicit_type: Option<TypeName>,
    pub assigned_value: Option<Expr>,
    pub is_mutable: bool,
    pub span: Span,
}

/// `else_body` is either another `If` or a `Block`.
#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: BlockStmt,
    pub else_body: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
    pub span: Span,
}

/// A function or lambda parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub type_name: TypeName,
    pub span: Span,
}

/// Top level function declaration: `fn name (params) [-> type] { body }`.
#[derive(Debug, Clone)]
pub struct FunctionItem {
    pub identifier: String,
    pub parameters: Vec<Param>,
    pub body: Vec<Stmt>,
    pub return_type: TypeName,
    pub span: Span,
}

impl FunctionItem {
    /// The function's own type, as seen by callers.
    pub fn type_name(&self) -> TypeName {
        TypeName::function(
            self.parameters
                .iter()
                .map(|param| param.type_name.clone())
                .collect(),
            self.return_type.clone(),
        )
    }
}
