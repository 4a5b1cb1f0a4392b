use crate::{
    ast::{
        ast::{Expr, ExprWalker, Item, ItemWalker, Stmt, StmtWalker},
        expressions::{
            BinaryExpr, BinaryOperator, BooleanExpr, CallExpr, LambdaExpr, NumberExpr, PrefixExpr,
            PrefixOperator, StringExpr, SymbolExpr,
        },
        statements::{
            BlockStmt, ExpressionStmt, FunctionItem, IfStmt, Param, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::{
    environment::Environments,
    operators::get_evaluator,
    typeres::{TypeRes, TypeResKind},
};

/// Walks the AST, resolving the type of every expression.
///
/// Type errors never stop the walk: each one is recorded in `errors` and
/// the offending node's resolution is marked with `is_err`, which then
/// spreads to everything containing it.
#[derive(Debug, Default)]
pub struct TypeChecker {
    pub environments: Environments,
    pub errors: Vec<Error>,
}

impl TypeChecker {
    /// Creates a checker with the global scope already open.
    pub fn new() -> Self {
        let mut environments = Environments::new();
        environments.push_scope();

        TypeChecker {
            environments,
            errors: vec![],
        }
    }

    pub fn get_errors(&self) -> &[Error] {
        &self.errors
    }

    fn report(&mut self, error_impl: ErrorImpl, span: Span) {
        self.errors.push(Error::new(error_impl, span));
    }

    /// Checks statements in the current scope, continuing past failures.
    fn check_body(&mut self, body: &[Stmt]) -> bool {
        let mut ok = true;
        for stmt in body {
            ok &= stmt.walk(self);
        }
        ok
    }

    fn declare_params(&mut self, parameters: &[Param]) {
        for param in parameters {
            self.environments
                .declare(param.name.clone(), TypeRes::from_type_name(&param.type_name));
        }
    }

    /// A condition must be an error free boolean.
    fn check_condition(&mut self, condition: &Expr) -> bool {
        let condition_type = condition.walk(self);

        if condition_type.is_err {
            return false;
        }

        if !condition_type.is_boolean() {
            self.report(
                ErrorImpl::NonBooleanCondition {
                    received: condition_type.to_string(),
                },
                *condition.get_span(),
            );
            return false;
        }

        true
    }
}

impl ExprWalker for TypeChecker {
    type Output = TypeRes;

    fn walk_number(&mut self, _expr: &NumberExpr) -> TypeRes {
        TypeRes::integer_literal()
    }

    fn walk_boolean(&mut self, _expr: &BooleanExpr) -> TypeRes {
        TypeRes::boolean()
    }

    fn walk_string(&mut self, _expr: &StringExpr) -> TypeRes {
        TypeRes::string()
    }

    fn walk_symbol(&mut self, expr: &SymbolExpr) -> TypeRes {
        match self.environments.lookup(&expr.value) {
            Some(type_res) => type_res.clone(),
            None => {
                self.report(
                    ErrorImpl::UndeclaredVariable {
                        variable: expr.value.clone(),
                    },
                    expr.span,
                );
                TypeRes::unknown().with_err(true)
            }
        }
    }

    fn walk_binary(&mut self, expr: &BinaryExpr) -> TypeRes {
        let mut left = expr.left.walk(self);
        let mut right = expr.right.walk(self);

        let Some(evaluator) = get_evaluator(expr.operator) else {
            return TypeRes::unknown().with_err(true);
        };

        let result = evaluator(&mut left, &mut right);
        let operands_failed = left.is_err || right.is_err;

        if result.is_err && !operands_failed {
            let error = if expr.operator == BinaryOperator::Assign {
                ErrorImpl::IncompatibleAssignment {
                    expected: left.to_string(),
                    received: right.to_string(),
                }
            } else {
                ErrorImpl::IncompatibleOperands {
                    operator: String::from(expr.operator.symbol()),
                    left: left.to_string(),
                    right: right.to_string(),
                }
            };
            self.report(error, expr.span);
        }

        result.with_err(operands_failed)
    }

    fn walk_prefix(&mut self, expr: &PrefixExpr) -> TypeRes {
        let operand = expr.right_expr.walk(self);

        let ok = match expr.operator {
            PrefixOperator::Not => operand.is_boolean(),
            PrefixOperator::Negate | PrefixOperator::Plus => operand.is_integer(),
        };

        if !ok && !operand.is_err {
            self.report(
                ErrorImpl::IncompatibleOperand {
                    operator: String::from(expr.operator.symbol()),
                    operand: operand.to_string(),
                },
                expr.span,
            );
        }

        operand.with_err(!ok)
    }

    fn walk_call(&mut self, expr: &CallExpr) -> TypeRes {
        let callee = expr.callee.walk(self);

        let TypeResKind::Function {
            params,
            return_type,
        } = &callee.kind
        else {
            if !callee.is_err {
                self.report(
                    ErrorImpl::NotCallable {
                        callee: callee.to_string(),
                    },
                    *expr.callee.get_span(),
                );
            }

            for argument in &expr.arguments {
                argument.walk(self);
            }

            return TypeRes::unknown().with_err(true);
        };

        let mut result = return_type.as_ref().clone().with_err(callee.is_err);

        if params.len() > expr.arguments.len() {
            self.report(
                ErrorImpl::InsufficientArguments {
                    expected: params.len(),
                    received: expr.arguments.len(),
                },
                expr.span,
            );
            result.is_err = true;
        } else if params.len() < expr.arguments.len() {
            self.report(
                ErrorImpl::TooManyArguments {
                    expected: params.len(),
                    received: expr.arguments.len(),
                },
                expr.span,
            );
            result.is_err = true;
        }

        for (position, argument) in expr.arguments.iter().enumerate() {
            let mut argument_type = argument.walk(self);

            if argument_type.is_err {
                result.is_err = true;
                continue;
            }

            let Some(param) = params.get(position) else {
                continue;
            };

            argument_type.infer(param);

            if !param.compatible_with(&argument_type) {
                self.report(
                    ErrorImpl::ArgumentTypeMismatch {
                        position: position + 1,
                        expected: param.to_string(),
                        received: argument_type.to_string(),
                    },
                    *argument.get_span(),
                );
                result.is_err = true;
            }
        }

        result
    }

    fn walk_lambda(&mut self, expr: &LambdaExpr) -> TypeRes {
        let lambda_type = TypeRes::function(
            expr.parameters
                .iter()
                .map(|param| TypeRes::from_type_name(&param.type_name))
                .collect(),
            TypeRes::from_type_name(&expr.return_type),
        );

        self.environments.push_scope();
        self.declare_params(&expr.parameters);
        let ok = self.check_body(&expr.body);
        self.environments.pop_scope();

        lambda_type.with_err(!ok)
    }
}

impl StmtWalker for TypeChecker {
    type Output = bool;

    fn walk_expression(&mut self, stmt: &ExpressionStmt) -> bool {
        !stmt.expression.walk(self).is_err
    }

    fn walk_var_decl(&mut self, stmt: &VarDeclStmt) -> bool {
        let mut value_type = match &stmt.assigned_value {
            Some(value) => value.walk(self),
            None => TypeRes::unknown(),
        };

        let mut variable_type = match &stmt.explicit_type {
            Some(explicit_type) => TypeRes::from_type_name(explicit_type),
            None => value_type.clone(),
        };

        variable_type.infer(&value_type);
        value_type.try_infer(&variable_type);

        let mut ok = !value_type.is_err;

        if let Some(value) = &stmt.assigned_value {
            if ok && !variable_type.compatible_with(&value_type) {
                self.report(
                    ErrorImpl::IncompatibleInitialization {
                        variable: stmt.identifier.clone(),
                        expected: variable_type.to_string(),
                        received: value_type.to_string(),
                    },
                    *value.get_span(),
                );
                ok = false;
            }
        }

        self.environments
            .declare(stmt.identifier.clone(), variable_type);

        ok
    }

    fn walk_block(&mut self, stmt: &BlockStmt) -> bool {
        self.environments.push_scope();
        let ok = self.check_body(&stmt.body);
        self.environments.pop_scope();

        ok
    }

    fn walk_if(&mut self, stmt: &IfStmt) -> bool {
        let mut ok = self.check_condition(&stmt.condition);

        ok &= self.walk_block(&stmt.then_body);

        if let Some(else_body) = &stmt.else_body {
            ok &= else_body.walk(self);
        }

        ok
    }

    fn walk_while(&mut self, stmt: &WhileStmt) -> bool {
        let mut ok = self.check_condition(&stmt.condition);
        ok &= self.walk_block(&stmt.body);

        ok
    }
}

impl ItemWalker for TypeChecker {
    type Output = bool;

    /// The function is bound before its body is checked, so it can call
    /// itself. Items declared later are not visible yet.
    fn walk_function(&mut self, item: &FunctionItem) -> bool {
        self.environments.declare(
            item.identifier.clone(),
            TypeRes::from_type_name(&item.type_name()),
        );

        self.environments.push_scope();
        self.declare_params(&item.parameters);
        let ok = self.check_body(&item.body);
        self.environments.pop_scope();

        ok
    }
}

/// Type checks a whole program.
///
/// # Returns
///
/// The checker, holding every diagnostic found, and whether the program is
/// well typed.
pub fn type_check(items: &[Item]) -> (TypeChecker, bool) {
    let mut type_checker = TypeChecker::new();

    let mut ok = true;
    for item in items {
        ok &= item.walk(&mut type_checker);
    }

    debug_assert_eq!(type_checker.environments.depth(), 1);

    (type_checker, ok)
}
