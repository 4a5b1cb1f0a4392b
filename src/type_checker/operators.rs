//! Typing rules for binary operators.
//!
//! Each evaluator receives both operand types, may refine provisional
//! integer literals on either side, and returns the type of the whole
//! expression. A returned `is_err` means the operator rule itself was
//! broken; errors inside the operands are accounted for by the caller.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::ast::expressions::BinaryOperator;

use super::typeres::TypeRes;

pub type OperatorEvaluator = fn(&mut TypeRes, &mut TypeRes) -> TypeRes;

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<BinaryOperator, OperatorEvaluator> = {
        let mut map: HashMap<BinaryOperator, OperatorEvaluator> = HashMap::new();
        map.insert(BinaryOperator::Assign, evaluate_assignment);
        map.insert(BinaryOperator::Or, evaluate_logical);
        map.insert(BinaryOperator::And, evaluate_logical);
        map.insert(BinaryOperator::BitOr, evaluate_arithmetic);
        map.insert(BinaryOperator::BitXor, evaluate_arithmetic);
        map.insert(BinaryOperator::BitAnd, evaluate_arithmetic);
        map.insert(BinaryOperator::Equals, evaluate_equality);
        map.insert(BinaryOperator::NotEquals, evaluate_equality);
        map.insert(BinaryOperator::Less, evaluate_relational);
        map.insert(BinaryOperator::LessEquals, evaluate_relational);
        map.insert(BinaryOperator::Greater, evaluate_relational);
        map.insert(BinaryOperator::GreaterEquals, evaluate_relational);
        map.insert(BinaryOperator::Plus, evaluate_plus);
        map.insert(BinaryOperator::Minus, evaluate_arithmetic);
        map.insert(BinaryOperator::Multiply, evaluate_arithmetic);
        map.insert(BinaryOperator::Divide, evaluate_arithmetic);
        map.insert(BinaryOperator::Modulo, evaluate_arithmetic);
        map
    };
}

pub fn get_evaluator(operator: BinaryOperator) -> Option<OperatorEvaluator> {
    OPERATOR_LOOKUP.get(&operator).copied()
}

/// Lets a literal on either side pick up the other side's integer type.
fn infer_both(left: &mut TypeRes, right: &mut TypeRes) {
    left.try_infer(right);
    right.try_infer(left);
}

/// The value takes the variable's type; the result is the variable's type.
fn evaluate_assignment(left: &mut TypeRes, right: &mut TypeRes) -> TypeRes {
    right.infer(left);

    let mut result = left.clone();
    result.is_err = !left.compatible_with(right);
    result
}

fn evaluate_logical(left: &mut TypeRes, right: &mut TypeRes) -> TypeRes {
    TypeRes::boolean().with_err(!(left.is_boolean() && right.is_boolean()))
}

fn evaluate_equality(left: &mut TypeRes, right: &mut TypeRes) -> TypeRes {
    infer_both(left, right);
    TypeRes::boolean().with_err(!left.compatible_with(right))
}

fn evaluate_relational(left: &mut TypeRes, right: &mut TypeRes) -> TypeRes {
    infer_both(left, right);
    TypeRes::boolean().with_err(!(left.is_integer() && left.compatible_with(right)))
}

/// `+` adds integers and concatenates strings.
fn evaluate_plus(left: &mut TypeRes, right: &mut TypeRes) -> TypeRes {
    infer_both(left, right);

    let ok = (left.is_integer() || left.is_string()) && left.compatible_with(right);

    let mut result = left.clone();
    result.is_err = !ok;
    result
}

fn evaluate_arithmetic(left: &mut TypeRes, right: &mut TypeRes) -> TypeRes {
    infer_both(left, right);

    let mut result = left.clone();
    result.is_err = !(left.is_integer() && left.compatible_with(right));
    result
}
