use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// Reports whether a value takes part in plain equality comparisons.
///
/// Booleans and `null` compare by identity; everything else either has a
/// type-specific comparison (integers, strings) or none at all.
const fn is_identity_comparable(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Null)
}

impl Evaluator<'_> {
    /// Evaluates an infix operation on two already-computed operands.
    ///
    /// Dispatch, in order:
    /// - two integers: full arithmetic and comparison set;
    /// - two strings: concatenation with `+`, bytewise `<` `>` `==` `!=`;
    /// - booleans and `null`: `==` and `!=` by identity, in any mix;
    /// - otherwise a type mismatch (different types) or unknown operator
    ///   (same type, no such operation) error.
    ///
    /// # Parameters
    /// - `operator`: The infix operator.
    /// - `left`: Left operand value.
    /// - `right`: Right operand value.
    ///
    /// # Returns
    /// The computed value or the corresponding error.
    pub(in crate::interpreter::evaluator) fn eval_infix(operator: InfixOperator,
                                                        left: &Value,
                                                        right: &Value)
                                                        -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(l), Value::Integer(r)) => Self::eval_integer_infix(operator, *l, *r),
            (Value::Str(l), Value::Str(r)) => Self::eval_string_infix(operator, l, r),
            _ => {
                if is_identity_comparable(left) && is_identity_comparable(right) {
                    match operator {
                        InfixOperator::Equal => return Ok(Value::Bool(left == right)),
                        InfixOperator::NotEqual => return Ok(Value::Bool(left != right)),
                        _ => {},
                    }
                }

                if left.type_name() == right.type_name() {
                    Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                             operator,
                                                             right: right.type_name() })
                } else {
                    Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                     operator,
                                                     right: right.type_name() })
                }
            },
        }
    }

    /// Integer arithmetic and comparisons.
    ///
    /// `+ - * /` yield integers, with division truncating toward zero;
    /// the comparison operators yield booleans. Overflow and division by
    /// zero are runtime errors, not wraparound.
    fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
        match operator {
            InfixOperator::Add => {
                left.checked_add(right).map(Value::Integer).ok_or(RuntimeError::Overflow)
            },
            InfixOperator::Sub => {
                left.checked_sub(right).map(Value::Integer).ok_or(RuntimeError::Overflow)
            },
            InfixOperator::Mul => {
                left.checked_mul(right).map(Value::Integer).ok_or(RuntimeError::Overflow)
            },
            InfixOperator::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.checked_div(right).map(Value::Integer).ok_or(RuntimeError::Overflow)
            },
            InfixOperator::Less => Ok(Value::Bool(left < right)),
            InfixOperator::Greater => Ok(Value::Bool(left > right)),
            InfixOperator::Equal => Ok(Value::Bool(left == right)),
            InfixOperator::NotEqual => Ok(Value::Bool(left != right)),
        }
    }

    /// String concatenation and bytewise comparisons.
    fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult<Value> {
        match operator {
            InfixOperator::Add => Ok(Value::Str(format!("{left}{right}"))),
            InfixOperator::Less => Ok(Value::Bool(left < right)),
            InfixOperator::Greater => Ok(Value::Bool(left > right)),
            InfixOperator::Equal => Ok(Value::Bool(left == right)),
            InfixOperator::NotEqual => Ok(Value::Bool(left != right)),
            InfixOperator::Sub | InfixOperator::Mul | InfixOperator::Div => {
                Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                         operator,
                                                         right: "STRING" })
            },
        }
    }
}
