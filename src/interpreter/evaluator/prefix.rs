use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a prefix operation on an already-computed operand.
    ///
    /// Supported operators:
    /// - `Not`: truthiness negation, defined for every value. `!true` is
    ///   `false`, `!null` is `true`, and any other value — including `0`
    ///   and the empty string — negates to `false`.
    /// - `Negate`: arithmetic negation, defined for integers only.
    ///
    /// # Parameters
    /// - `operator`: The prefix operator.
    /// - `right`: The operand value.
    ///
    /// # Returns
    /// The computed value, or an error for `-` on a non-integer.
    pub(in crate::interpreter::evaluator) fn eval_prefix(operator: PrefixOperator,
                                                         right: &Value)
                                                         -> EvalResult<Value> {
        match operator {
            PrefixOperator::Not => Ok(Value::Bool(!right.is_truthy())),
            PrefixOperator::Negate => match right {
                Value::Integer(n) => {
                    n.checked_neg().map(Value::Integer).ok_or(RuntimeError::Overflow)
                },
                _ => {
                    Err(RuntimeError::UnknownPrefixOperator { operator,
                                                              right: right.type_name() })
                },
            },
        }
    }
}
