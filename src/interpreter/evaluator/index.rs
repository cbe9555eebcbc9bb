use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::core::{HashPair, Value},
    },
    util::num::i64_to_usize_checked,
};

impl Evaluator<'_> {
    /// Evaluates an index read, `left[index]`.
    ///
    /// Arrays accept integer indices; an index outside `[0, len)` reads
    /// as `null` rather than failing. Hashes accept any hashable key; a
    /// missing key also reads as `null`. Everything else cannot be
    /// indexed.
    ///
    /// # Parameters
    /// - `left`: The container value.
    /// - `index`: The index value.
    ///
    /// # Returns
    /// The element, `null` for misses, or an error for unusable keys and
    /// non-indexable containers.
    pub(in crate::interpreter::evaluator) fn eval_index(left: &Value,
                                                        index: &Value)
                                                        -> EvalResult<Value> {
        match (left, index) {
            (Value::Array(elements), Value::Integer(i)) => {
                let elements = elements.borrow();

                Ok(usize::try_from(*i).ok()
                                      .and_then(|position| elements.get(position).cloned())
                                      .unwrap_or(Value::Null))
            },
            (Value::Hash(pairs), index) => {
                let key = index.hash_key()?;

                Ok(pairs.borrow()
                        .get(&key)
                        .map_or(Value::Null, |pair| pair.value.clone()))
            },
            (left, _) => Err(RuntimeError::UnsupportedIndex { type_name: left.type_name() }),
        }
    }

    /// Evaluates an indexed assignment, `target[index] = value`.
    ///
    /// Subexpressions are evaluated index first, then the value, then the
    /// target container. Array assignment requires the index to be in
    /// range and yields the assigned value; hash assignment inserts or
    /// overwrites the pair and yields `null`.
    ///
    /// # Parameters
    /// - `target`: Expression producing the container.
    /// - `index`: Expression producing the index.
    /// - `value`: Expression producing the stored value.
    /// - `env`: The environment of the assignment.
    ///
    /// # Returns
    /// The assigned value for arrays, `null` for hashes, or an error.
    pub(in crate::interpreter::evaluator) fn eval_index_assignment(&mut self,
                                                                   target: &Expr,
                                                                   index: &Expr,
                                                                   value: &Expr,
                                                                   env: &Rc<RefCell<Environment>>)
                                                                   -> EvalResult<Value> {
        let index = self.eval(index, env)?;
        let value = self.eval(value, env)?;
        let target = self.eval(target, env)?;

        match (target, index) {
            (Value::Array(elements), Value::Integer(i)) => {
                let mut elements = elements.borrow_mut();
                let size = elements.len();

                let out_of_range = RuntimeError::IndexOutOfRange { index: i, size };
                let position = i64_to_usize_checked(i, out_of_range.clone())?;
                if position >= size {
                    return Err(out_of_range);
                }

                elements[position] = value.clone();
                Ok(value)
            },
            (Value::Hash(pairs), index) => {
                let hashed = index.hash_key()?;
                pairs.borrow_mut().insert(hashed, HashPair { key: index, value });
                Ok(Value::Null)
            },
            (target, _) => {
                Err(RuntimeError::UnsupportedIndexAssignment { type_name: target.type_name() })
            },
        }
    }
}
