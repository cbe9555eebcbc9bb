use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Block, Expr},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::core::{HashPair, Value},
    },
    util::num::usize_to_i64_checked,
};

impl Evaluator<'_> {
    /// Evaluates a `for index, value in iterable { … }` loop.
    ///
    /// The iterable is evaluated once, then the whole loop runs inside a
    /// single environment enclosed by the current scope, with the two
    /// loop names rebound on every step:
    ///
    /// - **arrays**: the element position and the element;
    /// - **strings**: the byte offset and the Unicode scalar value at it,
    ///   as a one-character string;
    /// - **hashes**: the original key and the stored value, in
    ///   unspecified order.
    ///
    /// The body is an ordinary block: a `return` raised inside it
    /// propagates out of the loop (and out of the enclosing function),
    /// and so does any error. A loop that runs to completion yields
    /// `null`.
    ///
    /// # Parameters
    /// - `index_name`: Name bound to the index (or key) on each step.
    /// - `value_name`: Name bound to the element (or value) on each step.
    /// - `iterable`: Expression producing the iterated value.
    /// - `body`: The loop body.
    /// - `env`: The scope enclosing the loop.
    ///
    /// # Returns
    /// `null`, a forwarded `return` carrier, or the first error raised.
    pub(in crate::interpreter::evaluator) fn eval_for(&mut self,
                                                      index_name: &str,
                                                      value_name: &str,
                                                      iterable: &Expr,
                                                      body: &Block,
                                                      env: &Rc<RefCell<Environment>>)
                                                      -> EvalResult<Value> {
        let iterable = self.eval(iterable, env)?;
        let loop_env = Environment::new_enclosed(env);

        match iterable {
            Value::Array(elements) => {
                // Iterate a snapshot: the body may mutate the array.
                let snapshot = elements.borrow().clone();

                for (offset, element) in snapshot.into_iter().enumerate() {
                    let index = Value::Integer(usize_to_i64_checked(offset)?);
                    bind_step(&loop_env, index_name, index, value_name, element);

                    let result = self.eval_block(body, &loop_env)?;
                    if matches!(result, Value::Return(_)) {
                        return Ok(result);
                    }
                }
            },
            Value::Str(contents) => {
                for (offset, character) in contents.char_indices() {
                    let index = Value::Integer(usize_to_i64_checked(offset)?);
                    let value = Value::Str(character.to_string());
                    bind_step(&loop_env, index_name, index, value_name, value);

                    let result = self.eval_block(body, &loop_env)?;
                    if matches!(result, Value::Return(_)) {
                        return Ok(result);
                    }
                }
            },
            Value::Hash(pairs) => {
                let snapshot: Vec<HashPair> = pairs.borrow().values().cloned().collect();

                for pair in snapshot {
                    bind_step(&loop_env, index_name, pair.key, value_name, pair.value);

                    let result = self.eval_block(body, &loop_env)?;
                    if matches!(result, Value::Return(_)) {
                        return Ok(result);
                    }
                }
            },
            other => {
                return Err(RuntimeError::UnsupportedIterable { type_name: other.type_name() });
            },
        }

        Ok(Value::Null)
    }
}

/// Rebinds the two loop names for one iteration step.
fn bind_step(loop_env: &Rc<RefCell<Environment>>,
             index_name: &str,
             index: Value,
             value_name: &str,
             value: Value) {
    let mut scope = loop_env.borrow_mut();
    scope.set(index_name, index);
    scope.set(value_name, value);
}
