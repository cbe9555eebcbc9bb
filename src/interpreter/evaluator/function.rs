use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments left to right;
    /// the first failing argument aborts the call. The computed callee is
    /// then applied.
    pub(in crate::interpreter::evaluator) fn eval_call(&mut self,
                                                       callee: &Expr,
                                                       arguments: &[Expr],
                                                       env: &Rc<RefCell<Environment>>)
                                                       -> EvalResult<Value> {
        let callee = self.eval(callee, env)?;

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval(argument, env)?);
        }

        self.apply_function(callee, args)
    }

    /// Applies a callable value to already-computed arguments.
    ///
    /// A user-defined function runs its body in a fresh environment
    /// enclosed by its *captured* scope — not the caller's — with one
    /// binding per parameter. A `return` carrier coming out of the body
    /// is unwrapped here, exactly once. Builtins dispatch to their native
    /// implementation.
    ///
    /// # Parameters
    /// - `callee`: The value in call position.
    /// - `arguments`: The evaluated arguments, in order.
    ///
    /// # Returns
    /// The call's result, or an error for non-callables and arity
    /// mismatches.
    fn apply_function(&mut self, callee: Value, arguments: Vec<Value>) -> EvalResult<Value> {
        match callee {
            Value::Function(function) => {
                if arguments.len() != function.parameters.len() {
                    return Err(RuntimeError::WrongArity { got:  arguments.len(),
                                                          want: function.parameters.len(), });
                }

                let env = Environment::new_enclosed(&function.env);
                {
                    let mut scope = env.borrow_mut();
                    for (parameter, argument) in function.parameters.iter().zip(arguments) {
                        scope.set(parameter.clone(), argument);
                    }
                }

                let result = self.eval_block(&function.body, &env)?;
                Ok(unwrap_return(result))
            },
            Value::Builtin(builtin) => builtin.apply(&arguments, self.out),
            other => Err(RuntimeError::NotAFunction { type_name: other.type_name() }),
        }
    }
}

/// Strips the internal `return` carrier off a function body's result.
fn unwrap_return(value: Value) -> Value {
    match value {
        Value::Return(inner) => *inner,
        other => other,
    }
}
