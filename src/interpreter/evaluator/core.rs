use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::builtin::Builtin,
        value::core::{FunctionValue, HashPair, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. Propagating the error with `?`
/// at every composition site is what makes runtime errors short-circuit
/// operand lists, argument lists, blocks and index subexpressions.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks the AST and computes values.
///
/// The evaluator itself is almost stateless: all bindings live in the
/// [`Environment`] passed alongside each node. The one piece of state is
/// the output sink that `puts` writes to, so hosts can capture program
/// output instead of sharing stdout.
pub struct Evaluator<'out> {
    pub(in crate::interpreter::evaluator) out: &'out mut dyn fmt::Write,
}

impl<'out> Evaluator<'out> {
    /// Creates an evaluator writing `puts` output to `out`.
    pub fn new(out: &'out mut dyn fmt::Write) -> Self {
        Self { out }
    }

    /// Evaluates a whole program in the given environment.
    ///
    /// Statements run in order; the program's value is the value of its
    /// last statement. A top-level `return` stops execution and yields
    /// the returned value directly — this is the one place besides a
    /// function-call boundary where the return carrier is unwrapped.
    ///
    /// # Parameters
    /// - `program`: The parsed program; the caller must have checked that
    ///   parsing produced no diagnostics.
    /// - `env`: The top-level environment.
    ///
    /// # Returns
    /// The program's final value, or the first runtime error raised.
    pub fn eval_program(&mut self,
                        program: &Program,
                        env: &Rc<RefCell<Environment>>)
                        -> EvalResult<Value> {
        let mut result = Value::Null;

        for statement in &program.statements {
            result = self.eval_statement(statement, env)?;

            if let Value::Return(value) = result {
                return Ok(*value);
            }
        }

        Ok(result)
    }

    /// Evaluates a block of statements.
    ///
    /// Unlike [`Evaluator::eval_program`], a block forwards a return
    /// carrier *without* unwrapping it, so a `return` inside nested
    /// blocks keeps travelling until it reaches the function-call
    /// boundary (or the program level) that owns it.
    pub(in crate::interpreter::evaluator) fn eval_block(&mut self,
                                                        block: &Block,
                                                        env: &Rc<RefCell<Environment>>)
                                                        -> EvalResult<Value> {
        let mut result = Value::Null;

        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;

            if matches!(result, Value::Return(_)) {
                return Ok(result);
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// `let` and assignment statements yield `null`; expression
    /// statements yield their expression's value; `return` yields the
    /// internal carrier that blocks and loops forward.
    fn eval_statement(&mut self,
                      statement: &Statement,
                      env: &Rc<RefCell<Environment>>)
                      -> EvalResult<Value> {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval(value, env)?;
                env.borrow_mut().set(name.clone(), value);
                Ok(Value::Null)
            },
            Statement::Return { value } => {
                let value = self.eval(value, env)?;
                Ok(Value::Return(Box::new(value)))
            },
            Statement::Expression { expr } => self.eval(expr, env),
            Statement::Assign { name, value } => {
                let value = self.eval(value, env)?;

                if env.borrow_mut().update(name, value) {
                    Ok(Value::Null)
                } else {
                    Err(RuntimeError::UndeclaredAssignment { name: name.clone() })
                }
            },
            Statement::IndexAssign { target, index, value } => {
                self.eval_index_assignment(target, index, value, env)
            },
            Statement::For { index,
                             value,
                             iterable,
                             body, } => self.eval_for(index, value, iterable, body, env),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main dispatch of the interpreter; every expression
    /// variant is handled here or in the per-form modules it delegates
    /// to.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: The environment the expression is evaluated in.
    ///
    /// # Returns
    /// The computed value, or the first runtime error raised by a
    /// subexpression.
    pub fn eval(&mut self, expr: &Expr, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
        match expr {
            Expr::Identifier { name } => Self::eval_identifier(name, env),
            Expr::IntegerLiteral { value } => Ok(Value::Integer(*value)),
            Expr::StringLiteral { value } => Ok(Value::Str(value.clone())),
            Expr::BooleanLiteral { value } => Ok(Value::Bool(*value)),
            Expr::Prefix { operator, right } => {
                let right = self.eval(right, env)?;
                Self::eval_prefix(*operator, &right)
            },
            Expr::Infix { left, operator, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_infix(*operator, &left, &right)
            },
            Expr::If { condition,
                       consequence,
                       alternative, } => {
                let condition = self.eval(condition, env)?;

                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(Value::Null)
                }
            },
            Expr::FunctionLiteral { parameters, body } => {
                Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                           body:       body.clone(),
                                                           env:        Rc::clone(env), })))
            },
            Expr::Call { callee, arguments } => self.eval_call(callee, arguments, env),
            Expr::ArrayLiteral { elements } => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval(element, env)?);
                }
                Ok(Value::from(values))
            },
            Expr::Index { left, index } => {
                let left = self.eval(left, env)?;
                let index = self.eval(index, env)?;
                Self::eval_index(&left, &index)
            },
            Expr::HashLiteral { pairs } => self.eval_hash_literal(pairs, env),
        }
    }

    /// Resolves a name against the environment chain, then the builtins.
    ///
    /// Bindings shadow builtins, so `let len = 5` is legal and hides the
    /// native `len` for the rest of the scope.
    fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
        if let Some(value) = env.borrow().get(name) {
            return Ok(value);
        }

        if let Some(builtin) = Builtin::lookup(name) {
            return Ok(Value::Builtin(builtin));
        }

        Err(RuntimeError::IdentifierNotFound { name: name.to_string() })
    }

    /// Evaluates a hash literal into a fresh hash value.
    ///
    /// Pairs are evaluated in source order, key before value; a later
    /// duplicate key overwrites the earlier entry.
    fn eval_hash_literal(&mut self,
                         pairs: &[(Expr, Expr)],
                         env: &Rc<RefCell<Environment>>)
                         -> EvalResult<Value> {
        let mut map = HashMap::with_capacity(pairs.len());

        for (key_expr, value_expr) in pairs {
            let key = self.eval(key_expr, env)?;
            let hashed = key.hash_key()?;
            let value = self.eval(value_expr, env)?;

            map.insert(hashed, HashPair { key, value });
        }

        Ok(Value::Hash(Rc::new(RefCell::new(map))))
    }
}
