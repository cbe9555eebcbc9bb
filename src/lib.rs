//! # canopy
//!
//! canopy is a tree-walking interpreter for a small dynamically typed,
//! expression-oriented scripting language. Source text is lexed, parsed
//! into an abstract syntax tree by a Pratt parser, and evaluated against a
//! lexically scoped environment. The language has integers, booleans,
//! strings, arrays, hashes, first-class functions with true closures,
//! `if`/`else` expressions, `for` loops, and indexed assignment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::fmt;

use crate::{
    error::InterpretError,
    interpreter::{environment::Environment, evaluator::core::Evaluator, parser::core::Parser},
};

pub use crate::interpreter::value::core::Value;

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of source code as a tree. The
/// AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Renders every node back to re-parseable source text.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, or evaluating code. It standardizes error reporting and
/// carries detailed information about failures.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Freezes the runtime error message formats scripts can observe.
/// - Supports integration with standard error handling traits and
///   reporting utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the
/// public API for interpreting and executing expressions or programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used throughout the
/// evaluator and builtins.
///
/// # Responsibilities
/// - Safely convert between `i64` and `usize` without silent data loss.
pub mod util;

/// Parses and evaluates a complete program, returning its final value.
///
/// The source is parsed first; any diagnostics abort the run before
/// evaluation starts. Evaluation then happens in a fresh top-level
/// environment, with `puts` output going to `out`.
///
/// # Errors
/// Returns [`InterpretError::Parse`] with the collected diagnostics when
/// the source does not parse, and [`InterpretError::Runtime`] when
/// evaluation stops on a runtime error.
///
/// # Examples
/// ```
/// use canopy::{Value, interpret};
///
/// let mut out = String::new();
///
/// // The final statement's value is returned.
/// let result = interpret("let add = fn(x, y) { x + y }; add(2, 3)", &mut out);
/// assert_eq!(result.unwrap(), Value::Integer(5));
///
/// // `puts` writes to the provided sink.
/// let result = interpret(r#"puts("hi", 42)"#, &mut out);
/// assert_eq!(result.unwrap(), Value::Null);
/// assert_eq!(out, "hi, 42\n");
///
/// // Runtime errors carry the language's frozen messages.
/// let error = interpret("5 + true", &mut out).unwrap_err();
/// assert_eq!(error.to_string(), "type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn interpret(source: &str, out: &mut dyn fmt::Write) -> Result<Value, InterpretError> {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(InterpretError::Parse(parser.errors().to_vec()));
    }

    let env = Environment::new();
    let mut evaluator = Evaluator::new(out);

    Ok(evaluator.eval_program(&program, &env)?)
}
