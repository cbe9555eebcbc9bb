use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::usize_to_i64_checked,
};

/// The fixed set of native functions callable from source code.
///
/// An identifier that resolves to no binding is looked up here before
/// failing, so bindings shadow builtins. Each builtin enforces its own
/// arity and argument types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `len(x)` — byte length of a string, element count of an array,
    /// pair count of a hash.
    Len,
    /// `first(arr)` — the first element, or `null` when empty.
    First,
    /// `last(arr)` — the last element, or `null` when empty.
    Last,
    /// `rest(arr)` — a new array of all but the first element, or `null`
    /// when empty.
    Rest,
    /// `push(arr, v)` — a new array with `v` appended; `arr` is left
    /// untouched.
    Push,
    /// `puts(args…)` — writes the arguments to the output sink.
    Puts,
    /// `range(start, end)` — the integers of `[start, end)` as an array.
    Range,
}

impl Builtin {
    /// Resolves a source-level name to a builtin.
    ///
    /// # Example
    /// ```
    /// use canopy::interpreter::evaluator::builtin::Builtin;
    ///
    /// assert_eq!(Builtin::lookup("len"), Some(Builtin::Len));
    /// assert_eq!(Builtin::lookup("missing"), None);
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "len" => Some(Self::Len),
            "first" => Some(Self::First),
            "last" => Some(Self::Last),
            "rest" => Some(Self::Rest),
            "push" => Some(Self::Push),
            "puts" => Some(Self::Puts),
            "range" => Some(Self::Range),
            _ => None,
        }
    }

    /// The name the builtin is registered under.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Len => "len",
            Self::First => "first",
            Self::Last => "last",
            Self::Rest => "rest",
            Self::Push => "push",
            Self::Puts => "puts",
            Self::Range => "range",
        }
    }

    /// Invokes the builtin on already-evaluated arguments.
    ///
    /// Only `puts` touches the output sink; every other builtin is pure
    /// with respect to it.
    ///
    /// # Parameters
    /// - `args`: The evaluated arguments, in order.
    /// - `out`: The sink `puts` writes to.
    ///
    /// # Returns
    /// The builtin's result, or an arity/type error.
    pub fn apply(self, args: &[Value], out: &mut dyn fmt::Write) -> EvalResult<Value> {
        match self {
            Self::Len => len(args),
            Self::First => first(args),
            Self::Last => last(args),
            Self::Rest => rest(args),
            Self::Push => push(args),
            Self::Puts => puts(args, out),
            Self::Range => range(args),
        }
    }
}

/// Fails unless exactly `want` arguments were supplied.
fn check_arity(builtin: &'static str, args: &[Value], want: usize) -> EvalResult<()> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongBuiltinArity { builtin,
                                              got: args.len(),
                                              want })
    }
}

/// Returns the length of a string (in bytes), array or hash.
fn len(args: &[Value]) -> EvalResult<Value> {
    check_arity("len", args, 1)?;

    match &args[0] {
        Value::Str(s) => Ok(Value::Integer(usize_to_i64_checked(s.len())?)),
        Value::Array(elements) => Ok(Value::Integer(usize_to_i64_checked(elements.borrow().len())?)),
        Value::Hash(pairs) => Ok(Value::Integer(usize_to_i64_checked(pairs.borrow().len())?)),
        other => Err(RuntimeError::UnsupportedLenArgument { type_name: other.type_name() }),
    }
}

/// Returns the first element of an array, or `null` when empty.
fn first(args: &[Value]) -> EvalResult<Value> {
    check_arity("first", args, 1)?;

    match &args[0] {
        Value::Array(elements) => Ok(elements.borrow().first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::ExpectedArrayArgument { builtin:   "first",
                                                           type_name: other.type_name(), }),
    }
}

/// Returns the last element of an array, or `null` when empty.
fn last(args: &[Value]) -> EvalResult<Value> {
    check_arity("last", args, 1)?;

    match &args[0] {
        Value::Array(elements) => Ok(elements.borrow().last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::ExpectedArrayArgument { builtin:   "last",
                                                           type_name: other.type_name(), }),
    }
}

/// Returns a new array holding all but the first element, or `null` when
/// the array is empty.
fn rest(args: &[Value]) -> EvalResult<Value> {
    check_arity("rest", args, 1)?;

    match &args[0] {
        Value::Array(elements) => {
            let elements = elements.borrow();
            if elements.is_empty() {
                return Ok(Value::Null);
            }

            Ok(Value::from(elements[1..].to_vec()))
        },
        other => Err(RuntimeError::ExpectedArrayArgument { builtin:   "rest",
                                                           type_name: other.type_name(), }),
    }
}

/// Returns a new array with the second argument appended to the first.
///
/// The input array is not mutated; callers relying on sharing must use
/// indexed assignment instead.
fn push(args: &[Value]) -> EvalResult<Value> {
    check_arity("push", args, 2)?;

    match &args[0] {
        Value::Array(elements) => {
            let mut extended = elements.borrow().clone();
            extended.push(args[1].clone());
            Ok(Value::from(extended))
        },
        other => Err(RuntimeError::ExpectedArrayToPush { type_name: other.type_name() }),
    }
}

/// Writes every argument to the sink, joined by `", "`, with a trailing
/// newline; yields `null`.
fn puts(args: &[Value], out: &mut dyn fmt::Write) -> EvalResult<Value> {
    let rendered = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    writeln!(out, "{rendered}").ok();

    Ok(Value::Null)
}

/// Returns the integers of `[start, end)` as an array.
///
/// An empty range (`end <= start`) yields an empty array.
fn range(args: &[Value]) -> EvalResult<Value> {
    check_arity("range", args, 2)?;

    let (start, end) = match (&args[0], &args[1]) {
        (Value::Integer(start), Value::Integer(end)) => (*start, *end),
        (Value::Integer(_), other) | (other, _) => {
            return Err(RuntimeError::ExpectedIntegerBound { type_name: other.type_name() });
        },
    };

    let elements: Vec<Value> = (start..end).map(Value::Integer).collect();
    Ok(Value::from(elements))
}
