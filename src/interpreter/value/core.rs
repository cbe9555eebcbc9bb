use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::Block,
    interpreter::{environment::Environment, evaluator::builtin::Builtin, value::hash_key::HashKey},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, function returns, and conditional evaluations. Arrays and
/// hashes share their interiors: two bindings to the same array observe
/// the same mutations.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A string of bytes, compared and measured bytewise.
    Str(String),
    /// An ordered, mutable sequence of values, shared by reference.
    Array(Rc<RefCell<Vec<Self>>>),
    /// A mutable key/value mapping, shared by reference.
    Hash(Rc<RefCell<HashMap<HashKey, HashPair>>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A native function registered under a fixed name.
    Builtin(Builtin),
    /// Internal carrier for a `return` travelling out of a function body.
    ///
    /// Unwrapped at function-call boundaries and at the program top level;
    /// never observable by user code.
    Return(Box<Self>),
}

/// A user-defined function value.
///
/// The captured environment is the one in effect where the `fn` literal
/// was evaluated, which is what makes closures lexical: mutations in that
/// environment stay visible across calls.
pub struct FunctionValue {
    /// Parameter names, in order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The defining environment, shared with its scope chain.
    pub env:        Rc<RefCell<Environment>>,
}

/// One entry of a hash value.
///
/// Keeps the original key value next to the stored value so iteration and
/// printing can recover the key as written.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as the program supplied it.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl Value {
    /// Returns the language-level type name of the value.
    ///
    /// These names appear verbatim in runtime error messages.
    ///
    /// # Example
    /// ```
    /// use canopy::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
        }
    }

    /// Reports whether the value counts as true in a condition.
    ///
    /// Only `false` and `null` are falsy; every other value — including
    /// `0` and the empty string — is truthy.
    ///
    /// # Example
    /// ```
    /// use canopy::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }
}

impl PartialEq for Value {
    /// Structural equality for primitives and collection contents;
    /// identity for functions, which have no meaningful structural
    /// comparison.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            (Self::Return(a), Self::Return(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value in its canonical textual form.
    ///
    /// Strings print raw (no quotes); arrays and hashes print their
    /// elements recursively; hash iteration order is unspecified.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;

                for (index, pair) in pairs.borrow().values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{}: {}", pair.key, pair.value)?;
                }

                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "fn(")?;

                for (index, parameter) in function.parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{parameter}")?;
                }

                write!(f, ") {{ {} }}", function.body)
            },
            Self::Builtin(builtin) => write!(f, "builtin function `{}`", builtin.name()),
            Self::Return(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Debug for FunctionValue {
    /// The captured environment is omitted: closures can appear in their
    /// own defining scope, and following that edge would not terminate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}
