use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The rendered messages are part of the language's observable behavior:
/// scripts and their tests match on them verbatim, so the `Display`
/// formats here are frozen.
pub enum RuntimeError {
    /// Tried to use a name with no binding and no builtin.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// An infix operator was applied to operands of different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// An infix operator was applied to types it is not defined for.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// A prefix operator was applied to a type it is not defined for.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type name of the operand.
        right:    &'static str,
    },
    /// A value that cannot serve as a hash key was used as one.
    UnusableHashKey {
        /// Type name of the offending key.
        type_name: &'static str,
    },
    /// `len` was applied to a type without a length.
    UnsupportedLenArgument {
        /// Type name of the argument.
        type_name: &'static str,
    },
    /// A builtin was called with the wrong number of arguments.
    WrongBuiltinArity {
        /// Name of the builtin.
        builtin: &'static str,
        /// How many arguments were supplied.
        got:     usize,
        /// How many arguments the builtin takes.
        want:    usize,
    },
    /// An array builtin (`first`, `last`, `rest`) received a non-array.
    ExpectedArrayArgument {
        /// Name of the builtin.
        builtin:   &'static str,
        /// Type name of the argument.
        type_name: &'static str,
    },
    /// `push` received a non-array as its first argument.
    ExpectedArrayToPush {
        /// Type name of the first argument.
        type_name: &'static str,
    },
    /// `range` received a non-integer bound.
    ExpectedIntegerBound {
        /// Type name of the offending argument.
        type_name: &'static str,
    },
    /// Indexed assignment past the end of an array.
    IndexOutOfRange {
        /// The requested index.
        index: i64,
        /// The array length.
        size:  usize,
    },
    /// Tried to index a type that does not support indexing.
    UnsupportedIndex {
        /// Type name of the indexed value.
        type_name: &'static str,
    },
    /// Tried an indexed assignment on a type that does not support it.
    UnsupportedIndexAssignment {
        /// Type name of the assignment target.
        type_name: &'static str,
    },
    /// Assigned to a name that was never declared with `let`.
    UndeclaredAssignment {
        /// The undeclared name.
        name: String,
    },
    /// The `for` iterable evaluated to a non-iterable type.
    UnsupportedIterable {
        /// Type name of the iterable.
        type_name: &'static str,
    },
    /// Tried to call a value that is neither a function nor a builtin.
    NotAFunction {
        /// Type name of the callee.
        type_name: &'static str,
    },
    /// A user-defined function was called with the wrong argument count.
    WrongArity {
        /// How many arguments were supplied.
        got:  usize,
        /// How many parameters the function declares.
        want: usize,
    },
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },
            Self::UnusableHashKey { type_name } => {
                write!(f, "unusable as hash key: {type_name}")
            },
            Self::UnsupportedLenArgument { type_name } => {
                write!(f, "argument to `len` not supported, got={type_name}")
            },
            Self::WrongBuiltinArity { builtin, got, want } => {
                write!(f, "wrong number of arguments to `{builtin}`. got={got}, want={want}")
            },
            Self::ExpectedArrayArgument { builtin, type_name } => {
                write!(f, "argument to `{builtin}` must be ARRAY, got {type_name}")
            },
            Self::ExpectedArrayToPush { type_name } => {
                write!(f, "first argument to `push` must be ARRAY, got {type_name}")
            },
            Self::ExpectedIntegerBound { type_name } => {
                write!(f, "arguments to `range` must be INTEGER, got {type_name}")
            },
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index out of range: got = {index} for array of size = {size}")
            },
            Self::UnsupportedIndex { type_name } => {
                write!(f, "index operator not supported: {type_name}")
            },
            Self::UnsupportedIndexAssignment { type_name } => {
                write!(f, "index assignment not supported: {type_name}")
            },
            Self::UndeclaredAssignment { name } => {
                write!(f, "invalid assignment to non declared identifier {name}")
            },
            Self::UnsupportedIterable { type_name } => {
                write!(f, "for iterator must resolve to array, string or hash got {type_name}")
            },
            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),
            Self::WrongArity { got, want } => {
                write!(f, "wrong number of arguments: got={got}, want={want}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Overflow => write!(f, "integer overflow"),
        }
    }
}

impl std::error::Error for RuntimeError {}
