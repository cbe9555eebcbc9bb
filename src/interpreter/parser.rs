/// Core parser machinery.
///
/// Defines the `Parser` type, the operator-precedence table and the
/// Pratt expression loop that drives all expression parsing.
pub mod core;

/// Expression parsing.
///
/// Prefix and infix parse functions for every expression form: literals,
/// identifiers, operator applications, conditionals, function literals,
/// calls, arrays, hashes and index expressions.
pub mod expression;

/// Statement parsing.
///
/// Dispatches on the leading token to parse `let`, `return`, `for`,
/// assignment and expression statements, including the promotion of
/// `target[index] = value` to an indexed assignment. Also handles
/// diagnostic recovery between statements.
pub mod statement;
