/// The environment module manages lexical scopes.
///
/// An environment maps names to values and optionally points at the scope
/// enclosing it, forming the scope chain that lookups and rebinding walk.
/// Environments are shared by reference so closures keep their defining
/// scope alive and observe its mutations.
///
/// # Responsibilities
/// - Stores name → value bindings per scope.
/// - Walks outer scopes on lookup and on rebinding.
/// - Supplies fresh enclosed scopes for calls and loops.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, control flow and `return` propagation.
/// - Reports runtime errors such as type mismatches or invalid operations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Surfaces invalid input bytes for the parser to diagnose.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements. This enables later phases to analyze and execute user
/// code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Resolves operator precedence and associativity (Pratt parsing).
/// - Collects diagnostics with source lines and recovers between
///   statements.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation,
/// such as integers, booleans, strings, arrays, hashes and functions. It
/// also provides hash key derivation, truthiness, type names and the
/// canonical textual rendering of every value.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements equality, display, and hash-key derivation.
/// - Gives arrays and hashes shared, mutable interiors.
pub mod value;
