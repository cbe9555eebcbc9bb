/// Whole-run errors.
///
/// Defines the host-facing error type returned by the one-call interpreter
/// entry point, wrapping either parser diagnostics or a runtime error.
pub mod interpret_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source code. Parse errors include syntax mistakes, unexpected tokens and
/// unrecognized input bytes, all tagged with the source line.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unknown operators, bad builtin
/// arguments, out-of-range assignments and division by zero.
pub mod runtime_error;

pub use interpret_error::InterpretError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
