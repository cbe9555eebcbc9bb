use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Safely converts a `usize` to `i64` if and only if it is exactly
/// representable.
///
/// Collection lengths and byte offsets cross into the language as
/// `INTEGER` values through this conversion.
///
/// ## Errors
/// Returns `Err(RuntimeError::Overflow)` if the value exceeds `i64::MAX`.
///
/// ## Parameters
/// - `value`: The unsigned size to convert.
///
/// ## Returns
/// - `Ok(i64)`: The converted value if it fits.
/// - `Err(RuntimeError::Overflow)`: If the value is too large.
///
/// ## Example
/// ```
/// use canopy::util::num::usize_to_i64_checked;
///
/// let result = usize_to_i64_checked(42);
/// assert_eq!(result.unwrap(), 42);
/// ```
pub fn usize_to_i64_checked(value: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow)
}

/// Safely converts an `i64` index to `usize`.
///
/// Callers are expected to have range-checked the index against the
/// collection first; a negative value still maps to an error rather than
/// wrapping.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds `usize::MAX`.
///
/// ## Parameters
/// - `value`: The signed index to convert.
/// - `error`: The error to return if the conversion fails.
///
/// ## Returns
/// - `Ok(usize)`: The converted index.
/// - `Err(error)`: If the value cannot index a collection.
///
/// ## Example
/// ```
/// use canopy::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(7, "negative!").unwrap(), 7);
/// assert!(i64_to_usize_checked(-1, "negative!").is_err());
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}
