use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A structural key derived from a hashable value.
///
/// Two values are equal as keys if and only if their variant and payload
/// are equal: `1` and `1` collide, `1` and `"1"` do not. Only integers,
/// booleans and strings are hashable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// Key derived from an integer value.
    Integer(i64),
    /// Key derived from a boolean value.
    Bool(bool),
    /// Key derived from a string's byte content.
    Str(String),
}

impl Value {
    /// Derives the hash key for this value.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnusableHashKey` for any variant other than
    /// `Integer`, `Bool` or `Str`.
    ///
    /// # Example
    /// ```
    /// use canopy::interpreter::value::{core::Value, hash_key::HashKey};
    ///
    /// assert_eq!(Value::Integer(7).hash_key().unwrap(), HashKey::Integer(7));
    /// assert_eq!(Value::from("id").hash_key().unwrap(),
    ///            HashKey::Str("id".to_string()));
    /// assert!(Value::Null.hash_key().is_err());
    /// ```
    pub fn hash_key(&self) -> EvalResult<HashKey> {
        match self {
            Self::Integer(n) => Ok(HashKey::Integer(*n)),
            Self::Bool(b) => Ok(HashKey::Bool(*b)),
            Self::Str(s) => Ok(HashKey::Str(s.clone())),
            _ => Err(RuntimeError::UnusableHashKey { type_name: self.type_name() }),
        }
    }
}
