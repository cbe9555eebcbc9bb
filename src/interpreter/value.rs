/// Core runtime value representation.
///
/// Defines the `Value` enum covering every type a program can produce,
/// along with the shared function and hash-pair payloads.
pub mod core;

/// Hash key derivation.
///
/// Defines the `HashKey` type used to index hash values. Only integers,
/// booleans and strings are hashable; equal payloads yield equal keys.
pub mod hash_key;
