/// Core value representation.
///
/// Defines the `Value` enum covering every runtime type, the `HashPair` and
/// `FunctionValue` payloads, type tags, truthiness, equality and the human
/// display forms.
pub mod core;

/// Hash key derivation.
///
/// Defines the type-tagged 64-bit `HashKey` used to index hash values, and
/// the FNV-1a hashing of string keys.
pub mod hash_key;
