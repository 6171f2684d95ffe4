use crate::{error::RuntimeError, interpreter::value::core::Value};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Uniquely identifies an integer, boolean or string for hash lookup.
///
/// A key pairs the value's type tag with a 64-bit identifier: the integer
/// value (unsigned-widened), `0`/`1` for booleans, and the FNV-1a 64-bit hash
/// of a string's bytes. Keys of different types can never collide because the
/// tag takes part in equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    tag: HashTag,
    id:  u64,
}

/// The type component of a [`HashKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum HashTag {
    Integer,
    Bool,
    Str,
}

/// Hashes `bytes` with 64-bit FNV-1a.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
                    (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
                })
}

impl Value {
    /// Derives the hash key identifying this value in a hash.
    ///
    /// Only integers, booleans and strings are hashable. Two values of the
    /// same type produce equal keys exactly when the values are equal.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(HashKey)`: For integer, boolean and string values.
    /// - `Err(RuntimeError::UnusableHashKey)`: For any other type.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// let one = Value::Integer(1).hash_key(1).unwrap();
    /// let yes = Value::Bool(true).hash_key(1).unwrap();
    ///
    /// assert_ne!(one, yes);
    /// assert!(Value::Null.hash_key(1).is_err());
    /// ```
    pub fn hash_key(&self, line: usize) -> Result<HashKey, RuntimeError> {
        match self {
            Self::Integer(n) => Ok(HashKey { tag: HashTag::Integer,
                                             id:  n.cast_unsigned(), }),
            Self::Bool(b) => Ok(HashKey { tag: HashTag::Bool,
                                          id:  u64::from(*b), }),
            Self::Str(s) => Ok(HashKey { tag: HashTag::Str,
                                         id:  fnv1a(s.as_bytes()), }),
            _ => Err(RuntimeError::UnusableHashKey { kind: self.kind(),
                                                     line }),
        }
    }
}
