use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Block,
    interpreter::{
        environment::EnvRef,
        evaluator::builtin::Builtin,
        value::hash_key::HashKey,
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, function returns, and conditional evaluations. Composite values
/// (arrays, hashes, functions) are reference counted so that cloning a value
/// never copies its contents.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// An immutable string value.
    Str(Rc<str>),
    /// The absence of a value, e.g. an `if` whose condition failed with no
    /// `else` branch, or an out-of-bounds array access.
    Null,
    /// An array of values.
    Array(Rc<Vec<Self>>),
    /// A hash table from hashable keys to values.
    ///
    /// Keyed by [`HashKey`]; the original key value is kept alongside each
    /// entry so hashes can be displayed.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A built-in function provided by the interpreter.
    Builtin(Builtin),
}

/// One entry of a hash value: the original key and the value bound to it.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written, e.g. `Value::Str("one")`.
    pub key:   Value,
    /// The value bound to the key.
    pub value: Value,
}

/// The payload of a [`Value::Function`].
///
/// Holds the parameter names, the body, and the environment that was current
/// when the function literal was evaluated. The environment is shared, not
/// copied: bindings added to the defining scope after the literal stay
/// visible to the function, which is what makes `let f = fn() { f() }` work.
#[derive(Clone)]
pub struct FunctionValue {
    /// The parameter names, in order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The lexical environment captured at the literal.
    pub env:        EnvRef,
}

// The captured environment may (through its bindings) contain this very
// function, so the derived Debug would recurse forever. Print everything but
// the environment.
impl std::fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Rc::new(value))
    }
}

impl Value {
    /// Returns the type tag of the value, as used in error messages.
    /// ## Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).kind(), "INTEGER");
    /// assert_eq!(Value::Null.kind(), "NULL");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
        }
    }

    /// Tests the value as a condition.
    ///
    /// Only `false` and `null` are falsy; every other value, including `0`
    /// and the empty string, counts as truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }
}

// Scalars compare by value; arrays, hashes and functions compare by identity
// (`a == a` holds, `[1] == [1]` does not). Identity keeps equality total on
// cyclic values such as a recursive closure.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::Array(left), Self::Array(right)) => Rc::ptr_eq(left, right),
            (Self::Hash(left), Self::Hash(right)) => Rc::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => left == right,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;

                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{}: {}", pair.key, pair.value)?;
                }

                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{\n{}\n}}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
        }
    }
}
