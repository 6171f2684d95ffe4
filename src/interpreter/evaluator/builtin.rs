use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The built-in functions of the language.
///
/// Builtins are first-class values: looking up one of these names (when no
/// user binding shadows it) yields a `Value::Builtin`, which can be passed
/// around and called like any function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `len(x)`: byte length of a string or element count of an array.
    Len,
    /// `first(arr)`: first element of an array, `null` if empty.
    First,
    /// `last(arr)`: last element of an array, `null` if empty.
    Last,
    /// `rest(arr)`: a new array of all but the first element, `null` if
    /// empty.
    Rest,
    /// `push(arr, x)`: a new array with `x` appended; `arr` is unchanged.
    Push,
    /// `puts(...)`: prints each argument on its own line, returns `null`.
    Puts,
}

impl Builtin {
    /// Resolves a name to its builtin, if there is one.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "len" => Some(Self::Len),
            "first" => Some(Self::First),
            "last" => Some(Self::Last),
            "rest" => Some(Self::Rest),
            "push" => Some(Self::Push),
            "puts" => Some(Self::Puts),
            _ => None,
        }
    }

    /// Returns the name the builtin is bound to.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Len => "len",
            Self::First => "first",
            Self::Last => "last",
            Self::Rest => "rest",
            Self::Push => "push",
            Self::Puts => "puts",
        }
    }

    /// Invokes the builtin on already-evaluated argument values.
    ///
    /// # Parameters
    /// - `args`: Evaluated argument values.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The builtin's result, or an error describing an arity or argument
    /// type violation.
    pub fn apply(self, args: &[Value], line: usize) -> EvalResult<Value> {
        match self {
            Self::Len => len(args, line),
            Self::First => first(args, line),
            Self::Last => last(args, line),
            Self::Rest => rest(args, line),
            Self::Push => push(args, line),
            Self::Puts => puts(args),
        }
    }
}

/// Checks that a builtin received exactly `want` arguments.
fn check_arity(args: &[Value], want: usize, line: usize) -> Result<(), RuntimeError> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                               want,
                                               line })
    }
}

/// Extracts the element slice of an array argument.
fn as_array<'a>(builtin: &'static str,
                value: &'a Value,
                line: usize)
                -> Result<&'a [Value], RuntimeError> {
    match value {
        Value::Array(elements) => Ok(elements.as_slice()),
        other => Err(RuntimeError::UnsupportedArgument { builtin,
                                                         kind: other.kind(),
                                                         line }),
    }
}

/// Converts a host length into an integer value.
fn length_of(len: usize, line: usize) -> EvalResult<Value> {
    i64::try_from(len).map(Value::Integer)
                      .map_err(|_| RuntimeError::Overflow { line }.into())
}

/// Returns the byte length of a string or the element count of an array.
fn len(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, line)?;

    match &args[0] {
        Value::Str(s) => length_of(s.len(), line),
        Value::Array(elements) => length_of(elements.len(), line),
        other => Err(RuntimeError::UnsupportedArgument { builtin: "len",
                                                         kind: other.kind(),
                                                         line }.into()),
    }
}

/// Returns the first element of an array, or `null` if it is empty.
fn first(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, line)?;
    let elements = as_array("first", &args[0], line)?;

    Ok(elements.first().cloned().unwrap_or(Value::Null))
}

/// Returns the last element of an array, or `null` if it is empty.
fn last(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, line)?;
    let elements = as_array("last", &args[0], line)?;

    Ok(elements.last().cloned().unwrap_or(Value::Null))
}

/// Returns a new array holding all but the first element, or `null` for an
/// empty array.
///
/// The argument array is never modified; `rest` of a one-element array is
/// `[]`, not `null`.
fn rest(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, line)?;
    let elements = as_array("rest", &args[0], line)?;

    if elements.is_empty() {
        Ok(Value::Null)
    } else {
        Ok(Value::from(elements[1..].to_vec()))
    }
}

/// Returns a new array with a value appended. The argument array is never
/// modified.
fn push(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 2, line)?;
    let elements = as_array("push", &args[0], line)?;

    let mut pushed = elements.to_vec();
    pushed.push(args[1].clone());

    Ok(Value::from(pushed))
}

/// Prints each argument's display form on its own line. Variadic; always
/// returns `null`.
fn puts(args: &[Value]) -> EvalResult<Value> {
    for arg in args {
        println!("{arg}");
    }

    Ok(Value::Null)
}
