use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use a name with no binding and no builtin of that name.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator was applied to operands of differing types.
    TypeMismatch {
        /// Type tag of the left operand.
        left:  &'static str,
        /// The operator.
        op:    BinaryOperator,
        /// Type tag of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A binary operator is not defined for its operand types.
    UnknownBinaryOperator {
        /// Type tag of the left operand.
        left:  &'static str,
        /// The operator.
        op:    BinaryOperator,
        /// Type tag of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A unary operator is not defined for its operand type.
    UnknownUnaryOperator {
        /// The operator.
        op:      UnaryOperator,
        /// Type tag of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to call a value that is neither a function nor a builtin.
    NotCallable {
        /// Type tag of the value that was called.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The index operator was applied to an unindexable value.
    IndexNotSupported {
        /// Type tag of the value being indexed.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value that cannot act as a hash key was used as one.
    UnusableHashKey {
        /// Type tag of the offending key.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A builtin was called with the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments were supplied.
        got:  usize,
        /// How many arguments the builtin takes.
        want: usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A builtin was called with an argument of an unsupported type.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin: &'static str,
        /// Type tag of the offending argument.
        kind:    &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name, line } => {
                write!(f, "Error on line {line}: identifier not found: {name}.")
            },
            Self::TypeMismatch { left, op, right, line } => {
                write!(f, "Error on line {line}: type mismatch: {left} {op} {right}.")
            },
            Self::UnknownBinaryOperator { left, op, right, line } => {
                write!(f, "Error on line {line}: unknown operator: {left} {op} {right}.")
            },
            Self::UnknownUnaryOperator { op, operand, line } => {
                write!(f, "Error on line {line}: unknown operator: {op}{operand}.")
            },
            Self::NotCallable { kind, line } => {
                write!(f, "Error on line {line}: not a function: {kind}.")
            },
            Self::IndexNotSupported { kind, line } => {
                write!(f, "Error on line {line}: index operator not supported: {kind}.")
            },
            Self::UnusableHashKey { kind, line } => {
                write!(f, "Error on line {line}: unusable as hash key: {kind}.")
            },
            Self::WrongArgumentCount { got, want, line } => write!(f,
                                                                  "Error on line {line}: wrong number of arguments. got={got}, want={want}."),

            Self::UnsupportedArgument { builtin, kind, line } => write!(f,
                                                                       "Error on line {line}: argument to `{builtin}` not supported, got {kind}."),

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
