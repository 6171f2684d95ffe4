/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, invalid
/// literals, and any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution. Runtime errors include things like type mismatches, unknown
/// operators, unresolved names, or invalid builtin arguments.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// The combined error surface of a full interpreter run.
///
/// Parsing accumulates errors and keeps going, so a failed parse reports
/// every recorded [`ParseError`] at once; evaluation stops at the first
/// [`RuntimeError`].
pub enum InterpretError {
    /// The source failed to parse; evaluation was never attempted.
    Parse(Vec<ParseError>),
    /// The source parsed cleanly but evaluation raised an error.
    Runtime(RuntimeError),
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for InterpretError {}

impl From<RuntimeError> for InterpretError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl From<Vec<ParseError>> for InterpretError {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(errors)
    }
}
