/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, statement and
/// block evaluation, and unwinding propagation for `return` and errors.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements logical NOT and arithmetic negation.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: integer
/// arithmetic and comparison, string concatenation, and identity equality.
pub mod binary;

/// Collection evaluation.
///
/// Evaluates array and hash literals and index accesses into both.
pub mod collection;

/// Function evaluation.
///
/// Handles calls, closure environments, lenient parameter binding, and the
/// unwrapping of `return` at the call boundary.
pub mod function;

/// Built-in functions.
///
/// Defines the builtin table (`len`, `first`, `last`, `rest`, `push`,
/// `puts`), argument checking, and each builtin's behavior.
pub mod builtin;
