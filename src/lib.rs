//! # quill
//!
//! quill is a small, dynamically-typed, expression-oriented scripting
//! language implemented as a tree-walking interpreter. It supports `let`
//! bindings, first-class functions with lexical closures, integers,
//! booleans, strings, arrays, hashes, `if` expressions and explicit
//! `return`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::InterpretError,
    interpreter::{
        evaluator::core::Context,
        lexer::lex,
        parser::statement::parse_program,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source locations to AST nodes for error reporting.
/// - Renders nodes in a canonical, fully-parenthesized text form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, environments, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the
/// public API for interpreting and executing programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a source string and returns its final value.
///
/// The source is lexed, parsed, and evaluated against a fresh global
/// environment; if parsing recorded any errors, evaluation is never
/// attempted. The program's value is
/// its last statement's value (`null` for an empty program or a trailing
/// `let`); a top-level `return` stops execution early with its value.
///
/// # Errors
/// Returns [`InterpretError::Parse`] carrying every recorded parse error if
/// the source fails to parse, or [`InterpretError::Runtime`] if evaluation
/// raises an error.
///
/// # Examples
/// ```
/// use quill::run;
///
/// let value = run("let double = fn(x) { x * 2 }; double(21)").unwrap();
/// assert_eq!(value.to_string(), "42");
///
/// // 'y' is not defined, so evaluation fails.
/// let result = run("let x = y + 1");
/// assert!(result.is_err());
/// ```
pub fn run(source: &str) -> Result<Value, InterpretError> {
    let tokens = lex(source);
    let mut tokens = tokens.iter().peekable();

    let (program, errors) = parse_program(&mut tokens);
    if !errors.is_empty() {
        return Err(InterpretError::Parse(errors));
    }

    let context = Context::new();
    context.eval_program(&program).map_err(InterpretError::Runtime)
}

/// Runs a source string, optionally printing the final value.
///
/// This is the entry point the command line uses. With `auto_print` set,
/// the final value is written to standard output unless it is `null`.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quill::run_and_print;
///
/// // The program runs; nothing is printed because the flag is off.
/// let res = run_and_print("2 + 2", false);
/// assert!(res.is_ok());
/// ```
pub fn run_and_print(source: &str, auto_print: bool) -> Result<(), InterpretError> {
    let value = run(source)?;

    if auto_print && value != Value::Null {
        println!("{value}");
    }

    Ok(())
}
