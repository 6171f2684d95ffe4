/// Core parsing logic.
///
/// Contains the shared `ParseResult` alias, the operator precedence ladder
/// and the Pratt climbing loop driving prefix and infix handlers.
pub mod core;

/// Prefix position parsing.
///
/// Handlers for every token that can begin an expression: literals,
/// identifiers, grouping, unary operators, `if`, `fn`, arrays and hashes.
pub mod prefix;

/// Infix position parsing.
///
/// Handlers for everything that extends an existing expression: binary
/// operators, call argument lists and index accesses.
pub mod infix;

/// Statement parsing.
///
/// Implements `let`, `return` and expression statements, plus whole-program
/// parsing with per-statement error recovery.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by `if` arms and function
/// bodies.
pub mod block;

/// Utility functions for the parser.
///
/// Provides the expect-token and comma-separated-list helpers shared by the
/// grammar rules.
pub mod utils;
