/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Never fails: unrecognized input becomes `Illegal` tokens for the parser
///   to reject.
pub mod lexer;

/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements. Expressions are parsed with a Pratt (precedence climbing)
/// parser.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, recording errors with location info.
/// - Recovers from malformed statements and keeps parsing.
pub mod parser;

/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs operations, manages bindings, and produces results. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, conditionals and `return` unwinding.
/// - Reports runtime errors such as type mismatches or unresolved names.
pub mod evaluator;

/// The environment module implements lexical scoping.
///
/// An environment chains name-to-value frames; inner frames shadow outer
/// bindings. Function values capture the environment of their definition by
/// reference, which gives the language its closures.
///
/// # Responsibilities
/// - Resolves names by walking the frame chain outward.
/// - Binds names in the innermost frame only.
/// - Shares frames by identity between closures of the same scope.
pub mod environment;

/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation and
/// execution: integers, booleans, strings, null, arrays, hashes, functions
/// and builtins. It also provides display forms, type tags, truthiness and
/// hash keys.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements equality, display and truthiness.
/// - Derives hash keys for hashable values.
pub mod value;
