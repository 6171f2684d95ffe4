use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, Precedence, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses the expression form beginning at the current token.
///
/// This is the prefix half of the Pratt parser: every token that can start
/// an expression has exactly one handler here. Literals and identifiers
/// complete immediately; the structured forms (grouping, `if`, `fn`, arrays,
/// hashes, unary operators) consume their full extent.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `NoPrefixParse` if the current token cannot begin an expression.
/// - `IntegerOutOfRange` if an integer literal does not fit `i64`.
/// - Propagates any errors from nested expressions.
pub fn parse_prefix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok(Expr::Identifier { name: name.clone(),
                                                                       line: *line, }),
        Some((Token::Integer(literal), line)) => parse_integer_literal(literal, *line),
        Some((Token::Str(value), line)) => Ok(Expr::StringLiteral { value: value.clone(),
                                                                    line:  *line, }),
        Some((Token::Bool(value), line)) => Ok(Expr::BooleanLiteral { value: *value,
                                                                      line:  *line, }),
        Some((Token::Bang, line)) => parse_unary(tokens, UnaryOperator::Not, *line),
        Some((Token::Minus, line)) => parse_unary(tokens, UnaryOperator::Negate, *line),
        Some((Token::LParen, _)) => parse_grouped(tokens),
        Some((Token::LBracket, line)) => parse_array_literal(tokens, *line),
        Some((Token::LBrace, line)) => parse_hash_literal(tokens, *line),
        Some((Token::If, line)) => parse_if(tokens, *line),
        Some((Token::Function, line)) => parse_function_literal(tokens, *line),
        Some((token, line)) => Err(ParseError::NoPrefixParse { token: token.to_string(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Converts an integer lexeme into an integer literal node.
///
/// The lexer only guarantees the lexeme is all digits; range checking
/// happens here, so `9223372036854775808` is a parse error rather than a
/// wrapped value.
fn parse_integer_literal(literal: &str, line: usize) -> ParseResult<Expr> {
    literal.parse::<i64>()
           .map(|value| Expr::IntegerLiteral { value, line })
           .map_err(|_| ParseError::IntegerOutOfRange { literal: literal.to_string(),
                                                        line })
}

/// Parses the operand of a unary operator.
///
/// The operand binds at unary precedence, so `-a * b` parses as
/// `((-a) * b)` and `!-a` as `(!(-a))`.
fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                      op: UnaryOperator,
                      line: usize)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let operand = parse_expression(tokens, Precedence::Unary)?;

    Ok(Expr::UnaryOp { op,
                       operand: Box::new(operand),
                       line })
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouped := "(" expression ")"`
///
/// Grouping leaves no trace in the AST; it only resets the precedence floor.
fn parse_grouped<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RParen)?;

    Ok(expr)
}

/// Parses an array literal of the form `[ expr1, expr2, ..., exprN ]`.
///
/// An empty array `[]` is accepted.
///
/// Grammar: `array := "[" (expression ("," expression)*)? "]"`
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let elements = parse_comma_separated(tokens,
                                         |tokens| parse_expression(tokens, Precedence::Lowest),
                                         &Token::RBracket)?;

    Ok(Expr::ArrayLiteral { elements, line })
}

/// Parses a hash literal of the form `{ key1: value1, ..., keyN: valueN }`.
///
/// An empty hash `{}` is accepted. Keys are arbitrary expressions; whether a
/// key is actually hashable is decided at evaluation time, not here.
///
/// Grammar: `hash := "{" (pair ("," pair)*)? "}"` with `pair := expression
/// ":" expression`
fn parse_hash_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let pairs = parse_comma_separated(tokens, parse_hash_pair, &Token::RBrace)?;

    Ok(Expr::HashLiteral { pairs, line })
}

/// Parses one `key: value` pair of a hash literal.
fn parse_hash_pair<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(Expr, Expr)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let key = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::Colon)?;
    let value = parse_expression(tokens, Precedence::Lowest)?;

    Ok((key, value))
}

/// Parses an `if` expression with an optional `else` block.
///
/// Syntax:
/// ```text
///     if (<condition>) { <consequence> }
///     else { <alternative> }
/// ```
/// The parentheses around the condition and the braces around both blocks
/// are required; a missing delimiter records an error.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
///
/// # Returns
/// An `Expr::If` node representing the full conditional expression.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect_token(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RParen)?;

    let brace_line = expect_token(tokens, &Token::LBrace)?;
    let consequence = parse_block(tokens, brace_line)?;

    let alternative = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();

        let brace_line = expect_token(tokens, &Token::LBrace)?;
        Some(parse_block(tokens, brace_line)?)
    } else {
        None
    };

    Ok(Expr::If { condition: Box::new(condition),
                  consequence,
                  alternative,
                  line })
}

/// Parses a function literal of the form `fn(param1, ..., paramN) { body }`.
///
/// The parameter list is a possibly empty comma-separated list of
/// identifiers.
///
/// Grammar: `function := "fn" "(" (identifier ("," identifier)*)? ")" block`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `fn` keyword.
/// - `line`: Line number of the `fn` token.
///
/// # Returns
/// An `Expr::FunctionLiteral` node.
fn parse_function_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect_token(tokens, &Token::LParen)?;
    let parameters = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    let brace_line = expect_token(tokens, &Token::LBrace)?;
    let body = parse_block(tokens, brace_line)?;

    Ok(Expr::FunctionLiteral { parameters,
                               body,
                               line })
}
