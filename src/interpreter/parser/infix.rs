use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression},
            utils::{expect_token, parse_comma_separated},
        },
    },
};

/// Folds one infix construct into an existing left-hand expression.
///
/// This is the infix half of the Pratt parser. The climbing loop in
/// [`parse_expression`] only calls it when the peeked token binds tighter
/// than the current minimum precedence, so the token here is always a binary
/// operator, a call opener `(` or an index opener `[`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the infix token.
/// - `left`: The already-parsed left-hand expression.
///
/// # Returns
/// The combined expression node.
///
/// # Errors
/// Propagates errors from the right-hand side, argument list or index
/// expression.
pub fn parse_infix<'a, I>(tokens: &mut Peekable<I>, left: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::LParen, line)) => parse_call(tokens, left, *line),
        Some((Token::LBracket, line)) => parse_index(tokens, left, *line),
        Some((token, line)) => match token_to_binary_operator(token) {
            Some(op) => parse_binary(tokens, left, op, Precedence::of(token), *line),
            None => Err(ParseError::ExpectedToken { expected: "an infix operator".to_string(),
                                                    found:    token.to_string(),
                                                    line:     *line, }),
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Maps an operator token to its binary operator, if it is one.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

/// Parses the right-hand side of a binary operator and builds the node.
///
/// The right-hand side is parsed at the operator's own precedence, which
/// makes every operator left-associative: `a + b + c` parses as
/// `((a + b) + c)`.
fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                       left: Expr,
                       op: BinaryOperator,
                       precedence: Precedence,
                       line: usize)
                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let right = parse_expression(tokens, precedence)?;

    Ok(Expr::BinaryOp { left: Box::new(left),
                        op,
                        right: Box::new(right),
                        line })
}

/// Parses a call argument list and builds the call node.
///
/// The callee is whatever expression the climbing loop folded so far: a
/// name, a function literal, or the result of a previous call.
///
/// Grammar: `call := callee "(" (expression ("," expression)*)? ")"`
fn parse_call<'a, I>(tokens: &mut Peekable<I>, callee: Expr, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let arguments = parse_comma_separated(tokens,
                                          |tokens| parse_expression(tokens, Precedence::Lowest),
                                          &Token::RParen)?;

    Ok(Expr::Call { callee: Box::new(callee),
                    arguments,
                    line })
}

/// Parses an index access and builds the index node.
///
/// Grammar: `index := object "[" expression "]"`
fn parse_index<'a, I>(tokens: &mut Peekable<I>, object: Expr, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let index = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RBracket)?;

    Ok(Expr::Index { object: Box::new(object),
                     index: Box::new(index),
                     line })
}
