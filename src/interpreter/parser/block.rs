use std::iter::Peekable;

use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is encountered; running out of input first is an error.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
///
/// # Returns
/// A [`Block`] containing all parsed statements.
///
/// # Errors
/// Returns a `ParseError` if a statement fails to parse or the closing `}`
/// is missing.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some((Token::Eof, line)) => {
                return Err(ParseError::ExpectedToken { expected: Token::RBrace.to_string(),
                                                       found:    Token::Eof.to_string(),
                                                       line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
            _ => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(Block { statements, line })
}
