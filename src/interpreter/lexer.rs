use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    ///
    /// The raw digit lexeme is preserved; conversion to `i64` happens in the
    /// parser so that out-of-range literals surface as parse errors.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// String literal tokens, such as `"hello"`.
    ///
    /// The surrounding quotes are stripped. No escape sequences are
    /// processed; the literal runs to the next `"`.
    #[regex(r#""[^"]*""#, |lex| {
        let slice = lex.slice();
        lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
        slice[1..slice.len() - 1].to_string()
    })]
    Str(String),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `let`
    #[token("let")]
    Let,
    /// `fn`
    #[token("fn")]
    Function,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// Any character the language does not recognize.
    ///
    /// The lexer itself never fails; unrecognized input is carried along as
    /// `Illegal` tokens and rejecting them is left to the parser.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),
    /// End of input. Appended once by [`lex`]; never produced mid-stream.
    Eof,

    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Tokenizes an entire source string.
///
/// Produces the full token stream as `(Token, line)` pairs, always terminated
/// by a single [`Token::Eof`]. Lexing cannot fail: anything the language does
/// not recognize is returned as a [`Token::Illegal`] carrying the offending
/// text.
///
/// # Parameters
/// - `source`: The complete source text.
///
/// # Returns
/// All tokens of `source` in order, each with the line it started on.
///
/// # Examples
/// ```
/// use quill::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("let five = 5;");
///
/// assert_eq!(tokens.first(), Some(&(Token::Let, 1)));
/// assert_eq!(tokens.last(), Some(&(Token::Eof, 1)));
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<(Token, usize)> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => tokens.push((Token::Illegal(lexer.slice().to_string()), lexer.extras.line)),
        }
    }
    tokens.push((Token::Eof, lexer.extras.line));

    tokens
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(lexeme) | Self::Identifier(lexeme) | Self::Illegal(lexeme) => {
                write!(f, "{lexeme}")
            },
            Self::Str(value) => write!(f, "\"{value}\""),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Let => write!(f, "let"),
            Self::Function => write!(f, "fn"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::Return => write!(f, "return"),
            Self::Assign => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Bang => write!(f, "!"),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::Colon => write!(f, ":"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Eof => write!(f, "end of input"),
            Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}
