use logos::{Logos, SpannedIter};
use quill_utils::span::{Sp, Span};
use std::fmt::{Debug, Display};

#[derive(Logos, Clone, Debug, PartialEq)]
#[logos(skip r"#[^\n]*")]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Tok<'input> {
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_?!\-<>=]*")]
    Ident(&'input str),

    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("lambda")]
    #[token("λ")]
    Lambda,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("let")]
    Let,

    #[regex(r"[0-9]+(\.[0-9]*)?")]
    NumLit(&'input str),
    #[regex(r#""([^"\\]|\\.)*""#)]
    StrLit(&'input str),

    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    /// any run of operator characters; the parser decides whether it names an operator
    #[regex(r"[+\-*/%=&|<>!]+")]
    Op(&'input str),
}

impl Display for Tok<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            | Tok::Ident(s) => write!(f, "{}", s),
            | Tok::If => write!(f, "if"),
            | Tok::Then => write!(f, "then"),
            | Tok::Else => write!(f, "else"),
            | Tok::Lambda => write!(f, "lambda"),
            | Tok::True => write!(f, "true"),
            | Tok::False => write!(f, "false"),
            | Tok::Let => write!(f, "let"),
            | Tok::NumLit(s) => write!(f, "{}", s),
            | Tok::StrLit(s) => write!(f, "{}", s),
            | Tok::ParenOpen => write!(f, "("),
            | Tok::ParenClose => write!(f, ")"),
            | Tok::BracketOpen => write!(f, "["),
            | Tok::BracketClose => write!(f, "]"),
            | Tok::BraceOpen => write!(f, "{{"),
            | Tok::BraceClose => write!(f, "}}"),
            | Tok::Comma => write!(f, ","),
            | Tok::Semicolon => write!(f, ";"),
            | Tok::Op(s) => write!(f, "{}", s),
        }
    }
}

/// A character sequence that no token matches.
#[derive(Clone, Debug, PartialEq)]
pub struct BadToken<'source> {
    pub text: &'source str,
    pub span: Span,
}

pub struct Lexer<'source> {
    inner: SpannedIter<'source, Tok<'source>>,
    source: &'source str,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self { inner: Tok::lexer(source).spanned(), source }
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<Sp<Tok<'source>>, BadToken<'source>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (tok, range) = self.inner.next()?;
        let span = Span::new(range.start, range.end);
        Some(match tok {
            | Ok(tok) => Ok(span.make(tok)),
            | Err(()) => Err(BadToken { text: &self.source[range], span }),
        })
    }
}

/// Strip the quotes of a string literal and resolve its escapes; a backslash
/// makes the next character literal.
pub fn unescape(lit: &str) -> String {
    let body = &lit[1..lit.len() - 1];
    let mut res = String::with_capacity(body.len());
    let mut escaped = false;
    for c in body.chars() {
        if escaped {
            res.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else {
            res.push(c);
        }
    }
    res
}
