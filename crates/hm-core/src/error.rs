use crate::span::Span;
use std::result;
use thiserror::Error;

/// What went wrong while reading source text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unexpected closing '{0}'")]
    UnexpectedClose(char),
    #[error("expected '{expected}' to close the list, found '{found}'")]
    MismatchedClose { expected: char, found: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid boolean literal `{0}`, expected #t or #f")]
    InvalidBoolean(String),
    #[error("integer literal `{0}` is out of range")]
    IntegerOutOfRange(String),
    #[error("unexpected input after the expression")]
    TrailingInput,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("syntax error at {span}: {kind}")]
    Syntax { span: Span, kind: SyntaxErrorKind },
}

impl Error {
    pub fn syntax(span: Span, kind: SyntaxErrorKind) -> Self {
        Error::Syntax { span, kind }
    }

    pub fn span(&self) -> Span {
        match self {
            Error::Syntax { span, .. } => *span,
        }
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        match self {
            Error::Syntax { kind, .. } => kind,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
