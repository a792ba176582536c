//! Textual reader: source text to [`Node`] trees.
//!
//! Lists use `(...)` or `[...]` and must be closed by the matching bracket.
//! Any other run of non-whitespace, non-bracket characters is an atom:
//! all-digit atoms are integers, `#t`/`#f` are booleans, everything else is
//! a symbol. Strings are double-quoted with no escape processing. A `;`
//! comments out the rest of the line.

use crate::ast::Node;
use crate::error::{Error, Result, SyntaxErrorKind};
use crate::span::Span;

/// Read exactly one expression; anything but whitespace after it is an error.
pub fn read_one(source: &str) -> Result<Node> {
    let mut reader = Reader::new(source);
    let node = reader.read()?;
    reader.skip_trivia();
    if !reader.eof() {
        let start = reader.pos;
        return Err(Error::syntax(
            Span::new(start, source.len()),
            SyntaxErrorKind::TrailingInput,
        ));
    }
    Ok(node)
}

/// Read every top-level expression of `source`.
pub fn read_all(source: &str) -> Result<Vec<Node>> {
    let mut reader = Reader::new(source);
    let mut nodes = Vec::new();
    loop {
        reader.skip_trivia();
        if reader.eof() {
            break;
        }
        nodes.push(reader.read()?);
    }
    tracing::debug!(count = nodes.len(), "read top-level expressions");
    Ok(nodes)
}

pub struct Reader<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Skip whitespace and line comments.
    pub fn skip_trivia(&mut self) {
        loop {
            self.skip_while(char::is_whitespace);
            if self.peek() == Some(';') {
                self.skip_while(|c| c != '\n');
            } else {
                break;
            }
        }
    }

    /// Read the next expression.
    pub fn read(&mut self) -> Result<Node> {
        self.skip_trivia();
        let start = self.pos;
        match self.peek() {
            None => Err(Error::syntax(Span::point(start), SyntaxErrorKind::UnexpectedEof)),
            Some('(') => self.read_list(')'),
            Some('[') => self.read_list(']'),
            Some(c @ (')' | ']')) => Err(Error::syntax(
                Span::new(start, start + 1),
                SyntaxErrorKind::UnexpectedClose(c),
            )),
            Some('"') => self.read_string(),
            Some(_) => self.read_atom(),
        }
    }

    fn read_list(&mut self, closing: char) -> Result<Node> {
        let open = self.pos;
        self.bump();
        let mut items = Vec::new();
        loop {
            self.skip_trivia();
            match self.peek() {
                None => {
                    return Err(Error::syntax(
                        Span::new(open, self.pos),
                        SyntaxErrorKind::UnexpectedEof,
                    ))
                }
                Some(c) if c == closing => {
                    self.bump();
                    return Ok(Node::List(items));
                }
                Some(found @ (')' | ']')) => {
                    return Err(Error::syntax(
                        Span::new(self.pos, self.pos + 1),
                        SyntaxErrorKind::MismatchedClose {
                            expected: closing,
                            found,
                        },
                    ))
                }
                Some(_) => items.push(self.read()?),
            }
        }
    }

    fn read_string(&mut self) -> Result<Node> {
        let open = self.pos;
        self.bump();
        let start = self.pos;
        self.skip_while(|c| c != '"');
        if self.eof() {
            return Err(Error::syntax(
                Span::new(open, self.pos),
                SyntaxErrorKind::UnterminatedString,
            ));
        }
        let value = self.source[start..self.pos].to_string();
        self.bump();
        Ok(Node::String(value))
    }

    fn read_atom(&mut self) -> Result<Node> {
        let start = self.pos;
        self.skip_while(is_atom_char);
        let text = &self.source[start..self.pos];
        let span = Span::new(start, self.pos);

        if text.starts_with('#') {
            return match text {
                "#t" => Ok(Node::Boolean(true)),
                "#f" => Ok(Node::Boolean(false)),
                _ => Err(Error::syntax(
                    span,
                    SyntaxErrorKind::InvalidBoolean(text.to_string()),
                )),
            };
        }

        if text.bytes().all(|b| b.is_ascii_digit()) {
            return text
                .parse::<i64>()
                .map(Node::Integer)
                .map_err(|_| Error::syntax(span, SyntaxErrorKind::IntegerOutOfRange(text.to_string())));
        }

        Ok(Node::symbol(text))
    }
}

fn is_atom_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '(' | ')' | '[' | ']' | '"')
}
