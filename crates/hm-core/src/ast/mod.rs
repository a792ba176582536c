//! Expression tree produced by the reader.
//!
//! The tree is deliberately untyped: special forms are ordinary lists whose
//! head symbol matches a [`Keyword`]. Consumers classify forms by value
//! through [`Node::keyword`].

mod ident;
mod pretty;

pub use ident::Ident;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Node {
    Integer(i64),
    Boolean(bool),
    String(String),
    Symbol(Ident),
    List(Vec<Node>),
}

impl Node {
    pub fn int(value: i64) -> Self {
        Node::Integer(value)
    }

    pub fn bool(value: bool) -> Self {
        Node::Boolean(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::String(value.into())
    }

    pub fn symbol(name: impl Into<Ident>) -> Self {
        Node::Symbol(name.into())
    }

    pub fn list(items: impl IntoIterator<Item = Node>) -> Self {
        Node::List(items.into_iter().collect())
    }

    pub fn as_symbol(&self) -> Option<&Ident> {
        match self {
            Node::Symbol(ident) => Some(ident),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// The special form this node introduces, if it is a list headed by a
    /// keyword symbol.
    pub fn keyword(&self) -> Option<Keyword> {
        self.as_list()
            .and_then(|items| items.first())
            .and_then(Node::as_symbol)
            .and_then(|head| Keyword::from_symbol(head.as_str()))
    }
}

/// Special-form keywords, recognised by the symbol in head position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Let,
    LetStar,
    LetRec,
    Lambda,
}

impl Keyword {
    pub const ALL: [Keyword; 4] = [
        Keyword::Let,
        Keyword::LetStar,
        Keyword::LetRec,
        Keyword::Lambda,
    ];

    pub fn from_symbol(name: &str) -> Option<Self> {
        match name {
            "let" => Some(Keyword::Let),
            "let*" => Some(Keyword::LetStar),
            "letrec" => Some(Keyword::LetRec),
            "lambda" => Some(Keyword::Lambda),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::LetStar => "let*",
            Keyword::LetRec => "letrec",
            Keyword::Lambda => "lambda",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
