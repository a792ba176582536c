//! Syntax layer of the inference workspace: the expression tree, its
//! S-expression printer and the textual reader.

pub mod ast;
pub mod error;
pub mod reader;
pub mod span;

pub use ast::{Ident, Keyword, Node};
pub use reader::{read_all, read_one};

// Alias for error types
pub type Error = crate::error::Error;
pub type Result<T> = crate::error::Result<T>;
