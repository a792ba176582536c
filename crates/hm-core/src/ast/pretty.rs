use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use super::Node;

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Integer(value) => write!(f, "{}", value),
            Node::Boolean(true) => f.write_str("#t"),
            Node::Boolean(false) => f.write_str("#f"),
            Node::String(value) => write!(f, "\"{}\"", value),
            Node::Symbol(ident) => write!(f, "{}", ident),
            Node::List(items) => write!(f, "({})", items.iter().join(" ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prints_atoms() {
        assert_eq!(Node::int(42).to_string(), "42");
        assert_eq!(Node::bool(true).to_string(), "#t");
        assert_eq!(Node::bool(false).to_string(), "#f");
        assert_eq!(Node::string("hi there").to_string(), "\"hi there\"");
        assert_eq!(Node::symbol("null?").to_string(), "null?");
    }

    #[test]
    fn prints_nested_lists() {
        let node = Node::list([
            Node::symbol("let"),
            Node::list([Node::list([Node::symbol("x"), Node::int(1)])]),
            Node::list([]),
        ]);
        assert_eq!(node.to_string(), "(let ((x 1)) ())");
    }
}
