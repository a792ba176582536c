/// Index of a term cell inside a [`TypeArena`](super::unify::TypeArena).
///
/// Two ids denote the same term iff they are equal; structural equality goes
/// through the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub(crate) usize);

impl TypeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Name of the function type constructor.
pub const FUNCTION: &str = "->";
/// Name of the product (pair) type constructor.
pub const PRODUCT: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOperator {
    pub name: String,
    pub args: Vec<TypeId>,
}

impl TypeOperator {
    pub fn new(name: impl Into<String>, args: Vec<TypeId>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTerm {
    /// A type variable, bound at most once by unification.
    Variable(Option<TypeId>),
    Operator(TypeOperator),
}

impl TypeTerm {
    pub fn is_variable(&self) -> bool {
        matches!(self, TypeTerm::Variable(_))
    }
}
