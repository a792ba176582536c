use crate::error::{Constructor, Result, TypeError};
use crate::typing::pretty::TypeNames;
use crate::typing::types::{TypeId, TypeOperator, TypeTerm, FUNCTION, PRODUCT};

/// Owner of every type term created during one analysis.
///
/// Terms are addressed by [`TypeId`]. A variable cell is written at most
/// once by [`TypeArena::unify`]; path compression may later shorten its link
/// without changing the representative it resolves to.
#[derive(Debug, Clone)]
pub struct TypeArena {
    pub(crate) terms: Vec<TypeTerm>,
    int: TypeId,
    bool: TypeId,
    str: TypeId,
    unit: TypeId,
}

impl Default for TypeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeArena {
    pub fn new() -> Self {
        let mut arena = Self {
            terms: Vec::new(),
            int: TypeId(0),
            bool: TypeId(0),
            str: TypeId(0),
            unit: TypeId(0),
        };
        arena.int = arena.new_operator("int", Vec::new());
        arena.bool = arena.new_operator("bool", Vec::new());
        arena.str = arena.new_operator("str", Vec::new());
        arena.unit = arena.new_operator("unit", Vec::new());
        arena
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn int(&self) -> TypeId {
        self.int
    }

    pub fn bool(&self) -> TypeId {
        self.bool
    }

    pub fn str(&self) -> TypeId {
        self.str
    }

    pub fn unit(&self) -> TypeId {
        self.unit
    }

    pub fn term(&self, id: TypeId) -> &TypeTerm {
        &self.terms[id.0]
    }

    pub fn new_variable(&mut self) -> TypeId {
        let id = TypeId(self.terms.len());
        self.terms.push(TypeTerm::Variable(None));
        id
    }

    pub fn new_operator(&mut self, name: impl Into<String>, args: Vec<TypeId>) -> TypeId {
        let id = TypeId(self.terms.len());
        self.terms
            .push(TypeTerm::Operator(TypeOperator::new(name, args)));
        id
    }

    pub fn function(&mut self, from: TypeId, to: TypeId) -> TypeId {
        self.new_operator(FUNCTION, vec![from, to])
    }

    pub fn product(&mut self, first: TypeId, second: TypeId) -> TypeId {
        self.new_operator(PRODUCT, vec![first, second])
    }

    /// Follow variable links to the representative term, pointing every
    /// visited link straight at it.
    pub fn resolve(&mut self, id: TypeId) -> TypeId {
        match self.terms[id.0] {
            TypeTerm::Variable(Some(next)) => {
                let root = self.resolve(next);
                self.terms[id.0] = TypeTerm::Variable(Some(root));
                root
            }
            _ => id,
        }
    }

    /// Same walk as [`resolve`](Self::resolve) without touching the links.
    pub fn peek(&self, id: TypeId) -> TypeId {
        let mut current = id;
        while let TypeTerm::Variable(Some(next)) = self.terms[current.0] {
            current = next;
        }
        current
    }

    /// Occurs check: does `target` appear anywhere inside `term`?
    pub fn contains(&mut self, term: TypeId, target: TypeId) -> bool {
        let term = self.resolve(term);
        let target = self.resolve(target);
        if term == target {
            return true;
        }
        match self.terms[term.0].clone() {
            TypeTerm::Operator(op) => op.args.into_iter().any(|arg| self.contains(arg, target)),
            TypeTerm::Variable(_) => false,
        }
    }

    pub fn unify(&mut self, a: TypeId, b: TypeId) -> Result<()> {
        let a = self.resolve(a);
        let b = self.resolve(b);
        if a == b {
            return Ok(());
        }
        match (self.terms[a.0].clone(), self.terms[b.0].clone()) {
            (TypeTerm::Variable(_), _) => self.bind(a, b),
            (_, TypeTerm::Variable(_)) => self.bind(b, a),
            (TypeTerm::Operator(left), TypeTerm::Operator(right)) => {
                if left.name != right.name || left.arity() != right.arity() {
                    return Err(TypeError::mismatch(
                        Constructor::new(left.name, left.args.len()),
                        Constructor::new(right.name, right.args.len()),
                    ));
                }
                for (x, y) in left.args.into_iter().zip(right.args) {
                    self.unify(x, y)?;
                }
                Ok(())
            }
        }
    }

    fn bind(&mut self, var: TypeId, term: TypeId) -> Result<()> {
        if self.contains(term, var) {
            let mut names = TypeNames::new();
            let variable = self.render(var, &mut names);
            let term = self.render(term, &mut names);
            return Err(TypeError::OccursCheck { variable, term });
        }
        tracing::trace!(var = var.index(), term = term.index(), "bind type variable");
        self.terms[var.0] = TypeTerm::Variable(Some(term));
        Ok(())
    }

    /// Compare two terms after resolution: same variable, or operators with
    /// equal names and pairwise equal arguments.
    pub fn structurally_equal(&mut self, a: TypeId, b: TypeId) -> bool {
        let a = self.resolve(a);
        let b = self.resolve(b);
        if a == b {
            return true;
        }
        match (self.terms[a.0].clone(), self.terms[b.0].clone()) {
            (TypeTerm::Operator(left), TypeTerm::Operator(right)) => {
                left.name == right.name
                    && left.arity() == right.arity()
                    && left
                        .args
                        .into_iter()
                        .zip(right.args)
                        .all(|(x, y)| self.structurally_equal(x, y))
            }
            _ => false,
        }
    }
}
