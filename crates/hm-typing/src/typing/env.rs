use im::{OrdMap, Vector};

use crate::typing::types::TypeId;

/// Symbol name to type scheme.
///
/// Persistent: cloning is cheap and extending a clone never affects the
/// scope it was cloned from.
#[derive(Debug, Clone, Default)]
pub struct TypeEnv {
    bindings: OrdMap<String, TypeId>,
}

impl TypeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.bindings.get(name).copied()
    }

    pub fn insert(&mut self, name: impl Into<String>, ty: TypeId) {
        self.bindings.insert(name.into(), ty);
    }

    /// A child scope with `name` bound to `ty`.
    pub fn extend(&self, name: impl Into<String>, ty: TypeId) -> TypeEnv {
        TypeEnv {
            bindings: self.bindings.update(name.into(), ty),
        }
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.bindings.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Variables pinned by an enclosing lambda or letrec; instantiation shares
/// them instead of copying.
#[derive(Debug, Clone, Default)]
pub struct NonGeneric {
    vars: Vector<TypeId>,
}

impl NonGeneric {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, var: TypeId) {
        self.vars.push_back(var);
    }

    pub fn with(&self, var: TypeId) -> NonGeneric {
        let mut next = self.clone();
        next.push(var);
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.vars.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
