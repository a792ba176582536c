//! Schemes are plain type terms: every variable not reachable from the
//! non-generic set at the use site is implicitly quantified.

use std::collections::HashMap;

use crate::typing::env::NonGeneric;
use crate::typing::types::{TypeId, TypeTerm};
use crate::typing::unify::TypeArena;

impl TypeArena {
    /// Fresh copy of `scheme` with every generic variable replaced,
    /// consistently within this call. Non-generic variables are shared.
    pub fn instantiate(&mut self, scheme: TypeId, non_generic: &NonGeneric) -> TypeId {
        let mut mapping = HashMap::new();
        let instance = self.instantiate_term(scheme, non_generic, &mut mapping);
        tracing::trace!(
            scheme = scheme.index(),
            instance = instance.index(),
            fresh = mapping.len(),
            "instantiate scheme"
        );
        instance
    }

    fn instantiate_term(
        &mut self,
        id: TypeId,
        non_generic: &NonGeneric,
        mapping: &mut HashMap<TypeId, TypeId>,
    ) -> TypeId {
        let id = self.resolve(id);
        match self.term(id).clone() {
            TypeTerm::Variable(_) => {
                if !self.is_generic(id, non_generic) {
                    return id;
                }
                if let Some(fresh) = mapping.get(&id) {
                    return *fresh;
                }
                let fresh = self.new_variable();
                mapping.insert(id, fresh);
                fresh
            }
            TypeTerm::Operator(op) if op.args.is_empty() => id,
            TypeTerm::Operator(op) => {
                let args = op
                    .args
                    .iter()
                    .map(|arg| self.instantiate_term(*arg, non_generic, mapping))
                    .collect();
                self.new_operator(op.name, args)
            }
        }
    }

    /// A variable is generic unless some non-generic entry contains it.
    pub fn is_generic(&mut self, var: TypeId, non_generic: &NonGeneric) -> bool {
        !non_generic.iter().any(|pinned| self.contains(pinned, var))
    }
}
