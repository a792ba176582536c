use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;

use crate::typing::types::{TypeId, TypeTerm, FUNCTION, PRODUCT};
use crate::typing::unify::TypeArena;

/// Display names for unresolved variables, handed out in first-encounter
/// order: `a` through `z`, then `a1` through `z1`, `a2`, and so on.
///
/// Create one per rendered expression so names restart at `a`.
#[derive(Debug, Default, Clone)]
pub struct TypeNames {
    names: HashMap<TypeId, String>,
}

impl TypeNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_for(&mut self, var: TypeId) -> String {
        let next = self.names.len();
        self.names
            .entry(var)
            .or_insert_with(|| variable_name(next))
            .clone()
    }
}

fn variable_name(index: usize) -> String {
    let letter = char::from(b'a' + (index % 26) as u8);
    match index / 26 {
        0 => letter.to_string(),
        round => format!("{}{}", letter, round),
    }
}

impl TypeArena {
    /// Render `id` with the given naming context.
    pub fn render(&self, id: TypeId, names: &mut TypeNames) -> String {
        let id = self.peek(id);
        match self.term(id) {
            TypeTerm::Variable(_) => names.name_for(id),
            TypeTerm::Operator(op) => match (op.name.as_str(), op.args.as_slice()) {
                (FUNCTION, [from, to]) => {
                    let from = self.render(*from, names);
                    let to = self.render(*to, names);
                    format!("({} -> {})", from, to)
                }
                (PRODUCT, args) if !args.is_empty() => {
                    format!("({})", args.iter().map(|arg| self.render(*arg, names)).join(" * "))
                }
                (name, []) => name.to_string(),
                (name, args) => format!(
                    "({} {})",
                    name,
                    args.iter().map(|arg| self.render(*arg, names)).join(" ")
                ),
            },
        }
    }

    /// A [`fmt::Display`] view of `id` with its own naming context.
    pub fn display(&self, id: TypeId) -> DisplayType<'_> {
        DisplayType { arena: self, id }
    }
}

pub struct DisplayType<'a> {
    arena: &'a TypeArena,
    id: TypeId,
}

impl fmt::Display for DisplayType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = TypeNames::new();
        f.write_str(&self.arena.render(self.id, &mut names))
    }
}
