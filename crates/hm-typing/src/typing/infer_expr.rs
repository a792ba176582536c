use hm_core::ast::{Ident, Keyword, Node};

use crate::error::{Result, TypeError};
use crate::typing::env::{NonGeneric, TypeEnv};
use crate::typing::primitives;
use crate::typing::types::TypeId;
use crate::typing::unify::TypeArena;

/// Inference over one arena, seeded with the primitive environment.
#[derive(Debug, Clone)]
pub struct TypeInferencer {
    arena: TypeArena,
    primitives: TypeEnv,
}

impl Default for TypeInferencer {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInferencer {
    pub fn new() -> Self {
        let mut arena = TypeArena::new();
        let primitives = primitives::install(&mut arena);
        Self { arena, primitives }
    }

    pub fn arena(&self) -> &TypeArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut TypeArena {
        &mut self.arena
    }

    pub fn primitives(&self) -> &TypeEnv {
        &self.primitives
    }

    pub fn into_arena(self) -> TypeArena {
        self.arena
    }

    /// Infer `node` under the primitive environment.
    pub fn infer(&mut self, node: &Node) -> Result<TypeId> {
        let env = self.primitives.clone();
        self.infer_in(node, &env, &NonGeneric::new())
    }

    pub fn infer_in(&mut self, node: &Node, env: &TypeEnv, non_generic: &NonGeneric) -> Result<TypeId> {
        self.infer_node(node, env, non_generic)
    }

    pub fn render(&self, ty: TypeId) -> String {
        self.arena.display(ty).to_string()
    }

    fn infer_node(&mut self, node: &Node, env: &TypeEnv, non_generic: &NonGeneric) -> Result<TypeId> {
        match node {
            Node::Integer(_) => Ok(self.arena.int()),
            Node::Boolean(_) => Ok(self.arena.bool()),
            Node::String(_) => Ok(self.arena.str()),
            Node::Symbol(ident) => self.infer_symbol(ident, env, non_generic),
            Node::List(items) => match node.keyword() {
                Some(keyword) => self.infer_special_form(keyword, items, env, non_generic),
                None => self.infer_application(items, env, non_generic),
            },
        }
    }

    fn infer_symbol(&mut self, ident: &Ident, env: &TypeEnv, non_generic: &NonGeneric) -> Result<TypeId> {
        let Some(scheme) = env.lookup(ident.as_str()) else {
            return Err(TypeError::UnboundSymbol {
                name: ident.to_string(),
                available: env.names(),
            });
        };
        Ok(self.arena.instantiate(scheme, non_generic))
    }

    fn infer_special_form(
        &mut self,
        keyword: Keyword,
        items: &[Node],
        env: &TypeEnv,
        non_generic: &NonGeneric,
    ) -> Result<TypeId> {
        tracing::debug!(form = %keyword, "infer special form");
        let (head, body) = form_operands(keyword, items)?;
        match keyword {
            Keyword::Let => {
                let bindings = bindings(keyword, head)?;
                let mut scope = env.clone();
                for (name, value) in bindings {
                    let ty = self.infer_node(value, env, non_generic)?;
                    scope.insert(name.as_str(), ty);
                }
                self.infer_node(body, &scope, non_generic)
            }
            Keyword::LetStar => {
                let bindings = bindings(keyword, head)?;
                let mut scope = env.clone();
                for (name, value) in bindings {
                    let ty = self.infer_node(value, &scope, non_generic)?;
                    scope = scope.extend(name.as_str(), ty);
                }
                self.infer_node(body, &scope, non_generic)
            }
            Keyword::LetRec => {
                let bindings = bindings(keyword, head)?;
                let mut scope = env.clone();
                let mut pinned = non_generic.clone();
                let mut pending = Vec::with_capacity(bindings.len());
                for (name, value) in bindings {
                    let placeholder = self.arena.new_variable();
                    scope.insert(name.as_str(), placeholder);
                    pinned.push(placeholder);
                    pending.push((value, placeholder));
                }
                for (value, placeholder) in pending {
                    let ty = self.infer_node(value, &scope, &pinned)?;
                    self.arena.unify(placeholder, ty)?;
                }
                self.infer_node(body, &scope, non_generic)
            }
            Keyword::Lambda => {
                let params = parameters(head)?;
                self.infer_lambda(&params, body, env, non_generic)
            }
        }
    }

    /// `(lambda (p1 p2 ...) body)` as `(lambda (p1) (lambda (p2 ...) body))`.
    fn infer_lambda(
        &mut self,
        params: &[&Ident],
        body: &Node,
        env: &TypeEnv,
        non_generic: &NonGeneric,
    ) -> Result<TypeId> {
        let Some((param, rest)) = params.split_first() else {
            return self.infer_node(body, env, non_generic);
        };
        let param_ty = self.arena.new_variable();
        let scope = env.extend(param.as_str(), param_ty);
        let pinned = non_generic.with(param_ty);
        let result = self.infer_lambda(rest, body, &scope, &pinned)?;
        Ok(self.arena.function(param_ty, result))
    }

    /// `(f a b ...)` as `((f a) b ...)`.
    fn infer_application(
        &mut self,
        items: &[Node],
        env: &TypeEnv,
        non_generic: &NonGeneric,
    ) -> Result<TypeId> {
        let Some((head, args)) = items.split_first() else {
            return Err(TypeError::shape("application", "empty form ()"));
        };
        if args.is_empty() {
            return Err(TypeError::shape(
                "application",
                format!("({}) applies a function to no arguments", head),
            ));
        }
        let mut function = self.infer_node(head, env, non_generic)?;
        for arg in args {
            let argument = self.infer_node(arg, env, non_generic)?;
            let result = self.arena.new_variable();
            let expected = self.arena.function(argument, result);
            self.arena.unify(expected, function)?;
            function = result;
        }
        Ok(function)
    }
}

/// Split `(keyword (...) body)` into its non-empty operand list and body.
fn form_operands(keyword: Keyword, items: &[Node]) -> Result<(&[Node], &Node)> {
    let [_, head, body] = items else {
        return Err(TypeError::shape(
            keyword.as_str(),
            format!("expected 2 operands, found {}", items.len().saturating_sub(1)),
        ));
    };
    let what = match keyword {
        Keyword::Lambda => "list of parameters",
        _ => "list of bindings",
    };
    match head.as_list() {
        Some([]) => Err(TypeError::shape(keyword.as_str(), format!("empty {}", what))),
        Some(list) => Ok((list, body)),
        None => Err(TypeError::shape(
            keyword.as_str(),
            format!("expected {}, found {}", what, head),
        )),
    }
}

fn bindings(keyword: Keyword, list: &[Node]) -> Result<Vec<(&Ident, &Node)>> {
    list.iter()
        .map(|binding| match binding.as_list() {
            Some([name, value]) => match name.as_symbol() {
                Some(name) => Ok((name, value)),
                None => Err(TypeError::shape(
                    keyword.as_str(),
                    format!("expected identifier in binding, found {}", name),
                )),
            },
            _ => Err(TypeError::shape(
                keyword.as_str(),
                format!("expected binding (name expr), found {}", binding),
            )),
        })
        .collect()
}

fn parameters(list: &[Node]) -> Result<Vec<&Ident>> {
    list.iter()
        .map(|param| {
            param.as_symbol().ok_or_else(|| {
                TypeError::shape(
                    Keyword::Lambda.as_str(),
                    format!("expected identifier, found {}", param),
                )
            })
        })
        .collect()
}
